use indexmap::IndexMap;

use crate::flow_log::FlowRecord;
use crate::lookup::{LookupKey, LookupTable};
use crate::protocol;

/// Reserved tag for records that match no lookup entry.
pub const UNTAGGED: &str = "untagged";

/// Tag to occurrence count, in first-seen tag order.
pub type TagCounts = IndexMap<String, u64>;

/// (destination port, protocol display name) to occurrence count, in
/// first-seen order.
pub type PortProtocolCounts = IndexMap<(String, String), u64>;

/// Counts records per tag, classifying unmatched records as `untagged`.
///
/// A single streaming fold; record order only determines the insertion order
/// of tag keys, never the totals.
pub fn count_by_tag(records: &[FlowRecord], table: &LookupTable) -> TagCounts {
    let mut counts = TagCounts::new();
    for record in records {
        let key = LookupKey::new(record.dstport.clone(), record.protocol.clone());
        let tag = table.lookup(&key).unwrap_or(UNTAGGED);
        *counts.entry(tag.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Counts records per (port, protocol name) combination.
///
/// Keys use the human-readable protocol name. Unknown protocol values keep
/// their literal token inside the placeholder, so records merge only when the
/// raw value is identical.
pub fn count_by_port_protocol(records: &[FlowRecord]) -> PortProtocolCounts {
    let mut counts = PortProtocolCounts::new();
    for record in records {
        let protocol_name = protocol::resolve_name_str(&record.protocol);
        *counts
            .entry((record.dstport.clone(), protocol_name))
            .or_insert(0) += 1;
    }
    counts
}
