use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::errors::{FlowTagError, Result};
use crate::protocol;

/// Key into the lookup table. Both halves are kept as canonical string forms
/// so matching is exact, with no numeric coercion. The protocol half is
/// always the resolved number string, never the raw name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub dstport: String,
    pub protocol_number: String,
}

impl LookupKey {
    pub fn new(dstport: impl Into<String>, protocol_number: impl Into<String>) -> Self {
        LookupKey {
            dstport: dstport.into(),
            protocol_number: protocol_number.into(),
        }
    }
}

/// One row of the lookup CSV, columns `dstport,protocol,tag`.
#[derive(Debug, Deserialize)]
struct LookupRow {
    dstport: String,
    protocol: String,
    tag: String,
}

/// Exact-match classifier from (destination port, protocol number) to a tag.
/// Built once from a CSV source; immutable afterwards.
#[derive(Debug)]
pub struct LookupTable {
    entries: HashMap<LookupKey, String>,
}

impl LookupTable {
    /// Loads the lookup table from a CSV file.
    ///
    /// Rows whose protocol name does not resolve, or that fail to parse, are
    /// skipped with a diagnostic; only a failure to open or read the file
    /// itself is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| FlowTagError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file).map_err(|source| FlowTagError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the table from any CSV source with a `dstport,protocol,tag`
    /// header row. Returns an error only when the underlying reader fails;
    /// malformed rows are skipped.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let mut entries: HashMap<LookupKey, String> = HashMap::new();
        let mut csv_reader = csv::Reader::from_reader(reader);

        for result in csv_reader.deserialize::<LookupRow>() {
            let row = match result {
                Ok(row) => row,
                Err(e) => match e.into_kind() {
                    csv::ErrorKind::Io(io_err) => return Err(io_err),
                    other => {
                        warn!("Skipping invalid entry in lookup table: {:?}", other);
                        continue;
                    }
                },
            };

            let protocol_number = match protocol::resolve_number(&row.protocol) {
                Ok(number) => number,
                Err(e) => {
                    warn!("Skipping invalid entry in lookup table: {}", e);
                    continue;
                }
            };

            let key = LookupKey::new(row.dstport, protocol_number);
            // Duplicate keys: later rows silently overwrite earlier ones.
            if let Some(previous) = entries.insert(key.clone(), row.tag.to_lowercase()) {
                debug!(
                    "Duplicate lookup key ({}, {}), replacing tag {:?}",
                    key.dstport, key.protocol_number, previous
                );
            }
        }

        Ok(LookupTable { entries })
    }

    /// Looks up the tag for a key. Pure read, O(1) expected.
    pub fn lookup(&self, key: &LookupKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
