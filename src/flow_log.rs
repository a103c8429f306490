use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::errors::{FlowTagError, Result};

// Flow-log lines are whitespace-delimited; the destination port and protocol
// number sit at fixed positions 7 and 8 (1-indexed), so a well-formed line
// needs at least 8 fields.
const MIN_FIELDS: usize = 8;
const DSTPORT_FIELD: usize = 6;
const PROTOCOL_FIELD: usize = 7;

/// The (destination port, protocol number) pair extracted from one log line,
/// both kept as raw string fields for exact matching downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub dstport: String,
    pub protocol: String,
}

/// Parses one flow-log line. Lines with fewer than 8 whitespace-delimited
/// fields are skipped with a diagnostic.
pub fn parse_line(line: &str) -> Option<FlowRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        warn!("Skipping incomplete line: {}", line.trim());
        return None;
    }
    Some(FlowRecord {
        dstport: fields[DSTPORT_FIELD].to_string(),
        protocol: fields[PROTOCOL_FIELD].to_string(),
    })
}

/// Parses every line of a flow-log source in order, dropping skipped lines.
/// Returns an error only when the underlying reader fails.
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<Vec<FlowRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        if let Some(record) = parse_line(&line?) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Reads and parses a flow-log file into an ordered record sequence.
pub fn parse_file(path: &Path) -> Result<Vec<FlowRecord>> {
    let file = File::open(path).map_err(|source| FlowTagError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file)).map_err(|source| FlowTagError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })
}
