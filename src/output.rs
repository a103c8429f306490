use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::aggregate::{PortProtocolCounts, TagCounts};
use crate::errors::{FlowTagError, Result};

/// Writes the two count summaries as CSV: a `Tag,Count` block and a
/// `Port,Protocol,Count` block, separated by one blank row. Rows follow the
/// insertion order of the count maps. Fields pass through `csv::Writer`, so
/// free-text tags containing delimiters are quoted.
pub struct ReportWriter<W: Write> {
    inner: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        ReportWriter { inner }
    }

    pub fn write_report(
        &mut self,
        tag_counts: &TagCounts,
        port_protocol_counts: &PortProtocolCounts,
    ) -> std::io::Result<()> {
        debug!("Writing tag counts block");
        {
            let mut writer = csv::Writer::from_writer(&mut self.inner);
            writer.write_record(["Tag", "Count"]).map_err(csv_to_io)?;
            for (tag, count) in tag_counts {
                writer
                    .write_record([tag.as_str(), &count.to_string()])
                    .map_err(csv_to_io)?;
            }
            writer.flush()?;
        }

        // The separator row is empty; csv::Writer quotes a lone empty field,
        // so it goes straight to the underlying writer.
        writeln!(self.inner)?;

        debug!("Writing port/protocol counts block");
        {
            let mut writer = csv::Writer::from_writer(&mut self.inner);
            writer
                .write_record(["Port", "Protocol", "Count"])
                .map_err(csv_to_io)?;
            for ((port, protocol_name), count) in port_protocol_counts {
                writer
                    .write_record([port.as_str(), protocol_name.as_str(), &count.to_string()])
                    .map_err(csv_to_io)?;
            }
            writer.flush()?;
        }

        self.inner.flush()
    }
}

/// Writes the report to a file, mapping any failure to `SinkUnwritable`.
pub fn write_report_file(
    path: &Path,
    tag_counts: &TagCounts,
    port_protocol_counts: &PortProtocolCounts,
) -> Result<()> {
    let file = File::create(path).map_err(|source| FlowTagError::SinkUnwritable {
        path: path.to_path_buf(),
        source,
    })?;
    ReportWriter::new(file)
        .write_report(tag_counts, port_protocol_counts)
        .map_err(|source| FlowTagError::SinkUnwritable {
            path: path.to_path_buf(),
            source,
        })
}

fn csv_to_io(e: csv::Error) -> std::io::Error {
    match e.into_kind() {
        csv::ErrorKind::Io(io_err) => io_err,
        other => std::io::Error::new(std::io::ErrorKind::InvalidData, format!("{:?}", other)),
    }
}
