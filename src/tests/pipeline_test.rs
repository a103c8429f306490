#[cfg(test)]
mod tests {
    use crate::aggregate::{count_by_port_protocol, count_by_tag};
    use crate::flow_log::parse_reader;
    use crate::lookup::LookupTable;
    use crate::output::ReportWriter;

    const LOOKUP: &str = "\
dstport,protocol,tag
25,TCP,smtp
443,TCP,https
110,UDP,email
";

    const FLOW_LOG: &str = "\
2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 49153 443 6 25 20000 1620140761 1620140821 ACCEPT OK
2 123456789012 eni-9k10l11m 192.168.1.5 51.15.99.115 49321 25 6 20 10000 1620140661 1620140721 ACCEPT OK
2 123456789012 eni-4d3c2b1a 192.168.1.6 87.250.250.242 49322 110 17 15 8000 1620140661 1620140721 ACCEPT OK
2 123456789012 eni-5e6f7g8h 192.168.1.7 198.51.100.3 49323 8080 6 12 6000 1620140661 1620140721 REJECT OK
garbage line
";

    fn run_pipeline() -> String {
        let table = LookupTable::from_reader(LOOKUP.as_bytes()).unwrap();
        let records = parse_reader(FLOW_LOG.as_bytes()).unwrap();

        let tag_counts = count_by_tag(&records, &table);
        let port_protocol_counts = count_by_port_protocol(&records);

        let mut buffer = Vec::new();
        ReportWriter::new(&mut buffer)
            .write_report(&tag_counts, &port_protocol_counts)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_full_pipeline_output() {
        let expected = "\
Tag,Count
https,1
smtp,1
email,1
untagged,1

Port,Protocol,Count
443,TCP,1
25,TCP,1
110,UDP,1
8080,TCP,1
";
        assert_eq!(run_pipeline(), expected);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        assert_eq!(run_pipeline(), run_pipeline());
    }

    #[test]
    fn test_exit_code_mapping() {
        use crate::errors::FlowTagError;
        use std::io::{Error, ErrorKind};
        use std::path::PathBuf;

        let invalid = FlowTagError::InvalidProtocol {
            name: "BOGUS".to_string(),
        };
        let unreadable = FlowTagError::SourceUnreadable {
            path: PathBuf::from("in.csv"),
            source: Error::new(ErrorKind::NotFound, "missing"),
        };
        let unwritable = FlowTagError::SinkUnwritable {
            path: PathBuf::from("out.csv"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(invalid.exit_code(), 1);
        assert_eq!(unreadable.exit_code(), 2);
        assert_eq!(unwritable.exit_code(), 3);
    }
}
