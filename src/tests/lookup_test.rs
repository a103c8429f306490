#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::errors::FlowTagError;
    use crate::lookup::{LookupKey, LookupTable};

    #[test]
    fn test_load_lookup_table() {
        let source = "dstport,protocol,tag\n80,TCP,http\n443,TCP,https\n";
        let table = LookupTable::from_reader(source.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(&LookupKey::new("80", "6")), Some("http"));
        assert_eq!(table.lookup(&LookupKey::new("443", "6")), Some("https"));
    }

    #[test]
    fn test_invalid_protocol_row_skipped() {
        let source = "dstport,protocol,tag\n80,TCP,http\n25,BOGUS,smtp\n443,UDP,quic\n";
        let table = LookupTable::from_reader(source.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(&LookupKey::new("80", "6")), Some("http"));
        assert_eq!(table.lookup(&LookupKey::new("443", "17")), Some("quic"));
        assert_eq!(table.lookup(&LookupKey::new("25", "6")), None);
    }

    #[test]
    fn test_tag_is_lowercased() {
        let source = "dstport,protocol,tag\n80,TCP,HTTP\n";
        let table = LookupTable::from_reader(source.as_bytes()).unwrap();

        assert_eq!(table.lookup(&LookupKey::new("80", "6")), Some("http"));
    }

    #[test]
    fn test_quoted_tag_with_comma() {
        let source = "dstport,protocol,tag\n80,TCP,\"web,api\"\n";
        let table = LookupTable::from_reader(source.as_bytes()).unwrap();

        assert_eq!(table.lookup(&LookupKey::new("80", "6")), Some("web,api"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let source = "dstport,protocol,tag\n80,TCP,http\n80,TCP,web\n";
        let table = LookupTable::from_reader(source.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(&LookupKey::new("80", "6")), Some("web"));
    }

    #[test]
    fn test_unmatched_key_is_absent() {
        let source = "dstport,protocol,tag\n80,TCP,http\n";
        let table = LookupTable::from_reader(source.as_bytes()).unwrap();

        // Name half of the key must be the resolved number, never "TCP"
        assert_eq!(table.lookup(&LookupKey::new("80", "TCP")), None);
        assert_eq!(table.lookup(&LookupKey::new("8080", "6")), None);
    }

    #[test]
    fn test_empty_table_is_legal() {
        let source = "dstport,protocol,tag\n";
        let table = LookupTable::from_reader(source.as_bytes()).unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_file_is_source_unreadable() {
        let err = LookupTable::load(Path::new("/nonexistent/lookup.csv")).unwrap_err();
        assert!(matches!(err, FlowTagError::SourceUnreadable { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
