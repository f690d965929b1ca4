//! Roster row source
//!
//! Reads comma-separated employee rows with no header line. Rows may carry
//! four or five fields (or more, extra ones are ignored by the builder), and
//! standard double-quote quoting is honoured.

use crate::error::LoadError;
use crate::hierarchy::Hierarchy;
use crate::policy::Policy;
use std::io::Read;
use std::path::Path;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

fn collect_rows<R: Read>(
    mut reader: csv::Reader<R>,
    source_name: &str,
) -> Result<Vec<Vec<String>>, LoadError> {
    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Vec<String>>())
                .map_err(|source| LoadError::SourceUnavailable {
                    source_name: source_name.to_string(),
                    source,
                })
        })
        .collect()
}

/// Read every row of a roster file
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, LoadError> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| LoadError::SourceUnavailable {
            source_name: source_name.clone(),
            source,
        })?;

    collect_rows(reader, &source_name)
}

/// Read every row from an arbitrary byte stream
pub fn read_rows_from<R: Read>(input: R, source_name: &str) -> Result<Vec<Vec<String>>, LoadError> {
    collect_rows(reader_builder().from_reader(input), source_name)
}

/// Read a roster file and build its hierarchy in one step
pub fn load<P: AsRef<Path>>(path: P, policy: &Policy) -> Result<Hierarchy, LoadError> {
    let path = path.as_ref();
    let rows = read_rows(path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Roster read");
    Hierarchy::from_rows(&rows, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_reads_rows_with_optional_manager() {
        let input = "100,CEO,NO1,90000,\n200,Manager1,Manage,60000,100\n300,Worker,Four,45000\n";
        let rows = read_rows_from(input.as_bytes(), "inline").unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["100", "CEO", "NO1", "90000", ""]);
        assert_eq!(rows[1][4], "100");
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let input = "100,\"Mary, Jr\",Smith,90000,\n";
        let rows = read_rows_from(input.as_bytes(), "inline").unwrap();
        assert_eq!(rows[0][1], "Mary, Jr");
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let rows = read_rows_from(" 100,CEO,Top,,,,5600,".as_bytes(), "inline").unwrap();
        assert_eq!(rows[0][0], " 100");
        assert_eq!(rows[0].len(), 8);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = read_rows("nonexistent.csv").unwrap_err();
        match err {
            LoadError::SourceUnavailable { source_name, .. } => {
                assert_eq!(source_name, "nonexistent.csv")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_source_unavailable() {
        let input: &[u8] = b"100,\xff\xfe,Top,1000,\n";
        let err = read_rows_from(input, "bytes").unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_load_builds_hierarchy_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "123,Joe,Doe,60000,").unwrap();
        writeln!(file, "124,Martin,Chekov,45000,123").unwrap();
        writeln!(file, "125,Bob,Ronstad,47000,123").unwrap();

        let hierarchy = load(file.path(), &Policy::default()).unwrap();
        assert_eq!(hierarchy.len(), 3);
        assert_eq!(hierarchy.direct_reports(123).len(), 2);
    }

    #[test]
    fn test_load_enforces_policy_row_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for id in 1..=3 {
            writeln!(file, "{},E,E,100,", id).unwrap();
        }
        let policy = Policy {
            max_rows: 2,
            ..Policy::default()
        };
        let err = load(file.path(), &policy).unwrap_err();
        assert!(matches!(err, LoadError::RowLimitExceeded { rows: 3, limit: 2 }));
    }
}
