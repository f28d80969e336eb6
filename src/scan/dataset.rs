use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::BufReader, path::Path};
use tracing::debug;

/// One parsed CSV line: an ordered list of text fields.
pub type Row = Vec<String>;

/// The whole document, rows in source order. Held entirely in memory for the
/// duration of the scan and discarded afterwards.
pub type Dataset = Vec<Row>;

/// Open `path` and parse the entire document eagerly.
///
/// The file handle is owned by the reader and closed when this function
/// returns, on success and on every error path alike. There is no header
/// row: row 0's fields are data like any other row's.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open CSV resource: {:?}", path.as_ref()))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // field counts may vary; only column 0 is read downstream
        .from_reader(BufReader::new(file));

    let mut rows: Dataset = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("malformed CSV document at record {}", idx))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    debug!(rows = rows.len(), "loaded dataset");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_preserves_row_order_and_fields() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"3,alpha\n7,beta\n2,gamma\n")?;

        let rows = load(tmp.path())?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["3", "alpha"]);
        assert_eq!(rows[1], vec!["7", "beta"]);
        assert_eq!(rows[2], vec!["2", "gamma"]);
        Ok(())
    }

    #[test]
    fn load_unquotes_quoted_fields() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"\"42\",\"has, comma\"\n")?;

        let rows = load(tmp.path())?;
        assert_eq!(rows, vec![vec!["42".to_string(), "has, comma".to_string()]]);
        Ok(())
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load("definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("failed to open CSV resource"));
    }

    #[test]
    fn load_invalid_utf8_is_a_malformed_document() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"3,ok\n\xff\xfe,bad\n")?;

        let err = load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("malformed CSV document"));
        Ok(())
    }

    #[test]
    fn load_empty_file_yields_empty_dataset() -> Result<()> {
        let tmp = NamedTempFile::new()?;
        let rows = load(tmp.path())?;
        assert!(rows.is_empty());
        Ok(())
    }
}
