use log::info;
use serde::de::DeserializeOwned;

use std::{fs::File, io::BufReader, path::Path};

use crate::error::{Result, SalesError};

/// Reads a JSON array of records from `path`.
///
/// # Errors
///
/// Returns errors if:
/// * The file cannot be opened
/// * The file is not a JSON array of `T`
/// * The array is empty
pub fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    info!("loading file: {}", path.display());
    let file = File::open(path).map_err(|source| SalesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SalesError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if records.is_empty() {
        return Err(SalesError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!("loaded {}: {} records found", path.display(), records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn load_records_fn_reads_json_array() {
        let records: Vec<Value> = load_records("testdata/products.json").unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn load_records_fn_returns_read_error_for_missing_file() {
        let err = load_records::<Value>("testdata/bogus.json").unwrap_err();
        assert!(matches!(err, SalesError::Read { .. }), "{err}");
    }

    #[test]
    fn load_records_fn_returns_parse_error_for_invalid_json() {
        let err = load_records::<Value>("testdata/invalid.json").unwrap_err();
        assert!(matches!(err, SalesError::Parse { .. }), "{err}");
    }

    #[test]
    fn load_records_fn_returns_empty_error_for_empty_array() {
        let err = load_records::<Value>("testdata/empty.json").unwrap_err();
        assert!(matches!(err, SalesError::Empty { .. }), "{err}");
    }
}
