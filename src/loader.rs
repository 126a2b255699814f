//! Sample loading from files and standard input.

use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

/// Source name that selects standard input.
pub const STDIN_SOURCE: &str = "-";

/// Read a sample from a file path.
///
/// The text is returned undecoded; decoding happens during inference so that
/// decode failures are reported as import errors.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::ReadError` if it can't be read as UTF-8 text.
pub fn load_sample(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a sample from any reader.
pub fn load_sample_reader(mut reader: impl Read) -> Result<String, LoadError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| LoadError::StdinError { source })?;
    Ok(content)
}

/// Read a sample from a path, or from standard input when the source is
/// missing or `-`.
pub fn load_sample_auto(source: Option<&str>) -> Result<String, LoadError> {
    match source {
        None | Some(STDIN_SOURCE) => load_sample_reader(std::io::stdin().lock()),
        Some(path) => load_sample(Path::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_sample_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id": 1}}"#).unwrap();

        let text = load_sample(file.path()).unwrap();
        assert_eq!(text.trim(), r#"{"id": 1}"#);
    }

    #[test]
    fn load_sample_file_not_found() {
        let result = load_sample(Path::new("/nonexistent/sample.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn load_sample_keeps_invalid_json() {
        // decoding is not the loader's job
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not valid json").unwrap();

        assert_eq!(load_sample(file.path()).unwrap(), "not valid json");
    }

    #[test]
    fn load_sample_reader_reads_all() {
        let text = load_sample_reader(&b"{\"a\": true}"[..]).unwrap();
        assert_eq!(text, "{\"a\": true}");
    }

    #[test]
    fn load_sample_auto_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let text = load_sample_auto(file.path().to_str()).unwrap();
        assert_eq!(text, "{}");
    }
}
