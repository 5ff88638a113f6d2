use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::config::files::STDIN_MARKER;
use crate::errors::AppResult;
use crate::form::snapshot::FormSnapshot;

/// Read raw snapshot text from a file, or from stdin when the path is `-`
pub fn read_source(path: &str) -> io::Result<String> {
    if path == STDIN_MARKER {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    fs::read_to_string(path)
}

/// Load and trim a snapshot
pub fn load_snapshot(path: &str) -> AppResult<FormSnapshot> {
    log::debug!("loading snapshot from {}", path);
    let content = read_source(path)?;
    Ok(FormSnapshot::from_json(&content)?)
}

/// Write text to a file, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            log::debug!("writing {} bytes to {}", text.len(), path.display());
            fs::write(path, text)
        }
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use tempfile::tempdir;

    #[test]
    fn test_load_snapshot_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cr.json");
        fs::write(&path, r#"{"requester_email": " a@x.com "}"#).unwrap();

        let snapshot = load_snapshot(path.to_str().unwrap()).unwrap();
        assert_eq!(snapshot.requester_email, "a@x.com");
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let result = load_snapshot(path.to_str().unwrap());
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_load_snapshot_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cr.json");
        fs::write(&path, "not json").unwrap();

        let result = load_snapshot(path.to_str().unwrap());
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("body.md");

        write_output(Some(&path), "### Heading\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "### Heading\n");
    }
}
