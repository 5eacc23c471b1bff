//! @ai:module:intent Decode stored errors from their JSON representation
//! @ai:module:layer infrastructure
//! @ai:module:public_api LoadError, Result, from_json, read_error
//! @ai:module:depends_on error

use crate::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path that selects standard input in [`read_error`].
pub const STDIN_PATH: &str = "-";

/// @ai:intent Failures while loading an error document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid error document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// @ai:intent Decode an error from JSON text
/// @ai:pre text uses the code/message/position/traces shape; traces may be absent
/// @ai:effects pure
pub fn from_json(text: &str) -> Result<Error> {
    Ok(serde_json::from_str(text)?)
}

/// @ai:intent Read and decode an error document from a file, or stdin for "-"
/// @ai:effects fs:read
pub fn read_error(path: &Path) -> Result<Error> {
    let text = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!("loaded {} bytes from {}", text.len(), path.display());
    from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::INTERNAL_ERROR;
    use crate::location::Location;
    use crate::Trace;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_json_without_traces() {
        let err = from_json(
            r#"{"code":{"id":3,"description":"failed to perform application task"},"message":"boom","position":{"file":"main.rs","line":7}}"#,
        )
        .unwrap();

        assert_eq!(err.code(), &INTERNAL_ERROR);
        assert_eq!(err.message(), "boom");
        assert_eq!(err.location(), &Location::new("main.rs", 7));
        assert!(err.traces().is_empty());
    }

    #[test]
    fn test_from_json_with_traces() {
        let err = from_json(
            r#"{"code":{"id":1},"message":"outer","position":{"file":"a.rs","line":2},"traces":[{"message":"inner","position":{"file":"b.rs","line":9}}]}"#,
        )
        .unwrap();

        assert_eq!(err.code().description(), "");
        assert_eq!(err.traces(), &[Trace::new("inner", Location::new("b.rs", 9))]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(from_json("not json"), Err(LoadError::Json(_))));
        assert!(matches!(from_json(r#"{"message":"no code"}"#), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_read_error_from_file() {
        let original = crate::Error::wrap(
            INTERNAL_ERROR,
            "outer",
            &crate::Error::new(INTERNAL_ERROR, "inner", Vec::new()),
        );

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{}", original.format_json(true)).unwrap();

        assert_eq!(read_error(file.path()).unwrap(), original);
    }

    #[test]
    fn test_read_error_missing_file() {
        let result = read_error(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(LoadError::FileRead { .. })));
    }
}
