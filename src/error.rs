use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can abort a coverage run.
///
/// A base without depth data is not represented here: that is a normal
/// "low coverage" outcome for the region, not a failure of the run.
#[derive(Error, Debug)]
pub enum CoverageError {
    /// A line in one of the input files does not have the expected shape.
    #[error("{source_name}:{line}: {message}")]
    Format {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CoverageError {
    pub fn format(source_name: &str, line: usize, message: impl Into<String>) -> Self {
        CoverageError::Format {
            source_name: source_name.to_string(),
            line,
            message: message.into(),
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        CoverageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, CoverageError::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_names_file_and_line() {
        let err = CoverageError::format("panel.bed", 3, "expected 8 fields, found 7");
        assert_eq!(err.to_string(), "panel.bed:3: expected 8 fields, found 7");
        assert!(err.is_format());
    }

    #[test]
    fn io_error_names_path() {
        let err = CoverageError::io(
            Path::new("/no/such/file"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("/no/such/file: "));
        assert!(!err.is_format());
    }
}
