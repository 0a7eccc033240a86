use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InspectError>;

/// `sysexits.h` codes for the failures the tool can tell apart.
const EX_DATAERR: i32 = 65;
const EX_NOINPUT: i32 = 66;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed input: {0}")]
    Input(#[from] glyphrun::Error),
}

impl InspectError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReadInput { .. } => EX_NOINPUT,
            Self::Input(_) => EX_DATAERR,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use glyphrun::{DecodeError, Encoding};

    use super::InspectError;

    #[test]
    fn missing_input_maps_to_noinput() {
        let error = InspectError::ReadInput {
            path: "nope.txt".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(error.exit_code(), 66);
        assert!(error.to_string().starts_with("cannot read nope.txt: "));
    }

    #[test]
    fn malformed_input_maps_to_dataerr() {
        let error = InspectError::from(glyphrun::Error::UnalignedInput {
            encoding: Encoding::Utf32,
            len: 6,
        });
        assert_eq!(error.exit_code(), 65);
        assert_eq!(
            error.to_string(),
            "malformed input: 6 bytes is not a whole number of UTF-32 code units"
        );

        let error = InspectError::from(glyphrun::Error::from(DecodeError::TruncatedInput {
            consumed: 1,
            expected: 2,
        }));
        assert_eq!(error.exit_code(), 65);
    }

    #[test]
    fn io_errors_are_generic_failures() {
        let error = InspectError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(error.exit_code(), 1);
    }
}
