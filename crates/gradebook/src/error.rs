use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input is empty or contains no usable rows")]
    ParseEmpty,

    #[error("Invalid grade for {field}: {value:?} (expected a number from 1 to 5)")]
    InvalidGrade { field: String, value: String },

    #[error("Row index {index} out of range (roster has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Snapshot is corrupt: {0}")]
    SnapshotCorrupt(String),

    #[error("Nothing to export: the roster is empty")]
    EmptyStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Errors the user can fix by changing input, as opposed to I/O or caller bugs
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::ParseEmpty
                | Error::InvalidGrade { .. }
                | Error::UnknownField(_)
                | Error::EmptyStore
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_invalid_grade_message() {
        let err = Error::InvalidGrade {
            field: "Math".to_string(),
            value: "6".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid grade for Math: \"6\" (expected a number from 1 to 5)"
        );
        assert!(err.is_user_error());
        assert!(!Error::IndexOutOfRange { index: 3, len: 1 }.is_user_error());
    }
}
