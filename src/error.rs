//! Error types for the outline toolkit.
//!
//! The extraction core itself is infallible — detection failures, unknown
//! languages, and orphan headings are all absorbed by documented fallback
//! policies. Errors only arise at the I/O shell around the core: reading
//! document dumps and writing outline JSON.

/// Result type alias for outline toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the extraction core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input document dump is structurally unusable
    #[error("Invalid document dump: {0}")]
    InvalidDump(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dump_message() {
        let err = Error::InvalidDump("no pages".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid document dump"));
        assert!(msg.contains("no pages"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(format!("{}", err).contains("IO error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
