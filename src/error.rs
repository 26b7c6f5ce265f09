//! Error types for the command stream translator.
//!
//! Most problems met while translating a page are recoverable and are reported
//! as [`Diagnostic`](crate::diagnostics::Diagnostic)s instead. The errors here
//! are the ones that abort the conversion of a page or a batch.

use std::path::PathBuf;

/// Result type alias for translator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a device command stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while writing the command stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The output destination of a page could not be opened for writing
    #[error("Cannot open output '{}': {source}", path.display())]
    OutputOpen {
        /// Destination that was requested
        path: PathBuf,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// Output file template cannot name more than one page
    #[error("Invalid output template '{0}': converting several pages needs a '%d' placeholder")]
    InvalidTemplate(String),

    /// Requested page does not exist
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Event trace could not be decoded
    #[error("Invalid event trace: {0}")]
    Trace(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_open_error() {
        let err = Error::OutputOpen {
            path: PathBuf::from("/nonexistent/page.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("/nonexistent/page.txt"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_invalid_template_error() {
        let err = Error::InvalidTemplate("out.txt".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("out.txt"));
        assert!(msg.contains("%d"));
    }

    #[test]
    fn test_page_not_found_error() {
        let err = Error::PageNotFound("iv".to_string());
        assert_eq!(format!("{}", err), "Page not found: iv");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
