//! I/O error types.

/// Filesystem/I/O error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("I/O Error: {} at line {} in {}", message, line, file)]
pub struct IoError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create a new IoError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fadein_error::IoError;
    ///
    /// let err = IoError::new("Failed to write screenplay.txt");
    /// assert!(err.message.contains("screenplay.txt"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
