//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, IoError, ScreenplayError};

/// The foundation error enum for the Fadein workspace.
///
/// # Examples
///
/// ```
/// use fadein_error::{FadeinError, GeminiError, GeminiErrorKind};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// let err: FadeinError = gemini_err.into();
/// assert!(format!("{}", err).contains("Gemini Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FadeinErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Filesystem/I/O error
    #[from(IoError)]
    Io(IoError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Screenplay generation error
    #[from(ScreenplayError)]
    Screenplay(ScreenplayError),
}

/// Fadein error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fadein_error::{ConfigError, FadeinResult};
///
/// fn might_fail() -> FadeinResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fadein Error: {}", _0)]
pub struct FadeinError(Box<FadeinErrorKind>);

impl FadeinError {
    /// Create a new error from a kind.
    pub fn new(kind: FadeinErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FadeinErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FadeinErrorKind
impl<T> From<T> for FadeinError
where
    T: Into<FadeinErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fadein operations.
///
/// # Examples
///
/// ```
/// use fadein_error::{FadeinResult, IoError};
///
/// fn save_script() -> FadeinResult<()> {
///     Err(IoError::new("disk full"))?
/// }
/// ```
pub type FadeinResult<T> = std::result::Result<T, FadeinError>;
