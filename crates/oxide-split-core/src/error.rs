//! Error types for the splitter.

/// Errors raised by the boundary entry points of the lexer.
///
/// Splitting a `&str` never fails. Only callers that hand over untyped data
/// (raw bytes, JSON values) can trip over non-textual input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The input was not SQL text.
    #[error("no SQL string to parse: \n{value}")]
    InvalidInput {
        /// Rendering of the offending value.
        value: String,
    },
}

impl LexError {
    /// Numeric code carried by [`LexError::InvalidInput`].
    pub const INVALID_INPUT_CODE: u32 = 10;

    /// Creates an invalid input error for the given value.
    #[must_use]
    pub fn invalid_input(value: impl Into<String>) -> Self {
        Self::InvalidInput {
            value: value.into(),
        }
    }

    /// Returns the fixed numeric code of this error.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::InvalidInput { .. } => Self::INVALID_INPUT_CODE,
        }
    }
}

/// Result type for splitter operations.
pub type Result<T> = std::result::Result<T, LexError>;
