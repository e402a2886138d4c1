use thiserror::Error;

/// Top-level error for the parse boundary and the text transforms.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text was not valid JSON. The message comes straight from the
    /// parser and includes line/column.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// A transform was handed text that is not in the shape it expects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("unterminated escape sequence at byte {0}")]
    UnterminatedEscape(usize),

    #[error("invalid escape character {1:?} at byte {0}")]
    InvalidEscape(usize, char),

    #[error("invalid \\uXXXX escape at byte {0}")]
    InvalidUnicodeEscape(usize),

    #[error("unpaired surrogate \\u{1:04x} at byte {0}")]
    UnpairedSurrogate(usize, u16),

    #[error("cannot represent {0} as XML")]
    Unrepresentable(String),
}

/// Malformed structural-path text (CLI `--collapse` values).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid path: {message} at byte {offset}")]
pub struct PathParseError {
    pub message: &'static str,
    pub offset: usize,
}

impl PathParseError {
    pub(crate) fn new(message: &'static str, offset: usize) -> Self {
        Self { message, offset }
    }
}
