//! Top-level error returned by [`crate::parse`] and [`crate::parse_with`].
use std::error;
use std::fmt;

use crate::parser::SyntaxError;
use crate::tokenizer::LexError;

/// Either stage of the pipeline can fail; both are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The input contained a character that starts no token (strict mode
    /// only).
    Lex(LexError),
    /// The tokens did not form a JSON value.
    Syntax(SyntaxError),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Lex(err) => Some(err),
            Self::Syntax(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "Lex error: {err}"),
            Self::Syntax(err) => write!(f, "Syntax error: {err}"),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}
