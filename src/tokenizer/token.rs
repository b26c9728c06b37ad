//! # JSON Token
//!
//! Defines the typed tokens produced when scanning a JSON document.
use std::fmt::Display;

/// Numeric payload of a [`Token::Number`].
///
/// The integer/float split is decided by the lexer: a literal containing a
/// `.` or an exponent marker is a float, everything else is an integer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Number {
    /// Integral literal, e.g. `-42`
    Integer(i64),
    /// Literal with a fraction and/or exponent, e.g. `1.5e2`
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // `{:?}` keeps the trailing `.0` so floats stay recognizable
            Self::Float(n) => write!(f, "{n:?}"),
        }
    }
}

/// Represents a token from a JSON document.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /* Values */
    /// Numeric literal
    Number(Number),

    /// String literal, with the surrounding quotes removed.
    // NOTE: escape sequences are kept verbatim, e.g. `a\"b` stays 4 chars
    String(String),

    /// Literal `true`
    True,

    /// Literal `false`
    False,

    /// Literal `null`
    Null,

    /* Delimiters */
    /// Opening curly brace
    LBrace,

    /// Closing curly brace
    RBrace,

    /// Opening square bracket
    LBracket,

    /// Closing square bracket
    RBracket,

    /// Comma character
    Comma,

    /// Colon character
    Colon,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Null => write!(f, "null"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
        }
    }
}
