//! # JSON Lexer
//!
//! Scans JSON text left to right into a sequence of tokens. At every position
//! the candidate patterns are tried in a fixed order (number, string, the
//! `true`/`false`/`null` keywords, the six structural characters, then
//! whitespace) and the first one that matches wins.
//!
//! Characters that match no pattern are skipped by default. Callers that want
//! to reject them instead can enable [`ParseOptions::strict`] and use
//! [`tokenize_with`].
use log::{debug, trace};
use std::error::Error;
use std::fmt;

use crate::options::ParseOptions;
use crate::tokenizer::{Number, Token};

/// Error returned by [`tokenize_with`] in strict mode when the input contains
/// a character that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the offending character in the input
    pub offset: usize,
    /// The offending character
    pub character: char,
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized character {:?} at byte {}",
            self.character, self.offset
        )
    }
}

/// Outcome of a single scan step.
#[derive(Debug, PartialEq)]
enum Scan {
    /// A token was recognized
    Token(Token),
    /// A run of whitespace was consumed
    Whitespace,
    /// No pattern matched; one character was consumed
    Unmatched { offset: usize, character: char },
}

/// A lexer over JSON text.
struct Lexer<'a> {
    /// The input text to tokenize
    input: &'a str,
    /// Byte view of `input`
    bytes: &'a [u8],
    /// Byte offset of the next unread byte
    position: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            position: 0,
        }
    }

    /// Returns the byte at `index`, if any.
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Number of consecutive ASCII digits starting at `index`.
    fn count_digits(&self, index: usize) -> usize {
        self.bytes
            .get(index..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    }

    /// Consume whitespace byte(s) starting from the current position.
    fn skip_whitespace(&mut self) {
        while matches!(self.byte_at(self.position), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.position += 1;
        }
    }

    /// Reads a number literal: `-?digits(.digits*)?([eE][+-]?digits)?`.
    fn read_number(&mut self) -> Option<Token> {
        let start = self.position;
        let mut end = start;

        // optional leading '-'
        if self.byte_at(end) == Some(b'-') {
            end += 1;
        }

        // integer part, at least one digit
        let digits = self.count_digits(end);
        if digits == 0 {
            return None;
        }
        end += digits;

        let mut is_float = false;

        // fractional part, the digits after '.' are optional
        if self.byte_at(end) == Some(b'.') {
            end += 1;
            end += self.count_digits(end);
            is_float = true;
        }

        // exponent part, only taken when at least one digit follows
        if matches!(self.byte_at(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(self.byte_at(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = self.count_digits(exp_end);
            if exp_digits > 0 {
                end = exp_end + exp_digits;
                is_float = true;
            }
        }

        self.position = end;
        Some(Token::Number(classify_number(&self.input[start..end], is_float)))
    }

    /// Reads a complete double-quoted string. Returns `None`, consuming
    /// nothing, if the quote at the current position does not open one.
    fn read_string(&mut self) -> Option<Token> {
        if self.byte_at(self.position) != Some(b'"') {
            return None;
        }

        let mut end = self.position + 1;
        loop {
            match self.byte_at(end)? {
                b'"' => break,
                // a backslash pairs with any character except a line feed
                b'\\' => match self.byte_at(end + 1)? {
                    b'\n' => return None,
                    _ => end += 2,
                },
                _ => end += 1,
            }
        }

        let content = self.input[self.position + 1..end].to_string();
        self.position = end + 1;
        Some(Token::String(content))
    }

    /// Reads one of the `true`/`false`/`null` keywords.
    fn read_keyword(&mut self) -> Option<Token> {
        let rest = &self.input[self.position..];
        let (token, len) = if rest.starts_with("true") {
            (Token::True, 4)
        } else if rest.starts_with("false") {
            (Token::False, 5)
        } else if rest.starts_with("null") {
            (Token::Null, 4)
        } else {
            return None;
        };
        self.position += len;
        Some(token)
    }

    /// Reads one of the single-character structural tokens.
    fn read_delimiter(&mut self) -> Option<Token> {
        let token = match self.byte_at(self.position)? {
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b'[' => Token::LBracket,
            b']' => Token::RBracket,
            b',' => Token::Comma,
            b':' => Token::Colon,
            _ => return None,
        };
        self.position += 1;
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Scan;

    fn next(&mut self) -> Option<Scan> {
        let byte = self.byte_at(self.position)?;

        if let Some(token) = self
            .read_number()
            .or_else(|| self.read_string())
            .or_else(|| self.read_keyword())
            .or_else(|| self.read_delimiter())
        {
            return Some(Scan::Token(token));
        }

        if matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
            self.skip_whitespace();
            return Some(Scan::Whitespace);
        }

        // every recognized pattern ends on an ASCII byte, so `position` is
        // always on a char boundary here
        let offset = self.position;
        let character = self.input[offset..].chars().next()?;
        self.position += character.len_utf8();
        Some(Scan::Unmatched { offset, character })
    }
}

/// Classifies a number literal. Integers that overflow `i64` fall back to the
/// nearest `f64`.
fn classify_number(text: &str, is_float: bool) -> Number {
    if !is_float && let Ok(n) = text.parse::<i64>() {
        return Number::Integer(n);
    }
    // `text` always matches the float grammar accepted by `f64::from_str`
    text.parse::<f64>().map_or(Number::Float(f64::NAN), Number::Float)
}

/// Tokenize JSON text, silently skipping characters that start no token.
///
/// This never fails: any input, including the empty string, produces a
/// (possibly empty) token sequence.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(text)
        .filter_map(|scan| match scan {
            Scan::Token(token) => Some(token),
            Scan::Whitespace => None,
            Scan::Unmatched { offset, character } => {
                trace!("skipping unrecognized character {character:?} at byte {offset}");
                None
            }
        })
        .collect();

    debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    tokens
}

/// Tokenize JSON text according to `options`.
///
/// # Errors
///
/// In strict mode, returns a [`LexError`] for the first character that
/// starts no token. In lenient mode this behaves like [`tokenize`] and never
/// fails.
pub fn tokenize_with(text: &str, options: &ParseOptions) -> Result<Vec<Token>, LexError> {
    if !options.strict {
        return Ok(tokenize(text));
    }

    let mut tokens: Vec<Token> = vec![];
    for scan in Lexer::new(text) {
        match scan {
            Scan::Token(token) => tokens.push(token),
            Scan::Whitespace => {}
            Scan::Unmatched { offset, character } => {
                return Err(LexError { offset, character });
            }
        }
    }

    debug!("tokenized {} bytes into {} tokens (strict)", text.len(), tokens.len());
    Ok(tokens)
}
