/*!
# Recursive Descent Parser

Builds a [`Value`] tree from a token sequence. [`parse_value`] dispatches on
the next token and hands objects and arrays to their builders, which call
back into [`parse_value`] for every nested value.

## Errors

Any deviation from the grammar stops parsing with a [`SyntaxError`]; there
is no recovery and no partial result:

```rust
use jsonparse::parser::{Cursor, SyntaxError, parse_value};
use jsonparse::tokenize;

let tokens = tokenize("[1, 2");
let result = parse_value(&mut Cursor::new(&tokens));
assert_eq!(result, Err(SyntaxError::UnexpectedEndOfInput));
```
*/
pub mod cursor;

use std::error::Error;
use std::fmt;

use crate::tokenizer::{Number, Token};
use crate::value::{Map, Value};

pub use cursor::Cursor;

/// The kind of container a [`SyntaxError::ExpectedComma`] occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Object,
    Array,
}

/// Represents errors that can occur while parsing a token sequence.
///
/// `position` fields hold the index of the offending token.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxError {
    /// A token that cannot start a value.
    UnexpectedToken { token: Token, position: usize },
    /// The tokens ran out in the middle of a value.
    UnexpectedEndOfInput,
    /// An object key was not followed by `:`.
    ExpectedColon { found: Token, position: usize },
    /// A value inside an object or array was not followed by `,` or the
    /// closing delimiter.
    ExpectedComma {
        found: Token,
        position: usize,
        context: Container,
    },
    /// An object member did not start with a string key.
    ExpectedKey { found: Token, position: usize },
    /// Tokens remained after the root value.
    TrailingTokens { position: usize },
    /// Objects and arrays were nested deeper than allowed.
    DepthLimitExceeded { limit: usize },
}

impl Error for SyntaxError {}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token `{token}` at token {position}")
            }
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
            Self::ExpectedColon { found, position } => {
                write!(
                    f,
                    "Expected ':' after key, found `{found}` at token {position}"
                )
            }
            Self::ExpectedComma {
                found,
                position,
                context,
            } => {
                let between = match context {
                    Container::Object => "key-value pairs",
                    Container::Array => "values",
                };
                write!(
                    f,
                    "Expected ',' between {between}, found `{found}` at token {position}"
                )
            }
            Self::ExpectedKey { found, position } => {
                write!(
                    f,
                    "Expected string key, found `{found}` at token {position}"
                )
            }
            Self::TrailingTokens { position } => {
                write!(f, "Unexpected trailing content at token {position}")
            }
            Self::DepthLimitExceeded { limit } => {
                write!(f, "Nesting exceeds the limit of {limit} levels")
            }
        }
    }
}

/// Parse exactly one value from the front of `cursor`.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the tokens do not form a value.
pub fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    let (position, token) = cursor.advance()?;

    match token {
        Token::LBrace => parse_object(cursor),
        Token::LBracket => parse_array(cursor),
        Token::String(s) => Ok(Value::String(s.clone())),
        Token::Number(Number::Integer(n)) => Ok(Value::Integer(*n)),
        Token::Number(Number::Float(n)) => Ok(Value::Float(*n)),
        Token::True => Ok(Value::Boolean(true)),
        Token::False => Ok(Value::Boolean(false)),
        Token::Null => Ok(Value::Null),
        _ => Err(SyntaxError::UnexpectedToken {
            token: token.clone(),
            position,
        }),
    }
}

/// Parse the members of an object whose `{` was just consumed, through the
/// matching `}`.
fn parse_object(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    cursor.enter()?;
    let mut map = Map::new();

    // `}` may only close the object directly after `{` or after a value
    if cursor.peek() == Some(&Token::RBrace) {
        cursor.advance()?;
        cursor.leave();
        return Ok(Value::Object(map));
    }

    loop {
        let (position, token) = cursor.advance()?;
        let Token::String(key) = token else {
            return Err(SyntaxError::ExpectedKey {
                found: token.clone(),
                position,
            });
        };

        let (position, token) = cursor.advance()?;
        if *token != Token::Colon {
            return Err(SyntaxError::ExpectedColon {
                found: token.clone(),
                position,
            });
        }

        let value = parse_value(cursor)?;
        // NOTE: `IndexMap::insert` keeps the original slot of a duplicate key
        map.insert(key.clone(), value);

        let (position, token) = cursor.advance()?;
        match token {
            Token::RBrace => break,
            Token::Comma => {}
            _ => {
                return Err(SyntaxError::ExpectedComma {
                    found: token.clone(),
                    position,
                    context: Container::Object,
                });
            }
        }
    }

    cursor.leave();
    Ok(Value::Object(map))
}

/// Parse the elements of an array whose `[` was just consumed, through the
/// matching `]`.
fn parse_array(cursor: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    cursor.enter()?;
    let mut array = Vec::new();

    loop {
        // `]` may close the array right after `[` or after a `,`
        if cursor.peek() == Some(&Token::RBracket) {
            cursor.advance()?;
            break;
        }

        array.push(parse_value(cursor)?);

        let (position, token) = cursor.advance()?;
        match token {
            Token::RBracket => break,
            Token::Comma => {}
            _ => {
                return Err(SyntaxError::ExpectedComma {
                    found: token.clone(),
                    position,
                    context: Container::Array,
                });
            }
        }
    }

    cursor.leave();
    Ok(Value::Array(array))
}
