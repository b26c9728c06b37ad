/*!
# `jsonparse` Library

Turns JSON text into a [`Value`] tree in two passes: the [`tokenizer`] scans
the whole input into typed tokens, then the recursive-descent [`parser`]
walks those tokens with a forward-only [`parser::Cursor`].

```
use jsonparse::{Value, parse};
let value = parse(r#"{"a": 1, "b": [true, false, null]}"#).unwrap();
assert_eq!(value.get("a"), Some(&Value::Integer(1)));
assert_eq!(value.get("b").and_then(|b| b.get_index(2)), Some(&Value::Null));
```

[`parse`] is lenient: characters that start no token are skipped and
anything after the first complete value is ignored. [`parse_with`] takes
[`ParseOptions`] to tighten both:

```
use jsonparse::{Error, ParseOptions, parse, parse_with};
assert!(parse("1 2").is_ok());

let options = ParseOptions::default().require_full_consumption(true);
assert!(matches!(parse_with("1 2", &options), Err(Error::Syntax(_))));

let options = ParseOptions::default().strict(true);
assert!(matches!(parse_with("[1, #2]", &options), Err(Error::Lex(_))));
```
*/
pub mod commands;
pub mod error;
#[cfg(feature = "serde_json")]
pub mod interop;
pub mod options;
pub mod parser;
pub mod tokenizer;
pub mod utils;
pub mod value;

use log::debug;

use parser::{Cursor, parse_value};

// Re-exports
pub use error::Error;
pub use options::ParseOptions;
pub use parser::SyntaxError;
pub use tokenizer::{LexError, Token, tokenize, tokenize_with};
pub use value::{Map, Value};

/// Parse JSON text with the default, lenient [`ParseOptions`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the tokens do not form a value, including
/// for empty input.
pub fn parse(text: &str) -> Result<Value, Error> {
    parse_with(text, &ParseOptions::default())
}

/// Parse JSON text according to `options`.
///
/// # Errors
///
/// Returns [`Error::Lex`] for unrecognized characters in strict mode and
/// [`Error::Syntax`] if the tokens do not form a value, if the nesting limit
/// is exceeded, or if trailing tokens remain while
/// [`ParseOptions::require_full_consumption`] is set.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value, Error> {
    let tokens = tokenize_with(text, options)?;
    let mut cursor = Cursor::new(&tokens).with_max_depth(options.max_depth);

    let value = parse_value(&mut cursor)?;

    if !cursor.is_empty() {
        if options.require_full_consumption {
            return Err(SyntaxError::TrailingTokens {
                position: cursor.position(),
            }
            .into());
        }
        debug!("ignoring {} trailing tokens", cursor.remaining());
    }

    debug!("parsed {} value from {} tokens", value.kind(), cursor.position());
    Ok(value)
}
