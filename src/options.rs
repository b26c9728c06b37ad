/*!
# Parse Options

Switches controlling how lenient the tokenizer and parser are. The defaults
match [`crate::parse`]: unrecognized characters are skipped, tokens after the
first complete value are ignored, and nesting is capped at
[`DEFAULT_MAX_DEPTH`] levels.

Options can be built fluently:

```
use jsonparse::ParseOptions;
let options = ParseOptions::default().strict(true).require_full_consumption(true);
assert!(options.strict);
```

or deserialized, with omitted fields taking their defaults:

```
use jsonparse::ParseOptions;
let options: ParseOptions = serde_json::from_str(r#"{"strict": true}"#).unwrap();
assert!(options.strict);
assert!(!options.require_full_consumption);
```
*/
use serde::{Deserialize, Serialize};

/// Default nesting limit for objects and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for [`crate::parse_with`] and [`crate::tokenize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Fail with a [`crate::LexError`] on characters that start no token
    /// instead of skipping them.
    pub strict: bool,
    /// Fail if tokens remain after the first complete value.
    pub require_full_consumption: bool,
    /// Maximum nesting depth of objects and arrays; `None` disables the limit.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            require_full_consumption: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    /// Set strict lexing.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set whether trailing tokens are rejected.
    #[must_use]
    pub const fn require_full_consumption(mut self, require: bool) -> Self {
        self.require_full_consumption = require;
        self
    }

    /// Set the nesting limit.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
