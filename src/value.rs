/*!
# JSON Value

The tree produced by the parser. Objects keep their keys in insertion order;
a key that appears more than once keeps the position of its first
occurrence and the value of its last.

```
use jsonparse::{Value, parse};
let value = parse(r#"{"b": 1, "a": 2, "b": 3}"#).unwrap();
let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
assert_eq!(keys, ["b", "a"]);
assert_eq!(value.get("b"), Some(&Value::Integer(3)));
```
*/
use indexmap::IndexMap;
use std::str::FromStr;

use crate::error::Error;

/// Ordered mapping used for JSON objects.
pub type Map = IndexMap<String, Value>;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Literal `null`
    Null,
    /// Literal `true` or `false`
    Boolean(bool),
    /// Number literal without fraction or exponent
    Integer(i64),
    /// Number literal with a fraction and/or exponent, or an integer too
    /// large for `i64`
    Float(f64),
    /// String contents between the quotes, escape sequences kept verbatim
    String(String),
    /// Ordered sequence of values
    Array(Vec<Self>),
    /// Key-value pairs in insertion order
    Object(Map),
}

impl Value {
    /// Name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns the depth of the value: 1 for scalars and empty containers,
    /// otherwise 1 + the depth of the deepest child.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Array(arr) => {
                let inner_depth = arr.iter().map(Self::depth).max().unwrap_or(0);
                1 + inner_depth
            }
            Self::Object(map) => {
                let inner_depth = map.values().map(Self::depth).max().unwrap_or(0);
                1 + inner_depth
            }
            _ => 1,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64`, widening integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    /// Looks up the element at `index` if this is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }
}

impl FromStr for Value {
    type Err = Error;

    /// Parses with the default, lenient options.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<V: Into<Self>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for Value {
    /// Collects pairs into an object, later duplicates overwriting earlier
    /// ones in place.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
