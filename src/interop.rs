/*!
# `serde_json` Interop

Enabling the `serde_json` feature allows converting a [`Value`] into a
[`serde_json::Value`]. Object order is preserved only if `serde_json` itself
is built with `preserve_order`.

```
use jsonparse::parse;
let value = parse(r#"{"a": [1, 2.5, "x"]}"#).unwrap();
let json: serde_json::Value = value.into();
assert_eq!(json, serde_json::json!({"a": [1, 2.5, "x"]}));
```
*/
use crate::value::Value;

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(b) => Self::Bool(b),
            Value::Integer(n) => Self::Number(n.into()),
            // NaN and infinities have no JSON representation
            Value::Float(n) => serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
            Value::Array(values) => Self::Array(values.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}
