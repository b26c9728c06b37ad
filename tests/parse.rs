//! End-to-end tests of the tokenize-then-parse pipeline.
use jsonparse::{Error, Map, ParseOptions, SyntaxError, Value, parse, parse_with, tokenize};
use serde_json::json;

/// Build an object value from `(key, value)` pairs.
fn object<const N: usize>(pairs: [(&str, Value); N]) -> Value {
    pairs.into_iter().collect()
}

fn is_syntax_error(result: &Result<Value, Error>) -> bool {
    matches!(result, Err(Error::Syntax(_)))
}

#[test]
fn empty_input() {
    assert!(tokenize("").is_empty());
    assert_eq!(
        parse(""),
        Err(Error::Syntax(SyntaxError::UnexpectedEndOfInput))
    );
    assert_eq!(
        parse("   \n"),
        Err(Error::Syntax(SyntaxError::UnexpectedEndOfInput))
    );
}

#[test]
fn empty_containers() {
    assert_eq!(parse("{}"), Ok(Value::Object(Map::new())));
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
}

#[test]
fn object_with_array() {
    assert_eq!(
        parse(r#"{"a":1,"b":[true,false,null]}"#),
        Ok(object([
            ("a", Value::Integer(1)),
            (
                "b",
                Value::Array(vec![
                    Value::Boolean(true),
                    Value::Boolean(false),
                    Value::Null
                ])
            ),
        ]))
    );
}

#[test]
fn exponent_makes_float() {
    assert_eq!(
        parse(r#"{"x": 1.5e2}"#),
        Ok(object([("x", Value::Float(150.0))]))
    );
    assert_eq!(parse("1e2"), Ok(Value::Float(100.0)));
    assert_eq!(parse("100"), Ok(Value::Integer(100)));
    assert_eq!(parse("-7."), Ok(Value::Float(-7.0)));
}

#[test]
fn trailing_comma_in_object_fails() {
    assert!(is_syntax_error(&parse(r#"{"a":1,}"#)));
}

#[test]
fn trailing_comma_in_array_is_accepted() {
    assert_eq!(parse("[1,]"), Ok(Value::Array(vec![Value::Integer(1)])));
    assert_eq!(
        parse(r#"{"a": [true, null,]}"#),
        Ok(object([(
            "a",
            Value::Array(vec![Value::Boolean(true), Value::Null])
        )]))
    );
    assert!(matches!(
        parse("[,]"),
        Err(Error::Syntax(SyntaxError::UnexpectedToken { position: 1, .. }))
    ));
    assert!(matches!(
        parse("[1,,2]"),
        Err(Error::Syntax(SyntaxError::UnexpectedToken { position: 3, .. }))
    ));
}

#[test]
fn unterminated_array_fails() {
    assert_eq!(
        parse("[1,2"),
        Err(Error::Syntax(SyntaxError::UnexpectedEndOfInput))
    );
}

#[test]
fn unterminated_object_fails() {
    assert!(is_syntax_error(&parse(r#"{"a": 1"#)));
    assert!(is_syntax_error(&parse(r#"{"a": "#)));
    assert!(is_syntax_error(&parse("{")));
}

#[test]
fn duplicate_keys_last_write_wins() {
    let value = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(value, object([("a", Value::Integer(2))]));

    let value = parse(r#"{"a":1,"b":0,"a":2}"#).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(parse(r#"{ "a" : 1 }"#), parse(r#"{"a":1}"#));
    assert_eq!(
        parse("\t[ 1 ,\r\n 2 ]\n"),
        Ok(Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
    );
}

#[test]
fn strings_keep_escapes_verbatim() {
    assert_eq!(
        parse(r#"["a\"b", "é", "\\"]"#),
        Ok(Value::Array(vec![
            Value::String(r#"a\"b"#.to_string()),
            Value::String(r"é".to_string()),
            Value::String(r"\\".to_string()),
        ]))
    );
}

#[test]
fn missing_colon_and_comma() {
    assert!(matches!(
        parse(r#"{"a" 1}"#),
        Err(Error::Syntax(SyntaxError::ExpectedColon { .. }))
    ));
    assert!(matches!(
        parse(r#"{"a": 1 "b": 2}"#),
        Err(Error::Syntax(SyntaxError::ExpectedComma { .. }))
    ));
    assert!(matches!(
        parse("[1 2]"),
        Err(Error::Syntax(SyntaxError::ExpectedComma { .. }))
    ));
}

#[test]
fn structural_token_cannot_start_a_value() {
    assert!(matches!(
        parse("]"),
        Err(Error::Syntax(SyntaxError::UnexpectedToken { position: 0, .. }))
    ));
    assert!(matches!(
        parse(r#"{"a": :}"#),
        Err(Error::Syntax(SyntaxError::UnexpectedToken { position: 3, .. }))
    ));
}

#[test]
fn trailing_tokens() {
    assert_eq!(parse("true false"), Ok(Value::Boolean(true)));
    assert_eq!(parse("[1]]"), Ok(Value::Array(vec![Value::Integer(1)])));

    let options = ParseOptions::default().require_full_consumption(true);
    assert_eq!(
        parse_with("1 2", &options),
        Err(Error::Syntax(SyntaxError::TrailingTokens { position: 1 }))
    );
    assert_eq!(parse_with(" 1 ", &options), Ok(Value::Integer(1)));
}

#[test]
fn lenient_and_strict_lexing() {
    let input = r#"{"a": @1}"#;
    assert_eq!(parse(input), Ok(object([("a", Value::Integer(1))])));

    let options = ParseOptions::default().strict(true);
    match parse_with(input, &options) {
        Err(Error::Lex(err)) => {
            assert_eq!(err.offset, 6);
            assert_eq!(err.character, '@');
        }
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn lenient_lexing_can_hide_structure() {
    // the unterminated string's quote is skipped and its contents lexed
    assert_eq!(parse(r#""abc 12"#), Ok(Value::Integer(12)));
}

#[test]
fn depth_limit() {
    let deep = format!("{}{}", "[".repeat(600), "]".repeat(600));
    assert_eq!(
        parse(&deep),
        Err(Error::Syntax(SyntaxError::DepthLimitExceeded { limit: 512 }))
    );

    let options = ParseOptions::default().max_depth(Some(600));
    assert_eq!(parse_with(&deep, &options).map(|v| v.depth()), Ok(600));

    let options = ParseOptions::default().max_depth(Some(4));
    assert!(parse_with(r#"{"a": [{"b": [1]}]}"#, &options).is_ok());
    assert!(parse_with(r#"{"a": [{"b": [[1]]}]}"#, &options).is_err());
}

#[test]
fn from_str() {
    let value: Value = r#"{"k": [1.0, "v"]}"#.parse().unwrap();
    assert_eq!(
        value.get("k"),
        Some(&Value::Array(vec![
            Value::Float(1.0),
            Value::String("v".into())
        ]))
    );
    assert!("".parse::<Value>().is_err());
}

#[test]
fn error_display() {
    let err = parse(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error: Expected ':' after key, found `1` at token 2"
    );
    let err = parse("[1 2]").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error: Expected ',' between values, found `2` at token 2"
    );
}

/// Documents rendered by `serde_json` parse back to the same value. Strings
/// avoid characters `serde_json` would escape, since escapes are not decoded.
#[test]
fn round_trip_through_serde_json() {
    let documents = [
        json!(null),
        json!(true),
        json!(0),
        json!(-9_007_199_254_740_993_i64),
        json!(i64::MAX),
        json!(0.5),
        json!(-1.25e-7),
        json!(1e300),
        json!("plain text with spaces"),
        json!("olá こんにちは 💩"),
        json!([]),
        json!({}),
        json!([1, [2, [3, [4, []]]], {"k": {"k": {}}}]),
        json!({
            "name": "Alice",
            "age": 25,
            "isStudent": false,
            "courses": ["Math", "Science"],
            "address": null,
            "scores": [98.5, 87, -3.0],
            "nested": {"a": {"b": {"c": [true, false, null]}}}
        }),
    ];

    for document in documents {
        for text in [
            serde_json::to_string(&document).unwrap(),
            serde_json::to_string_pretty(&document).unwrap(),
        ] {
            let parsed = parse(&text).unwrap_or_else(|e| panic!("{text}: {e}"));
            assert_eq!(serde_json::Value::from(parsed), document, "input: {text}");
        }
    }
}

#[test]
fn integer_float_classification_survives_round_trip() {
    let parsed = parse(&serde_json::to_string(&json!([1, 1.0])).unwrap()).unwrap();
    assert_eq!(
        parsed,
        Value::Array(vec![Value::Integer(1), Value::Float(1.0)])
    );
}
