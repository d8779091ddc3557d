use std::fmt::{self, Display, Write as _};

use itertools::Itertools as _;

use crate::render::write_quoted;

/// A GraphQL input value, used for argument and input field defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i64),
    /// NaN and the infinities have no GraphQL literal and print as `null`, the way serde_json serializes them.
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<Value>),
    /// Fields in declaration order.
    Object(Vec<(String, Value)>),
}

/// Renders the value as a GraphQL literal.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Int(i) => Display::fmt(i, f),
            Value::Float(val) if !val.is_finite() => f.write_str("null"),
            Value::Float(val) => Display::fmt(val, f),
            Value::String(s) => write_quoted(f, s),
            Value::Enum(val) => f.write_str(val),
            Value::List(values) => write!(f, "[{}]", values.iter().format(", ")),
            Value::Object(fields) => {
                let mut fields = fields.iter().peekable();

                f.write_char('{')?;
                while let Some((name, value)) = fields.next() {
                    write!(f, "{name}: {value}")?;

                    if fields.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char('}')
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// JSON strings become GraphQL strings: there is no way to tell an enum value apart in JSON.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Boolean(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => number.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(values) => Value::List(values.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(42), "42")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from(2.0), "2")]
    #[case(Value::from(f64::NAN), "null")]
    #[case(Value::from(f64::INFINITY), "null")]
    #[case(Value::from(vec![f64::NEG_INFINITY, 0.5]), "[null, 0.5]")]
    #[case(Value::from("say \"hi\"\n"), r#""say \"hi\"\n""#)]
    #[case(Value::Enum("NEWHOPE".into()), "NEWHOPE")]
    #[case(Value::from(vec![1, 2, 3]), "[1, 2, 3]")]
    #[case(Value::List(Vec::new()), "[]")]
    fn literals(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn objects_keep_field_order() {
        let value = Value::from(serde_json::json!({ "limit": 10, "after": null, "tags": ["a", "b"] }));

        assert_eq!(value.to_string(), r#"{limit: 10, after: null, tags: ["a", "b"]}"#);
    }
}
