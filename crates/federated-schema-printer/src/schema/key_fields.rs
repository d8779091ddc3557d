use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::Error;

/// A federation field set, as found in `@key`, `@provides` and `@requires`: `id organization { id }`.
///
/// See <https://www.apollographql.com/docs/federation/v1/entities#compound-primary-keys>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyFields(Vec<KeyField>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyField {
    Leaf(String),
    Nested(String, KeyFields),
}

impl KeyField {
    pub fn leaf(name: impl Into<String>) -> Self {
        KeyField::Leaf(name.into())
    }

    pub fn nested(name: impl Into<String>, fields: impl IntoIterator<Item = KeyField>) -> Self {
        KeyField::Nested(name.into(), fields.into_iter().collect())
    }

    pub fn name(&self) -> &str {
        match self {
            KeyField::Leaf(name) | KeyField::Nested(name, _) => name,
        }
    }
}

impl KeyFields {
    pub fn iter(&self) -> std::slice::Iter<'_, KeyField> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<KeyField> for KeyFields {
    fn from_iter<T: IntoIterator<Item = KeyField>>(iter: T) -> Self {
        KeyFields(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeyFields {
    type Item = &'a KeyField;
    type IntoIter = std::slice::Iter<'a, KeyField>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the field set the way it appears inside the `fields: "..."` argument.
impl fmt::Display for KeyFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = self.iter().peekable();

        while let Some(field) = fields.next() {
            f.write_str(field.name())?;

            if let KeyField::Nested(_, subselection) = field {
                f.write_str(" { ")?;
                fmt::Display::fmt(subselection, f)?;
                f.write_str(" }")?;
            }

            if fields.peek().is_some() {
                f.write_char(' ')?;
            }
        }

        Ok(())
    }
}

impl FromStr for KeyFields {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = FieldSetParser { source: s, position: 0 }.selection(None)?;

        if fields.is_empty() {
            return Err(Error::InvalidKeyFields(format!("empty field set {s:?}")));
        }

        Ok(fields)
    }
}

/// Accepts the shapes federation libraries use to declare keys: a field set string, a list of strings and
/// mappings, or a mapping from field name to the nested selection.
impl TryFrom<serde_json::Value> for KeyFields {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let fields = match value {
            Value::String(field_set) => return field_set.parse(),
            Value::Object(mapping) => from_mapping(mapping)?,
            Value::Array(items) => {
                let mut fields = Vec::with_capacity(items.len());

                for item in items {
                    match item {
                        Value::String(field_set) => fields.extend(field_set.parse::<KeyFields>()?.0),
                        Value::Object(mapping) => fields.extend(from_mapping(mapping)?.0),
                        other => return Err(unexpected_shape(&other)),
                    }
                }

                KeyFields(fields)
            }
            other => return Err(unexpected_shape(&other)),
        };

        if fields.is_empty() {
            return Err(Error::InvalidKeyFields(String::from("empty field set")));
        }

        Ok(fields)
    }
}

fn from_mapping(mapping: serde_json::Map<String, serde_json::Value>) -> Result<KeyFields, Error> {
    mapping
        .into_iter()
        .map(|(name, subselection)| {
            if !super::is_valid_name(&name) {
                return Err(Error::InvalidKeyFields(format!("invalid field name {name:?}")));
            }

            Ok(KeyField::Nested(name, KeyFields::try_from(subselection)?))
        })
        .collect()
}

fn unexpected_shape(value: &serde_json::Value) -> Error {
    Error::InvalidKeyFields(format!("expected a field name or a mapping, found {value}"))
}

struct FieldSetParser<'a> {
    source: &'a str,
    position: usize,
}

impl FieldSetParser<'_> {
    /// Parses fields until the end of input, or until the closing brace of the selection opened by `parent`.
    fn selection(&mut self, parent: Option<&str>) -> Result<KeyFields, Error> {
        let mut fields = Vec::new();

        loop {
            self.skip_ignored();

            match (self.peek(), parent) {
                (None, None) => break,
                (None, Some(parent)) => {
                    return Err(self.error(format!("unclosed selection on `{parent}`")));
                }
                (Some('}'), Some(_)) => {
                    self.bump();
                    break;
                }
                (Some(_), _) => {
                    let name = self.name()?;
                    self.skip_ignored();

                    if self.peek() == Some('{') {
                        self.bump();
                        let subselection = self.selection(Some(&name))?;

                        if subselection.is_empty() {
                            return Err(self.error(format!("empty selection on `{name}`")));
                        }

                        fields.push(KeyField::Nested(name, subselection));
                    } else {
                        fields.push(KeyField::Leaf(name));
                    }
                }
            }
        }

        Ok(KeyFields(fields))
    }

    fn name(&mut self) -> Result<String, Error> {
        let rest = &self.source[self.position..];
        let len = rest
            .find(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
            .unwrap_or(rest.len());
        let name = &rest[..len];

        if !super::is_valid_name(name) {
            let found = rest.chars().next().unwrap_or_default();
            return Err(self.error(format!("unexpected {found:?}")));
        }

        self.position += len;

        Ok(name.to_owned())
    }

    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek() {
            if !(c.is_whitespace() || c == ',') {
                break;
            }

            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    fn error(&self, message: String) -> Error {
        Error::InvalidKeyFields(format!("{message} at offset {} in {:?}", self.position, self.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn simple_key() {
        let fields: KeyFields = "id".parse().unwrap();

        assert_eq!(fields, KeyFields::from_iter([KeyField::leaf("id")]));
        assert_eq!(fields.to_string(), "id");
    }

    #[test]
    fn compound_key_mapping() {
        let fields = KeyFields::try_from(json!({ "id": "code" })).unwrap();

        assert_eq!(fields.to_string(), "id { code }");
    }

    #[rstest::rstest]
    #[case("id", "id")]
    #[case("upc sku", "upc sku")]
    #[case("id, name", "id name")]
    #[case("id organization { id }", "id organization { id }")]
    #[case("  id organization{id   country{code} }  ", "id organization { id country { code } }")]
    fn field_set_strings(#[case] source: &str, #[case] expected: &str) {
        let fields: KeyFields = source.parse().unwrap();
        assert_eq!(fields.to_string(), expected);
    }

    #[rstest::rstest]
    #[case(json!("id"), "id")]
    #[case(json!(["upc", "sku"]), "upc sku")]
    #[case(json!(["id", { "organization": ["id"] }]), "id organization { id }")]
    #[case(json!({ "id": "code", "owner": { "team": ["id", "name"] } }), "id { code } owner { team { id name } }")]
    fn dynamic_shapes(#[case] value: serde_json::Value, #[case] expected: &str) {
        assert_eq!(KeyFields::try_from(value).unwrap().to_string(), expected);
    }

    #[rstest::rstest]
    #[case(json!(42))]
    #[case(json!(null))]
    #[case(json!(["id", 7]))]
    #[case(json!([["id"]]))]
    #[case(json!({ "id": true }))]
    #[case(json!({ "not a name": "id" }))]
    #[case(json!([]))]
    fn invalid_dynamic_shapes(#[case] value: serde_json::Value) {
        let error = KeyFields::try_from(value).unwrap_err();
        assert!(matches!(error, Error::InvalidKeyFields(_)), "{error:?}");
    }

    #[rstest::rstest]
    #[case("")]
    #[case("   ")]
    #[case("id {")]
    #[case("id { }")]
    #[case("id }")]
    #[case("{ id }")]
    #[case("organization { 1d }")]
    fn invalid_field_sets(#[case] source: &str) {
        let error = source.parse::<KeyFields>().unwrap_err();
        assert!(error.to_string().starts_with("Invalid keyField config: "), "{error}");
    }

    #[test]
    fn error_reports_the_offset() {
        let error = "id organization {".parse::<KeyFields>().unwrap_err();

        assert_eq!(
            error.to_string(),
            r#"Invalid keyField config: unclosed selection on `organization` at offset 17 in "id organization {""#
        );
    }
}
