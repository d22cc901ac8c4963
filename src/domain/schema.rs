//! Schema parsing: JSON object text into an ordered list of typed fields

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SchemaError;

/// How a field whose type value is not a JSON string is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NonStringTypePolicy {
    /// Fail the parse with [`SchemaError::NonStringType`]
    #[default]
    Reject,
    /// Keep the field; it resolves to the fallback generator
    Fallback,
}

/// One `"field": "type"` entry of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    /// `None` when the schema held a non-string value accepted under
    /// [`NonStringTypePolicy::Fallback`]
    pub type_name: Option<String>,
}

/// Parsed schema. Field order is the key order of the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Parse schema text, rejecting non-string type values.
pub fn parse_schema(text: &str) -> Result<Schema, SchemaError> {
    parse_schema_with_policy(text, NonStringTypePolicy::Reject)
}

/// Parse schema text. Type names are not checked here: unknown names are
/// resolved leniently at generation time.
pub fn parse_schema_with_policy(
    text: &str,
    policy: NonStringTypePolicy,
) -> Result<Schema, SchemaError> {
    let value: Value = serde_json::from_str(text)?;

    let object = match value {
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::NotAnObject {
                found: json_kind(&other),
            })
        }
    };

    let mut fields = Vec::with_capacity(object.len());
    for (name, type_value) in object {
        if name.is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }

        let type_name = match type_value {
            Value::String(s) => Some(s),
            other => match policy {
                NonStringTypePolicy::Reject => {
                    return Err(SchemaError::NonStringType {
                        field: name,
                        found: json_kind(&other),
                    })
                }
                NonStringTypePolicy::Fallback => {
                    tracing::warn!(
                        "Field '{}' has a non-string type value ({}), using fallback generator",
                        name,
                        json_kind(&other)
                    );
                    None
                }
            },
        };

        fields.push(SchemaField { name, type_name });
    }

    Ok(Schema { fields })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_key_order() {
        let schema = parse_schema(r#"{"zeta": "name", "alpha": "email", "mid": "uuid"}"#).unwrap();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(schema.fields()[1].type_name.as_deref(), Some("email"));
    }

    #[test]
    fn test_parse_keeps_unknown_type_names() {
        let schema = parse_schema(r#"{"x": "definitelyNotAType"}"#).unwrap();
        assert_eq!(schema.fields()[0].type_name.as_deref(), Some("definitelyNotAType"));
    }

    #[test]
    fn test_parse_empty_object() {
        let schema = parse_schema("{}").unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_parse_duplicate_key_keeps_first_position_last_value() {
        let schema = parse_schema(r#"{"a": "name", "b": "email", "a": "uuid"}"#).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[0].name, "a");
        assert_eq!(schema.fields()[0].type_name.as_deref(), Some("uuid"));
    }

    #[test]
    fn test_parse_malformed_json() {
        for text in [
            r#"{"name": "name", "email": "email""#,
            r#"{"name": "name" "email": "email"}"#,
            r#"{"name": "name",}"#,
            "",
        ] {
            let err = parse_schema(text).unwrap_err();
            assert!(matches!(err, SchemaError::Syntax(_)), "text: {text:?}");
        }
    }

    #[test]
    fn test_parse_non_object_top_level() {
        let err = parse_schema(r#""hello""#).unwrap_err();
        assert!(matches!(err, SchemaError::NotAnObject { found: "string" }));

        let err = parse_schema("[1,2]").unwrap_err();
        assert!(matches!(err, SchemaError::NotAnObject { found: "array" }));

        let err = parse_schema("null").unwrap_err();
        assert!(matches!(err, SchemaError::NotAnObject { found: "null" }));
    }

    #[test]
    fn test_non_string_type_rejected_by_default() {
        let err = parse_schema(r#"{"x": 123}"#).unwrap_err();
        match err {
            SchemaError::NonStringType { field, found } => {
                assert_eq!(field, "x");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_type_fallback_policy() {
        let schema =
            parse_schema_with_policy(r#"{"x": 123, "y": "email"}"#, NonStringTypePolicy::Fallback)
                .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[0].type_name, None);
        assert_eq!(schema.fields()[1].type_name.as_deref(), Some("email"));
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let err = parse_schema(r#"{"": "name"}"#).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyFieldName));
    }
}
