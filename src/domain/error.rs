//! Error types for schema parsing and batch generation

use thiserror::Error;

/// Errors raised while turning schema text into a [`Schema`](super::schema::Schema)
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The text is not valid JSON
    #[error("Could not parse schema as JSON. Please check your JSON syntax: {0}")]
    Syntax(serde_json::Error),

    /// Valid JSON, but the top-level value is not an object
    #[error("Schema must be a JSON object mapping field names to type names, found {found}")]
    NotAnObject { found: &'static str },

    /// A field maps to something other than a type name string
    #[error("Field '{field}' must map to a type name string, found {found}")]
    NonStringType { field: String, found: &'static str },

    /// A field name is the empty string
    #[error("Field names must not be empty")]
    EmptyFieldName,
}

/// Broad category of a [`GenerationError`], for callers that branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidSchema,
    InvalidCount,
    Serialization,
}

/// Errors that abort a generation request. Nothing is returned alongside them.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The schema text was rejected by the parser
    #[error("Invalid schema: {0}")]
    InvalidSchema(SchemaError),

    /// The requested record count is outside `1..=max`
    #[error("Invalid count {count}: must be between 1 and {max}")]
    InvalidCount { count: i64, max: usize },

    /// The finished batch could not be rendered as JSON text
    #[error("Failed to serialize generated data: {0}")]
    Serialization(serde_json::Error),
}

// Wrapped errors are rendered inline in Display, never exposed as `source()`.
impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Syntax(err)
    }
}

impl From<SchemaError> for GenerationError {
    fn from(err: SchemaError) -> Self {
        GenerationError::InvalidSchema(err)
    }
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::InvalidSchema(_) => ErrorKind::InvalidSchema,
            GenerationError::InvalidCount { .. } => ErrorKind::InvalidCount,
            GenerationError::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_message_mentions_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GenerationError::from(SchemaError::from(err));
        assert_eq!(err.kind(), ErrorKind::InvalidSchema);
        assert!(err.to_string().contains("Could not parse schema as JSON"));
    }

    #[test]
    fn test_invalid_count_message() {
        let err = GenerationError::InvalidCount { count: 0, max: 1000 };
        assert_eq!(err.kind(), ErrorKind::InvalidCount);
        assert_eq!(err.to_string(), "Invalid count 0: must be between 1 and 1000");
    }

    #[test]
    fn test_parse_error_reported_once_in_chain() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\": \"name\"").unwrap_err();
        let parse_message = err.to_string();
        let err = GenerationError::from(SchemaError::from(err));
        assert!(std::error::Error::source(&err).is_none());

        let report = format!("{:?}", anyhow::Error::from(err));
        assert_eq!(report.matches(&parse_message).count(), 1, "{report}");
        assert!(!report.contains("Caused by"));
    }

    #[test]
    fn test_not_an_object_message_differs_from_syntax() {
        let err = SchemaError::NotAnObject { found: "array" };
        let text = err.to_string();
        assert!(text.contains("found array"));
        assert!(!text.contains("Could not parse"));
    }
}
