use serde_json::{Map, Value};

pub mod error;
pub mod schema;

pub use error::{ErrorKind, GenerationError, SchemaError};
pub use schema::{parse_schema, parse_schema_with_policy, NonStringTypePolicy, Schema, SchemaField};

/// Record count cap applied when no configuration overrides it
pub const DEFAULT_MAX_COUNT: usize = 1000;

/// Largest cap a configuration may set
pub const HARD_MAX_COUNT: usize = 100_000;

/// One generated object. Keys follow schema order.
pub type Record = Map<String, Value>;

/// The ordered records produced for one request
pub type Batch = Vec<Record>;

/// Semantic kind of a generated value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    /// ISO-8601 UTC timestamp string
    Timestamp,
    StringArray,
}

impl ValueKind {
    /// Whether `value` has the JSON shape of this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Integer => value.is_i64() || value.is_u64(),
            ValueKind::Float => value.is_f64() || value.is_i64() || value.is_u64(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Timestamp => value
                .as_str()
                .map(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok())
                .unwrap_or(false),
            ValueKind::StringArray => value
                .as_array()
                .map(|items| items.iter().all(Value::is_string))
                .unwrap_or(false),
        }
    }
}
