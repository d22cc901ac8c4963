//! # jsonmock - synthetic JSON data from a field-to-type schema
//!
//! Give jsonmock a flat JSON object mapping field names to type names and a
//! record count; it returns a pretty-printed JSON array of that many records.
//!
//! ```rust,no_run
//! let output = jsonmock::generate_mock_data(r#"{"id": "uuid", "email": "email"}"#, 3)?;
//! println!("{}", output);
//! # Ok::<(), jsonmock::GenerationError>(())
//! ```
//!
//! ## Behaviour
//!
//! - Type names are case-insensitive (`"Email"`, `"EMAIL"` and `"email"` are the same).
//! - Unknown type names never fail; they produce a random lowercase word.
//! - Counts must lie in `1..=1000` unless a configured cap says otherwise.
//! - Malformed schema text fails the whole request; no partial output.
//!
//! ## Architecture
//!
//! - **Domain**: schema parsing, records, error types
//! - **Adapters**: type registry, record and batch generators, type catalog
//! - **Config**: layered settings and validation
//! - **Cli**: command-line surface of the `jsonmock` binary

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

pub use adapters::batch_generator::MockDataGenerator;
pub use adapters::catalog::{all_data_types, search_data_types, DataTypeCategory, DataTypeInfo};
pub use adapters::record_generator::{generate_record, RecordGenerator};
pub use adapters::type_registry::{DataType, FieldGenerator, TypeRegistry};
pub use domain::{
    parse_schema, ErrorKind, GenerationError, Record, Schema, SchemaError, ValueKind,
};

/// Generate `count` records for `schema_text` with an entropy-seeded
/// generator and the default limits.
pub fn generate_mock_data(schema_text: &str, count: i64) -> Result<String, GenerationError> {
    MockDataGenerator::new().generate(schema_text, count)
}
