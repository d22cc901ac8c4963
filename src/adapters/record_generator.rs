use crate::adapters::type_registry::{FieldGenerator, TypeRegistry};
use crate::domain::{Record, Schema, ValueKind};
use rand::Rng;

/// A schema with every field's type name resolved once, up front.
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    fields: Vec<(String, FieldGenerator)>,
}

impl RecordGenerator {
    pub fn new(schema: &Schema) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|field| {
                let generator = match &field.type_name {
                    Some(type_name) => TypeRegistry::generator_for(type_name),
                    None => FieldGenerator::Fallback,
                };
                if generator == FieldGenerator::Fallback {
                    tracing::debug!(
                        "Field '{}' has unrecognized type {:?}, using fallback word",
                        field.name,
                        field.type_name
                    );
                }
                (field.name.clone(), generator)
            })
            .collect();

        Self { fields }
    }

    /// Build one record. Infallible: unknown types already resolved to the fallback.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Record {
        let mut record = Record::with_capacity(self.fields.len());
        for (name, generator) in &self.fields {
            record.insert(name.clone(), generator.generate(rng));
        }
        record
    }

    /// Field names with the kind of value each one produces
    pub fn field_kinds(&self) -> impl Iterator<Item = (&str, ValueKind)> {
        self.fields
            .iter()
            .map(|(name, generator)| (name.as_str(), generator.kind()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Build one record for `schema`
pub fn generate_record<R: Rng + ?Sized>(schema: &Schema, rng: &mut R) -> Record {
    RecordGenerator::new(schema).generate(rng)
}
