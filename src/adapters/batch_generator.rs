use crate::adapters::record_generator::RecordGenerator;
use crate::domain::{
    parse_schema_with_policy, Batch, GenerationError, NonStringTypePolicy, Schema,
    DEFAULT_MAX_COUNT,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Instant;

/// Check `count` against `1..=max_count`
pub fn validate_count(count: i64, max_count: usize) -> Result<usize, GenerationError> {
    match usize::try_from(count) {
        Ok(n) if n >= 1 && n <= max_count => Ok(n),
        _ => Err(GenerationError::InvalidCount {
            count,
            max: max_count,
        }),
    }
}

/// Batch generator owning its random source.
///
/// The same seed, schema and count give the same output, apart from the
/// date families which are anchored to the clock at call time.
pub struct MockDataGenerator<R: RngCore = StdRng> {
    rng: R,
    max_count: usize,
    non_string_types: NonStringTypePolicy,
}

impl MockDataGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MockDataGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> MockDataGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            max_count: DEFAULT_MAX_COUNT,
            non_string_types: NonStringTypePolicy::default(),
        }
    }

    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn non_string_types(mut self, policy: NonStringTypePolicy) -> Self {
        self.non_string_types = policy;
        self
    }

    /// Parse `schema_text`, build `count` records and render them as
    /// 2-space indented JSON. On error nothing is produced.
    pub fn generate(&mut self, schema_text: &str, count: i64) -> Result<String, GenerationError> {
        let batch = self.generate_batch(schema_text, count)?;
        serde_json::to_string_pretty(&batch).map_err(GenerationError::Serialization)
    }

    /// Like [`generate`](Self::generate) but returns the records unserialized.
    pub fn generate_batch(&mut self, schema_text: &str, count: i64) -> Result<Batch, GenerationError> {
        let schema = parse_schema_with_policy(schema_text, self.non_string_types)?;
        let count = validate_count(count, self.max_count)?;
        Ok(self.generate_from_schema(&schema, count))
    }

    /// Build `count` independent records for an already parsed schema.
    pub fn generate_from_schema(&mut self, schema: &Schema, count: usize) -> Batch {
        let start = Instant::now();
        let record_generator = RecordGenerator::new(schema);

        let batch: Batch = (0..count)
            .map(|_| record_generator.generate(&mut self.rng))
            .collect();

        tracing::debug!(
            "Generated {} records with {} fields in {:?}",
            batch.len(),
            record_generator.len(),
            start.elapsed()
        );
        batch
    }
}
