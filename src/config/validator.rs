use thiserror::Error;

use crate::config::{GeneratorSettings, Settings};
use crate::domain::HARD_MAX_COUNT;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Output path must not be empty")]
    EmptyOutputPath,
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_generator(&settings.generator) {
            errors.extend(e);
        }

        if let Some(path) = &settings.output.path {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::EmptyOutputPath);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_generator(generator: &GeneratorSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if generator.max_count == 0 || generator.max_count > HARD_MAX_COUNT {
            errors.push(ValidationError::InvalidValue {
                field: "generator.max_count".to_string(),
                reason: format!("must be between 1 and {}", HARD_MAX_COUNT),
            });
        }

        if generator.default_count == 0 || generator.default_count > generator.max_count {
            errors.push(ValidationError::InvalidValue {
                field: "generator.default_count".to_string(),
                reason: format!(
                    "must be between 1 and generator.max_count ({})",
                    generator.max_count
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
