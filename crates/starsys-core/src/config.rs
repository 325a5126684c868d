//! Generator configuration.
//!
//! The defaults reproduce the standard game balance: three-syllable names,
//! one to three stars and up to eight planets. Configs can be loaded from
//! JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Largest star count that still has a system label (trinary).
pub const STAR_COUNT_LIMIT: usize = 3;

/// Planet suffixes run from 'b' to 'z'.
pub const PLANET_COUNT_LIMIT: usize = 25;

/// Bounds and sizes used by [`SystemGenerator`](crate::generation::SystemGenerator).
/// All ranges are inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Syllables in the system name
    pub name_syllables: usize,
    pub min_stars: usize,
    pub max_stars: usize,
    pub min_planets: usize,
    pub max_planets: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name_syllables: 3,
            min_stars: 1,
            max_stars: 3,
            min_planets: 0,
            max_planets: 8,
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, GenerationError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.name_syllables < 1 {
            return Err(invalid("name_syllables", "must be at least 1"));
        }
        if self.min_stars < 1 {
            return Err(invalid("min_stars", "must be at least 1"));
        }
        if self.max_stars > STAR_COUNT_LIMIT {
            return Err(invalid(
                "max_stars",
                format!("must be at most {}", STAR_COUNT_LIMIT),
            ));
        }
        if self.min_stars > self.max_stars {
            return Err(invalid("min_stars", "must not exceed max_stars"));
        }
        if self.max_planets > PLANET_COUNT_LIMIT {
            return Err(invalid(
                "max_planets",
                format!("must be at most {}", PLANET_COUNT_LIMIT),
            ));
        }
        if self.min_planets > self.max_planets {
            return Err(invalid("min_planets", "must not exceed max_planets"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> GenerationError {
    GenerationError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
