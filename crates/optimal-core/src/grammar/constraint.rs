use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ValidationError;

/// A named constraint. Identity is the name alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
}

impl Constraint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Checks that the name can be written in ranking notation and parsed
    /// back unchanged.
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyConstraintName);
        }
        let reserved = name.contains(constants::RESERVED_NAME_CHARS)
            || name.contains(constants::DOMINANCE_MARKER)
            || name.trim() != name;
        if reserved {
            return Err(ValidationError::InvalidConstraintName {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Constraint {}

impl Hash for Constraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
