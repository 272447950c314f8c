//! Serialized grammar form (YAML / JSON).
//!
//! ```yaml
//! constraints:
//!   - name: NOCODA
//!     description: Syllables must not have codas
//! examples:
//!   - input: /pat/
//!     output: pa.ta
//!     optimal: true
//!     violations: { NOCODA: 0, DEP: 1 }
//! ```
//!
//! One row per candidate; rows sharing an input form one example. Every row
//! must list every constraint: an absent entry is a validation error, not a
//! zero.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Constraint, Grammar, GrammarBuilder};
use crate::errors::LoadError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarFile {
    #[serde(default)]
    pub constraints: Vec<ConstraintEntry>,
    #[serde(default)]
    pub examples: Vec<CandidateRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRow {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub optimal: bool,
    #[serde(default)]
    pub violations: BTreeMap<String, u32>,
}

impl GrammarFile {
    /// Validate into a grammar.
    pub fn into_grammar(self) -> Result<Grammar, LoadError> {
        let mut builder = GrammarBuilder::new();
        for entry in self.constraints {
            builder.push_constraint(Constraint::with_description(entry.name, entry.description));
        }
        for row in self.examples {
            builder.push_row(
                row.input,
                super::Candidate::new(row.output, row.optimal, row.violations),
            );
        }
        Ok(builder.build()?)
    }
}

impl From<&Grammar> for GrammarFile {
    fn from(grammar: &Grammar) -> Self {
        let constraints = grammar
            .constraints()
            .iter()
            .map(|c| ConstraintEntry {
                name: c.name().to_string(),
                description: c.description().to_string(),
            })
            .collect();
        let examples = grammar
            .examples()
            .iter()
            .flat_map(|example| {
                example.candidates().iter().map(move |candidate| CandidateRow {
                    input: example.input().to_string(),
                    output: candidate.output().to_string(),
                    optimal: candidate.is_optimal(),
                    violations: candidate.violations().clone(),
                })
            })
            .collect();
        Self {
            constraints,
            examples,
        }
    }
}

impl Grammar {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LoadError> {
        let file: GrammarFile = serde_yaml::from_str(yaml)?;
        file.into_grammar()
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let file: GrammarFile = serde_json::from_str(json)?;
        file.into_grammar()
    }

    /// Load a grammar file, choosing the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let content = || {
            std::fs::read_to_string(path).map_err(|e| LoadError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        };
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content()?),
            Some("json") => Self::from_json_str(&content()?),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    pub fn to_yaml_string(&self) -> Result<String, LoadError> {
        Ok(serde_yaml::to_string(&GrammarFile::from(self))?)
    }

    pub fn to_json_string(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(&GrammarFile::from(self))?)
    }
}
