use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One output candidate for an example's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    output: String,
    optimal: bool,
    violations: BTreeMap<String, u32>,
    /// Dense violation counts in grammar constraint order. Empty until the
    /// owning grammar is validated.
    #[serde(skip)]
    profile: Vec<u32>,
}

impl Candidate {
    pub fn new<I, K>(output: impl Into<String>, optimal: bool, violations: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        Self {
            output: output.into(),
            optimal,
            violations: violations.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            profile: Vec::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    /// Violation count as given, `None` if the constraint was not reported.
    pub fn violation(&self, constraint: &str) -> Option<u32> {
        self.violations.get(constraint).copied()
    }

    pub fn violations(&self) -> &BTreeMap<String, u32> {
        &self.violations
    }

    pub fn profile(&self) -> &[u32] {
        &self.profile
    }

    pub(crate) fn set_profile(&mut self, profile: Vec<u32>) {
        self.profile = profile;
    }
}
