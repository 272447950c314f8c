//! Incremental grammar construction from flat candidate rows.

use rustc_hash::FxHashMap;

use super::{Candidate, Constraint, Example, Grammar};
use crate::errors::ValidationError;

/// Collects constraints and one-row-per-candidate data, then validates.
///
/// Rows are grouped into examples by input string; examples keep the order
/// in which their input was first seen, candidates keep row order.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    constraints: Vec<Constraint>,
    examples: Vec<Example>,
    by_input: FxHashMap<String, usize>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn constraints<I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.constraints.extend(constraints);
        self
    }

    /// Add one candidate for `input`.
    pub fn row<I, K>(
        mut self,
        input: impl Into<String>,
        output: impl Into<String>,
        optimal: bool,
        violations: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        self.push_row(input.into(), Candidate::new(output, optimal, violations));
        self
    }

    /// Add a whole example. Inputs seen before are merged into it.
    pub fn example(mut self, example: Example) -> Self {
        let input = example.input().to_string();
        for candidate in example.candidates() {
            self.push_row(input.clone(), candidate.clone());
        }
        self
    }

    pub(crate) fn push_row(&mut self, input: String, candidate: Candidate) {
        match self.by_input.get(&input) {
            Some(&i) => self.examples[i].push(candidate),
            None => {
                self.by_input.insert(input.clone(), self.examples.len());
                self.examples.push(Example::new(input, vec![candidate]));
            }
        }
    }

    pub(crate) fn push_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn build(self) -> Result<Grammar, ValidationError> {
        Grammar::new(self.constraints, self.examples)
    }
}
