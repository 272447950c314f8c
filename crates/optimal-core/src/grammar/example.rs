use serde::{Deserialize, Serialize};

use super::Candidate;

/// Candidates competing for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    input: String,
    candidates: Vec<Candidate>,
}

impl Example {
    pub fn new(input: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            input: input.into(),
            candidates,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub(crate) fn candidates_mut(&mut self) -> &mut [Candidate] {
        &mut self.candidates
    }

    pub(crate) fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Index of the first optimal candidate.
    pub fn winner_index(&self) -> Option<usize> {
        self.candidates.iter().position(Candidate::is_optimal)
    }

    pub fn winner(&self) -> Option<&Candidate> {
        self.winner_index().map(|i| &self.candidates[i])
    }

    /// Non-optimal candidates with their indices, in candidate order.
    pub fn competitors(&self) -> impl Iterator<Item = (usize, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_optimal())
    }
}
