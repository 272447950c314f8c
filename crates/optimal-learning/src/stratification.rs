//! Index-based stratification snapshots.
//!
//! Learners never edit a stratification in place: every demotion builds a
//! new snapshot and the learner replaces its current one wholesale.

use optimal_core::errors::RankingError;
use optimal_core::{Grammar, PartialOrder};
use serde::{Deserialize, Serialize};

/// Stratum index per constraint (grammar order). Strata are numbered
/// `0..stratum_count()` with no gaps; 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stratification {
    strata: Vec<usize>,
}

impl Stratification {
    /// Everything in the top stratum.
    pub fn unranked(constraints: usize) -> Self {
        Self {
            strata: vec![0; constraints],
        }
    }

    /// Build from explicit stratum indices, closing any gaps.
    pub fn from_indices(strata: Vec<usize>) -> Self {
        Self { strata }.normalized()
    }

    /// Rank by value, highest first. Only exactly equal values share a stratum.
    pub fn from_values(values: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

        let mut strata = vec![0; values.len()];
        let mut current = 0;
        for (rank, pair) in order.windows(2).enumerate() {
            if values[pair[1]] != values[pair[0]] {
                current = rank + 1;
            }
            strata[pair[1]] = current;
        }
        Self::from_indices(strata)
    }

    /// Stratum index of `constraint`, 0 at the top.
    pub fn stratum_of(&self, constraint: usize) -> usize {
        self.strata[constraint]
    }

    /// Number of non-empty strata.
    pub fn stratum_count(&self) -> usize {
        self.strata.iter().max().map_or(0, |m| m + 1)
    }

    /// Number of constraints covered.
    pub fn constraint_count(&self) -> usize {
        self.strata.len()
    }

    /// New snapshot with each of `constraints` moved down to `target` (never up).
    /// A target past the bottom opens a new bottom stratum.
    pub fn with_demoted(&self, constraints: &[usize], target: usize) -> Self {
        let mut strata = self.strata.clone();
        for &c in constraints {
            strata[c] = strata[c].max(target);
        }
        Self { strata }.normalized()
    }

    /// Constraint indices grouped by stratum, top first.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.stratum_count()];
        for (c, &s) in self.strata.iter().enumerate() {
            groups[s].push(c);
        }
        groups
    }

    /// Index form of `order`, which must cover exactly the grammar's constraints.
    pub fn from_partial_order(
        grammar: &Grammar,
        order: &PartialOrder,
    ) -> Result<Self, RankingError> {
        order.ensure_covers(grammar.constraint_names())?;
        let strata = grammar
            .constraint_names()
            .into_iter()
            .map(|name| order.stratum_of(name).unwrap_or_default())
            .collect();
        Ok(Self::from_indices(strata))
    }

    /// Named form, using the grammar's constraint names.
    pub fn to_partial_order(&self, grammar: &Grammar) -> Result<PartialOrder, RankingError> {
        let names = grammar.constraint_names();
        PartialOrder::stratify(
            self.groups()
                .into_iter()
                .map(|group| group.into_iter().map(|c| names[c]).collect::<Vec<_>>()),
        )
    }

    fn normalized(self) -> Self {
        let mut used: Vec<usize> = self.strata.clone();
        used.sort_unstable();
        used.dedup();
        let strata = self
            .strata
            .iter()
            .map(|s| used.partition_point(|u| u < s))
            .collect();
        Self { strata }
    }
}
