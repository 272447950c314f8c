//! Recursive constraint demotion.

use optimal_core::errors::RankingError;
use optimal_core::{Algorithm, Grammar, LearningStatus, TrainingReport};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::comparison::comparisons;
use crate::evaluation::example_inputs;
use crate::stratification::Stratification;

/// Builds the ranking top-down. Each round places every remaining constraint
/// that prefers no loser in an unresolved pair, then drops the pairs those
/// constraints now decide for the winner. A round that places nothing means
/// the data is inconsistent: the remaining constraints form one final
/// unranked stratum.
#[derive(Debug, Clone, Default)]
pub struct RecursiveDemotion {
    stratification: Option<Stratification>,
}

impl RecursiveDemotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranking from the last run.
    pub fn stratification(&self) -> Option<&Stratification> {
        self.stratification.as_ref()
    }

    /// Always terminates, with at most one round per constraint.
    pub fn learn(&mut self, grammar: &Grammar) -> Result<TrainingReport, RankingError> {
        let pairs = comparisons(grammar);
        let count = grammar.constraint_count();
        let mut strata = vec![0; count];
        let mut placed = vec![false; count];
        let mut unresolved: Vec<usize> = (0..pairs.len()).collect();
        let mut stratum = 0;
        let mut stuck: Vec<usize> = Vec::new();

        while placed.iter().any(|p| !p) {
            let round: FxHashSet<usize> = (0..count)
                .filter(|&c| !placed[c])
                .filter(|&c| {
                    !unresolved
                        .iter()
                        .any(|&p| pairs[p].loser_preferring().any(|l| l == c))
                })
                .collect();

            if round.is_empty() {
                stuck = (0..count).filter(|&c| !placed[c]).collect();
                for &c in &stuck {
                    strata[c] = stratum;
                }
                stratum += 1;
                break;
            }

            for &c in &round {
                strata[c] = stratum;
                placed[c] = true;
            }
            unresolved.retain(|&p| !pairs[p].winner_preferring().any(|w| round.contains(&w)));
            debug!(stratum, placed = round.len(), unresolved = unresolved.len(), "stratum placed");
            stratum += 1;
        }

        let current = Stratification::from_indices(strata);
        let updates = (0..count).filter(|&c| current.stratum_of(c) > 0).count();
        let status = if unresolved.is_empty() {
            LearningStatus::Converged
        } else {
            let mut examples: Vec<usize> = unresolved.iter().map(|&p| pairs[p].example).collect();
            examples.dedup();
            let names = grammar.constraint_names();
            warn!(
                unresolved = examples.len(),
                unranked = stuck.len(),
                "recursive demotion found no consistent ranking"
            );
            LearningStatus::Inconsistent {
                unresolved_examples: example_inputs(grammar, &examples),
                unranked_constraints: stuck.iter().map(|&c| names[c].to_string()).collect(),
            }
        };

        let partial_order = current.to_partial_order(grammar)?;
        self.stratification = Some(current);
        Ok(TrainingReport {
            algorithm: Algorithm::Rcd,
            partial_order,
            status,
            iterations: stratum,
            updates,
        })
    }
}
