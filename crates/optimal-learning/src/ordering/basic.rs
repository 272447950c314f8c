//! Basic constraint demotion.

use optimal_core::config::OrderingConfig;
use optimal_core::errors::RankingError;
use optimal_core::{Algorithm, Grammar, LearningStatus, TrainingReport};
use tracing::{debug, warn};

use crate::comparison::{comparisons, ComparisonPair};
use crate::evaluation::{example_inputs, explains, failing_examples};
use crate::stratification::Stratification;

/// Starts fully unranked and, for every unexplained pair, sends the
/// loser-preferring constraints that are not already below the top
/// winner-preferring constraint to the bottom. A new bottom stratum is
/// opened when that constraint is itself at the bottom.
#[derive(Debug, Clone)]
pub struct BasicDemotion {
    max_passes: usize,
    stratification: Option<Stratification>,
}

impl BasicDemotion {
    pub fn new(max_passes: usize) -> Self {
        Self {
            max_passes,
            stratification: None,
        }
    }

    /// Cap from `ordering.max_passes`.
    pub fn from_config(config: &OrderingConfig) -> Self {
        Self::new(config.effective_max_passes())
    }

    /// Ranking from the last run.
    pub fn stratification(&self) -> Option<&Stratification> {
        self.stratification.as_ref()
    }

    /// Demote until a full pass over the pairs makes no change. Hitting the
    /// pass cap reports the data as inconsistent.
    pub fn learn(&mut self, grammar: &Grammar) -> Result<TrainingReport, RankingError> {
        let pairs = comparisons(grammar);
        let mut current = Stratification::unranked(grammar.constraint_count());
        let mut passes = 0;
        let mut updates = 0;

        while passes < self.max_passes {
            passes += 1;
            let mut demoted = 0;
            for pair in &pairs {
                if let Some(next) = demote(&current, pair) {
                    demoted += 1;
                    current = next;
                }
            }
            debug!(pass = passes, demoted, strata = current.stratum_count(), "demotion pass");
            updates += demoted;
            if demoted == 0 {
                break;
            }
        }

        let unresolved = failing_examples(&current, &pairs);
        let status = if unresolved.is_empty() {
            LearningStatus::Converged
        } else {
            let names = grammar.constraint_names();
            let mut stuck: Vec<String> = pairs
                .iter()
                .filter(|p| !explains(&current, p))
                .flat_map(|p| p.loser_preferring().collect::<Vec<_>>())
                .map(|c| names[c].to_string())
                .collect();
            stuck.sort();
            stuck.dedup();
            warn!(passes, unresolved = unresolved.len(), "basic demotion did not explain the data");
            LearningStatus::Inconsistent {
                unresolved_examples: example_inputs(grammar, &unresolved),
                unranked_constraints: stuck,
            }
        };

        let partial_order = current.to_partial_order(grammar)?;
        self.stratification = Some(current);
        Ok(TrainingReport {
            algorithm: Algorithm::Basic,
            partial_order,
            status,
            iterations: passes,
            updates,
        })
    }
}

/// The demoted snapshot, or `None` when the pair is explained or cannot be
/// fixed by demotion.
fn demote(current: &Stratification, pair: &ComparisonPair) -> Option<Stratification> {
    if explains(current, pair) {
        return None;
    }
    let top_winner = pair.winner_preferring().map(|c| current.stratum_of(c)).min()?;
    let offending: Vec<usize> = pair
        .loser_preferring()
        .filter(|&c| current.stratum_of(c) <= top_winner)
        .collect();
    if offending.is_empty() {
        return None;
    }
    let bottom = current.stratum_count().saturating_sub(1);
    let target = if top_winner < bottom { bottom } else { bottom + 1 };
    Some(current.with_demoted(&offending, target))
}
