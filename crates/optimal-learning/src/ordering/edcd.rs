//! Error-driven constraint demotion.

use optimal_core::config::OrderingConfig;
use optimal_core::errors::RankingError;
use optimal_core::{Algorithm, Grammar, LearningStatus, TrainingReport};
use tracing::{debug, warn};

use crate::comparison::comparisons;
use crate::evaluation::{explains, failing_examples};
use crate::stratification::Stratification;

/// Online demotion over examples in data order.
///
/// On an error, the loser-preferring constraints at or above the top
/// winner-preferring constraint move to the stratum just below it. Learning
/// stops after an epoch with no errors or at the epoch cap.
#[derive(Debug, Clone)]
pub struct ErrorDrivenDemotion {
    max_epochs: usize,
    stratification: Option<Stratification>,
}

impl ErrorDrivenDemotion {
    pub fn new(max_epochs: usize) -> Self {
        Self {
            max_epochs,
            stratification: None,
        }
    }

    /// Cap from `ordering.max_epochs`.
    pub fn from_config(config: &OrderingConfig) -> Self {
        Self::new(config.effective_max_epochs())
    }

    /// Ranking from the last run.
    pub fn stratification(&self) -> Option<&Stratification> {
        self.stratification.as_ref()
    }

    /// Train from an unranked start.
    pub fn learn(&mut self, grammar: &Grammar) -> Result<TrainingReport, RankingError> {
        let pairs = comparisons(grammar);
        let mut current = Stratification::unranked(grammar.constraint_count());
        let mut epochs = 0;
        let mut updates = 0;
        let mut clean = false;

        while epochs < self.max_epochs {
            epochs += 1;
            let mut errors = 0;
            let mut last_error: Option<usize> = None;
            for pair in &pairs {
                if explains(&current, pair) {
                    continue;
                }
                if last_error != Some(pair.example) {
                    errors += 1;
                    last_error = Some(pair.example);
                }
                let Some(top_winner) = pair.winner_preferring().map(|c| current.stratum_of(c)).min()
                else {
                    continue;
                };
                let offending: Vec<usize> = pair
                    .loser_preferring()
                    .filter(|&c| current.stratum_of(c) <= top_winner)
                    .collect();
                if !offending.is_empty() {
                    updates += offending.len();
                    current = current.with_demoted(&offending, top_winner + 1);
                }
            }
            debug!(epoch = epochs, errors, strata = current.stratum_count(), "edcd epoch");
            if errors == 0 {
                clean = true;
                break;
            }
        }

        let status = if clean {
            LearningStatus::Converged
        } else {
            let residual = failing_examples(&current, &pairs).len();
            warn!(epochs, residual, "edcd hit the epoch cap");
            LearningStatus::NotConverged {
                iterations: epochs,
                residual_errors: residual,
                gradient_norm: None,
            }
        };

        let partial_order = current.to_partial_order(grammar)?;
        self.stratification = Some(current);
        Ok(TrainingReport {
            algorithm: Algorithm::Edcd,
            partial_order,
            status,
            iterations: epochs,
            updates,
        })
    }
}
