//! Harmonic Grammar perceptron.

use optimal_core::config::HgConfig;
use optimal_core::errors::RankingError;
use optimal_core::{Algorithm, Grammar, LearningStatus, OptimalConfig, TrainingReport};
use tracing::{debug, info};

use crate::comparison::comparisons;
use crate::derivation::stratify_values;
use crate::evaluation::{harmonic_failures, harmonically_explains};

/// Weights start at zero. Whenever a competitor's harmony is at least the
/// winner's, each weight moves by the learning rate times the violation
/// difference (competitor minus winner) and is clipped at zero.
#[derive(Debug, Clone)]
pub struct HarmonicLearner {
    learning_rate: f64,
    max_epochs: usize,
    epsilon: f64,
    weights: Vec<f64>,
}

impl HarmonicLearner {
    pub fn new(config: &HgConfig, epsilon: f64) -> Self {
        Self {
            learning_rate: config.effective_learning_rate(),
            max_epochs: config.effective_max_epochs(),
            epsilon,
            weights: Vec::new(),
        }
    }

    /// Learner built from the `hg` and `stratification` config sections.
    pub fn from_config(config: &OptimalConfig) -> Self {
        Self::new(&config.hg, config.stratification.effective_epsilon())
    }

    /// Weights in grammar order; empty before the first run.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Run perceptron epochs until one makes no update or the cap is hit.
    pub fn learn(&mut self, grammar: &Grammar) -> Result<TrainingReport, RankingError> {
        let pairs = comparisons(grammar);
        let mut weights = vec![0.0; grammar.constraint_count()];
        let mut epochs = 0;
        let mut updates = 0;
        let mut clean = false;

        while epochs < self.max_epochs {
            epochs += 1;
            let mut errors = 0;
            for pair in &pairs {
                if harmonically_explains(&weights, pair) {
                    continue;
                }
                errors += 1;
                updates += 1;
                for (c, weight) in weights.iter_mut().enumerate() {
                    *weight = (*weight + self.learning_rate * pair.difference(c)).max(0.0);
                }
            }
            debug!(epoch = epochs, errors, "hg epoch");
            if errors == 0 {
                clean = true;
                break;
            }
        }

        let status = if clean {
            LearningStatus::Converged
        } else {
            LearningStatus::NotConverged {
                iterations: epochs,
                residual_errors: harmonic_failures(&weights, &pairs).len(),
                gradient_norm: None,
            }
        };
        info!(epochs, updates, converged = clean, "hg finished");

        let partial_order = stratify_values(grammar, &weights, self.epsilon)?;
        self.weights = weights;
        Ok(TrainingReport {
            algorithm: Algorithm::Hg,
            partial_order,
            status,
            iterations: epochs,
            updates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optimal_core::{Constraint, GrammarBuilder};

    #[test]
    fn weights_never_go_negative() {
        let grammar = GrammarBuilder::new()
            .constraints([Constraint::new("A"), Constraint::new("B")])
            .row("/x/", "x", true, [("A", 0), ("B", 3)])
            .row("/x/", "y", false, [("A", 1), ("B", 0)])
            .build()
            .unwrap();
        let mut learner = HarmonicLearner::new(&HgConfig::default(), 0.01);
        let report = learner.learn(&grammar).unwrap();
        assert!(report.is_converged());
        assert!(learner.weights().iter().all(|w| *w >= 0.0));
        assert_eq!(learner.weights()[1], 0.0);
    }
}
