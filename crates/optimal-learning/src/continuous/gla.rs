//! Gradual Learning Algorithm.
//!
//! Every constraint carries a real ranking value. For each training pair the
//! learner draws Gaussian noise per constraint, ranks by the perturbed values,
//! and on disagreement nudges winner-preferring constraints up and
//! loser-preferring constraints down by the plasticity.

use optimal_core::config::GlaConfig;
use optimal_core::errors::RankingError;
use optimal_core::{
    Algorithm, Grammar, LearningStatus, OptimalConfig, PartialOrder, TrainingReport,
};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use statrs::distribution::Normal;
use tracing::{debug, info};

use crate::comparison::{comparisons, Preference};
use crate::derivation::stratify_values;
use crate::evaluation::{explains, failing_examples};
use crate::stratification::Stratification;

/// Stochastic OT learner over real-valued rankings.
///
/// Each call to [`learn`](Self::learn) restarts from `initial_value` and
/// reseeds its generator, so repeated runs on the same data are identical.
#[derive(Debug, Clone)]
pub struct GradualLearner {
    plasticity: f64,
    noise: f64,
    epochs: usize,
    initial_value: f64,
    shuffle: bool,
    epsilon: f64,
    seed: u64,
    values: Vec<f64>,
    trajectory: Vec<Vec<f64>>,
}

impl GradualLearner {
    /// All randomness comes from a generator seeded with `seed`.
    pub fn new(config: &GlaConfig, epsilon: f64, seed: u64) -> Self {
        Self {
            plasticity: config.effective_plasticity(),
            noise: config.effective_noise(),
            epochs: config.effective_epochs(),
            initial_value: config.effective_initial_value(),
            shuffle: config.effective_shuffle(),
            epsilon,
            seed,
            values: Vec::new(),
            trajectory: Vec::new(),
        }
    }

    /// Seeded from `learner.seed`.
    pub fn from_config(config: &OptimalConfig) -> Self {
        Self::new(
            &config.gla,
            config.stratification.effective_epsilon(),
            config.learner.effective_seed(),
        )
    }

    /// Ranking values in grammar order; empty before the first run.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Ranking values after each epoch of the last run.
    pub fn trajectory(&self) -> &[Vec<f64>] {
        &self.trajectory
    }

    /// Train from scratch. The reported status is judged on the derived
    /// partial order, so values closer than `epsilon` count as tied.
    pub fn learn(&mut self, grammar: &Grammar) -> Result<TrainingReport, RankingError> {
        let pairs = comparisons(grammar);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let normal = if self.noise > 0.0 {
            Normal::new(0.0, self.noise).ok()
        } else {
            None
        };

        let mut values = vec![self.initial_value; grammar.constraint_count()];
        let mut order: Vec<usize> = (0..pairs.len()).collect();
        let mut trajectory = Vec::new();
        let mut epochs = 0;
        let mut updates = 0;

        while epochs < self.epochs {
            epochs += 1;
            if self.shuffle {
                order.shuffle(&mut rng);
            }
            let mut errors = 0;
            for &p in &order {
                let pair = &pairs[p];
                let perturbed: Vec<f64> = match &normal {
                    Some(normal) => values.iter().map(|v| v + normal.sample(&mut rng)).collect(),
                    None => values.clone(),
                };
                if explains(&Stratification::from_values(&perturbed), pair) {
                    continue;
                }
                errors += 1;
                updates += 1;
                for (c, value) in values.iter_mut().enumerate() {
                    match pair.preference(c) {
                        Preference::Winner => *value += self.plasticity,
                        Preference::Loser => *value -= self.plasticity,
                        Preference::Neutral => {}
                    }
                }
            }
            trajectory.push(values.clone());
            debug!(epoch = epochs, errors, "gla epoch");
            // Stop only once the derived ranking agrees as well.
            if errors == 0 {
                let (_, derived) = self.derive(grammar, &values)?;
                if failing_examples(&derived, &pairs).is_empty() {
                    break;
                }
            }
        }

        let (partial_order, derived) = self.derive(grammar, &values)?;
        let residual = failing_examples(&derived, &pairs).len();
        let status = if residual == 0 {
            LearningStatus::Converged
        } else {
            LearningStatus::NotConverged {
                iterations: epochs,
                residual_errors: residual,
                gradient_norm: None,
            }
        };
        info!(epochs, updates, residual, "gla finished");

        self.values = values;
        self.trajectory = trajectory;
        Ok(TrainingReport {
            algorithm: Algorithm::Gla,
            partial_order,
            status,
            iterations: epochs,
            updates,
        })
    }

    fn derive(
        &self,
        grammar: &Grammar,
        values: &[f64],
    ) -> Result<(PartialOrder, Stratification), RankingError> {
        let order = stratify_values(grammar, values, self.epsilon)?;
        let stratification = Stratification::from_partial_order(grammar, &order)?;
        Ok((order, stratification))
    }
}
