//! Maximum Entropy learner.
//!
//! Candidate probabilities are a softmax over harmonies within each example.
//! Weights follow projected gradient ascent on the L2-penalized
//! log-likelihood of the winners.

use optimal_core::config::MaxEntConfig;
use optimal_core::errors::RankingError;
use optimal_core::{Algorithm, Example, Grammar, LearningStatus, OptimalConfig, TrainingReport};
use tracing::{debug, info, warn};

use crate::comparison::comparisons;
use crate::derivation::stratify_values;
use crate::evaluation::{harmonic_failures, harmony};

/// Maximum Entropy weight learner.
///
/// Reports `Converged` only when the gradient vanishes and the fitted weights
/// also give every winner strictly the best harmony. A flat optimum on
/// contradictory data is reported as not converged.
#[derive(Debug, Clone)]
pub struct MaxEntLearner {
    learning_rate: f64,
    max_iterations: usize,
    tolerance: f64,
    l2_penalty: f64,
    non_negative: bool,
    epsilon: f64,
    weights: Vec<f64>,
}

impl MaxEntLearner {
    /// Learner with the given MaxEnt settings and stratification tolerance.
    pub fn new(config: &MaxEntConfig, epsilon: f64) -> Self {
        Self {
            learning_rate: config.effective_learning_rate(),
            max_iterations: config.effective_max_iterations(),
            tolerance: config.effective_tolerance(),
            l2_penalty: config.effective_l2_penalty(),
            non_negative: config.effective_non_negative(),
            epsilon,
            weights: Vec::new(),
        }
    }

    /// Learner built from the `maxent` and `stratification` config sections.
    pub fn from_config(config: &OptimalConfig) -> Self {
        Self::new(&config.maxent, config.stratification.effective_epsilon())
    }

    /// Weights in grammar order; empty before the first run.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Fit weights from zero by projected gradient ascent.
    pub fn learn(&mut self, grammar: &Grammar) -> Result<TrainingReport, RankingError> {
        let mut weights = vec![0.0; grammar.constraint_count()];
        let mut iterations = 0;
        let mut step = gradient(grammar, &weights, self.l2_penalty);
        let mut norm = self.projected_norm(&weights, &step);

        while norm >= self.tolerance && iterations < self.max_iterations {
            for (weight, g) in weights.iter_mut().zip(&step) {
                *weight += self.learning_rate * g;
                if self.non_negative && *weight < 0.0 {
                    *weight = 0.0;
                }
            }
            iterations += 1;
            step = gradient(grammar, &weights, self.l2_penalty);
            norm = self.projected_norm(&weights, &step);
            if iterations % 1000 == 0 {
                debug!(
                    iterations,
                    norm,
                    objective = objective(grammar, &weights, self.l2_penalty),
                    "maxent progress"
                );
            }
        }

        let residual = harmonic_failures(&weights, &comparisons(grammar)).len();
        let status = if norm < self.tolerance && residual == 0 {
            LearningStatus::Converged
        } else {
            if norm < self.tolerance {
                warn!(iterations, residual, "maxent optimum leaves winners unexplained");
            } else {
                warn!(iterations, norm, "maxent hit the iteration cap");
            }
            LearningStatus::NotConverged {
                iterations,
                residual_errors: residual,
                gradient_norm: Some(norm),
            }
        };
        info!(iterations, norm, "maxent finished");

        let partial_order = stratify_values(grammar, &weights, self.epsilon)?;
        self.weights = weights;
        Ok(TrainingReport {
            algorithm: Algorithm::MaxEnt,
            partial_order,
            status,
            iterations,
            updates: iterations,
        })
    }

    /// Gradient norm ignoring components pinned at the zero bound.
    fn projected_norm(&self, weights: &[f64], gradient: &[f64]) -> f64 {
        weights
            .iter()
            .zip(gradient)
            .map(|(&w, &g)| {
                if self.non_negative && w <= 0.0 && g < 0.0 {
                    0.0
                } else {
                    g * g
                }
            })
            .sum::<f64>()
            .sqrt()
    }
}

/// Softmax of candidate harmonies, in candidate order.
pub fn candidate_probabilities(example: &Example, weights: &[f64]) -> Vec<f64> {
    let harmonies: Vec<f64> = example
        .candidates()
        .iter()
        .map(|c| harmony(weights, c.profile()))
        .collect();
    let max = harmonies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp: Vec<f64> = harmonies.iter().map(|h| (h - max).exp()).collect();
    let total: f64 = exp.iter().sum();
    exp.into_iter().map(|e| e / total).collect()
}

/// Sum of winner log-probabilities minus `l2_penalty * sum(w^2)`.
pub fn objective(grammar: &Grammar, weights: &[f64], l2_penalty: f64) -> f64 {
    let likelihood: f64 = grammar
        .examples()
        .iter()
        .filter_map(|example| {
            let winner = example.winner_index()?;
            let harmonies: Vec<f64> = example
                .candidates()
                .iter()
                .map(|c| harmony(weights, c.profile()))
                .collect();
            let max = harmonies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let log_total = max + harmonies.iter().map(|h| (h - max).exp()).sum::<f64>().ln();
            Some(harmonies[winner] - log_total)
        })
        .sum();
    likelihood - l2_penalty * weights.iter().map(|w| w * w).sum::<f64>()
}

/// Partial derivatives of [`objective`]: expected violations minus winner
/// violations, summed over examples, minus `2 * l2_penalty * w`.
pub fn gradient(grammar: &Grammar, weights: &[f64], l2_penalty: f64) -> Vec<f64> {
    let mut gradient: Vec<f64> = weights.iter().map(|w| -2.0 * l2_penalty * w).collect();
    for example in grammar.examples() {
        let Some(winner) = example.winner() else {
            continue;
        };
        let probabilities = candidate_probabilities(example, weights);
        for (c, g) in gradient.iter_mut().enumerate() {
            let expected: f64 = example
                .candidates()
                .iter()
                .zip(&probabilities)
                .map(|(candidate, p)| p * f64::from(candidate.profile()[c]))
                .sum();
            *g += expected - f64::from(winner.profile()[c]);
        }
    }
    gradient
}
