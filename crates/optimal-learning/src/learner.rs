//! The single learner facade over every algorithm.

use std::collections::BTreeMap;

use optimal_core::errors::{ConfigError, RankingError};
use optimal_core::models::AlgorithmFamily;
use optimal_core::{Algorithm, Grammar, OptimalConfig, PartialOrder, TrainingReport};
use tracing::info;

use crate::continuous::{GradualLearner, HarmonicLearner, MaxEntLearner};
use crate::ordering::{BasicDemotion, ErrorDrivenDemotion, RecursiveDemotion};

/// Per-algorithm state. Adding an algorithm adds a variant here.
#[derive(Debug, Clone)]
enum Model {
    Basic(BasicDemotion),
    Rcd(RecursiveDemotion),
    Edcd(ErrorDrivenDemotion),
    Gla(GradualLearner),
    Hg(HarmonicLearner),
    MaxEnt(MaxEntLearner),
}

impl Model {
    fn new(algorithm: Algorithm, config: &OptimalConfig) -> Self {
        match algorithm {
            Algorithm::Basic => Self::Basic(BasicDemotion::from_config(&config.ordering)),
            Algorithm::Rcd => Self::Rcd(RecursiveDemotion::new()),
            Algorithm::Edcd => Self::Edcd(ErrorDrivenDemotion::from_config(&config.ordering)),
            Algorithm::Gla => Self::Gla(GradualLearner::from_config(config)),
            Algorithm::Hg => Self::Hg(HarmonicLearner::from_config(config)),
            Algorithm::MaxEnt => Self::MaxEnt(MaxEntLearner::from_config(config)),
        }
    }

    fn learn(&mut self, grammar: &Grammar) -> Result<TrainingReport, RankingError> {
        match self {
            Self::Basic(m) => m.learn(grammar),
            Self::Rcd(m) => m.learn(grammar),
            Self::Edcd(m) => m.learn(grammar),
            Self::Gla(m) => m.learn(grammar),
            Self::Hg(m) => m.learn(grammar),
            Self::MaxEnt(m) => m.learn(grammar),
        }
    }
}

/// Owns a grammar and one algorithm's learned state.
///
/// ```no_run
/// # use optimal_core::{Grammar, OptimalConfig};
/// # use optimal_learning::Learner;
/// # fn run(grammar: Grammar) -> Result<(), Box<dyn std::error::Error>> {
/// let mut learner = Learner::from_token(grammar, "rcd", &OptimalConfig::default())?;
/// let report = learner.train()?;
/// println!("{}", report.partial_order);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Learner {
    grammar: Grammar,
    algorithm: Algorithm,
    model: Model,
    report: Option<TrainingReport>,
}

impl Learner {
    /// Validates `config` before anything is trained.
    pub fn new(
        grammar: Grammar,
        algorithm: Algorithm,
        config: &OptimalConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            model: Model::new(algorithm, config),
            grammar,
            algorithm,
            report: None,
        })
    }

    /// Select the algorithm by token (`basic`, `rcd`, `edcd`, `gla`, `maxent`, `hg`).
    pub fn from_token(
        grammar: Grammar,
        token: &str,
        config: &OptimalConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(grammar, token.parse()?, config)
    }

    /// Use the algorithm named in `learner.algorithm`.
    pub fn from_config(grammar: Grammar, config: &OptimalConfig) -> Result<Self, ConfigError> {
        Self::new(grammar, config.algorithm()?, config)
    }

    /// Run the algorithm over the grammar. Inconsistency and non-convergence
    /// are reported in the status; the order is always usable.
    pub fn train(&mut self) -> Result<TrainingReport, RankingError> {
        info!(
            algorithm = %self.algorithm,
            constraints = self.grammar.constraint_count(),
            examples = self.grammar.examples().len(),
            "training started"
        );
        let report = self.model.learn(&self.grammar)?;
        report.partial_order.ensure_covers(self.grammar.constraint_names())?;
        info!(
            algorithm = %self.algorithm,
            order = %report.partial_order,
            status = ?report.status,
            iterations = report.iterations,
            "training finished"
        );
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Alias for [`Learner::train`].
    pub fn learn(&mut self) -> Result<TrainingReport, RankingError> {
        self.train()
    }

    /// Training data.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Report of the last `train()`, if any.
    pub fn last_report(&self) -> Option<&TrainingReport> {
        self.report.as_ref()
    }

    /// Learned order; `None` before training.
    pub fn partial_order(&self) -> Option<&PartialOrder> {
        self.report.as_ref().map(|r| &r.partial_order)
    }

    /// GLA ranking values by constraint name. `None` for other algorithms or
    /// before training.
    pub fn get_ranking_values(&self) -> Option<BTreeMap<String, f64>> {
        match &self.model {
            Model::Gla(m) => self.by_name(m.values()),
            _ => None,
        }
    }

    /// HG or MaxEnt weights by constraint name. `None` for other algorithms or
    /// before training.
    pub fn get_weights(&self) -> Option<BTreeMap<String, f64>> {
        match &self.model {
            Model::Hg(m) => self.by_name(m.weights()),
            Model::MaxEnt(m) => self.by_name(m.weights()),
            _ => None,
        }
    }

    /// GLA ranking values after each epoch of the last run.
    pub fn trajectory(&self) -> Option<&[Vec<f64>]> {
        match &self.model {
            Model::Gla(m) if self.report.is_some() => Some(m.trajectory()),
            _ => None,
        }
    }

    /// Learned order in `{A, B} >> C` notation; `None` before training.
    pub fn render(&self) -> Option<String> {
        self.partial_order().map(ToString::to_string)
    }

    /// Which numeric state, if any, the algorithm exposes.
    pub fn family(&self) -> AlgorithmFamily {
        self.algorithm.family()
    }

    fn by_name(&self, values: &[f64]) -> Option<BTreeMap<String, f64>> {
        if values.is_empty() && self.grammar.constraint_count() > 0 {
            return None;
        }
        Some(
            self.grammar
                .constraint_names()
                .into_iter()
                .map(str::to_string)
                .zip(values.iter().copied())
                .collect(),
        )
    }
}
