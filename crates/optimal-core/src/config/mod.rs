//! Configuration system for Optimal.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod gla_config;
pub mod hg_config;
pub mod learner_config;
pub mod maxent_config;
pub mod optimal_config;
pub mod ordering_config;
pub mod stratification_config;

pub use gla_config::GlaConfig;
pub use hg_config::HgConfig;
pub use learner_config::LearnerConfig;
pub use maxent_config::MaxEntConfig;
pub use optimal_config::OptimalConfig;
pub use ordering_config::OrderingConfig;
pub use stratification_config::StratificationConfig;
