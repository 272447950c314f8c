//! Shared constants for the Optimal learner.

/// Optimal version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default algorithm token.
pub const DEFAULT_ALGORITHM: &str = "rcd";

/// Default seed for the GLA random source.
pub const DEFAULT_SEED: u64 = 0;

// ---- Ordering algorithms ----

/// Default pass cap for basic constraint demotion.
pub const DEFAULT_MAX_PASSES: usize = 100;

/// Default epoch cap for error-driven constraint demotion.
pub const DEFAULT_EDCD_MAX_EPOCHS: usize = 100;

// ---- Gradual Learning Algorithm ----

pub const DEFAULT_PLASTICITY: f64 = 1.0;
pub const DEFAULT_NOISE: f64 = 2.0;
pub const DEFAULT_GLA_EPOCHS: usize = 1000;
pub const DEFAULT_INITIAL_RANKING_VALUE: f64 = 100.0;
pub const DEFAULT_GLA_SHUFFLE: bool = false;

// ---- Harmonic Grammar ----

pub const DEFAULT_HG_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_HG_MAX_EPOCHS: usize = 1000;

// ---- Maximum Entropy ----

pub const DEFAULT_MAXENT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_MAXENT_MAX_ITERATIONS: usize = 10_000;
pub const DEFAULT_MAXENT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_L2_PENALTY: f64 = 0.01;
pub const DEFAULT_NON_NEGATIVE: bool = true;

// ---- Derivation ----

/// Adjacent sorted values closer than this share a stratum.
pub const DEFAULT_EPSILON: f64 = 0.01;

// ---- Notation ----

/// Dominance marker between strata.
pub const DOMINANCE_MARKER: &str = ">>";

/// Characters a constraint name may not contain, so rankings round-trip.
pub const RESERVED_NAME_CHARS: [char; 3] = [',', '{', '}'];

/// Project configuration file name.
pub const CONFIG_FILENAME: &str = "optimal.toml";
