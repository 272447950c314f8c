use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The closed set of learning algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Basic constraint demotion.
    Basic,
    /// Recursive constraint demotion.
    Rcd,
    /// Error-driven constraint demotion.
    Edcd,
    /// Gradual Learning Algorithm.
    Gla,
    /// Maximum Entropy gradient ascent.
    MaxEnt,
    /// Harmonic Grammar perceptron.
    Hg,
}

/// What kind of numeric state an algorithm keeps, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmFamily {
    /// Produces a partial order directly.
    Ordering,
    /// Produces ranking values (GLA).
    RankingValues,
    /// Produces constraint weights (HG, MaxEnt).
    Weights,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Self::Basic,
        Self::Rcd,
        Self::Edcd,
        Self::Gla,
        Self::MaxEnt,
        Self::Hg,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Rcd => "rcd",
            Self::Edcd => "edcd",
            Self::Gla => "gla",
            Self::MaxEnt => "maxent",
            Self::Hg => "hg",
        }
    }

    pub fn family(&self) -> AlgorithmFamily {
        match self {
            Self::Basic | Self::Rcd | Self::Edcd => AlgorithmFamily::Ordering,
            Self::Gla => AlgorithmFamily::RankingValues,
            Self::MaxEnt | Self::Hg => AlgorithmFamily::Weights,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == token)
            .ok_or_else(|| ConfigError::UnknownAlgorithm {
                token: s.to_string(),
            })
    }
}
