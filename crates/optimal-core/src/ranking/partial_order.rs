//! Stratified partial order over constraint names.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::constants::DOMINANCE_MARKER;
use crate::errors::RankingError;

/// Outcome of comparing two constraints under a partial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dominance {
    /// The first constraint sits in a higher stratum.
    Dominates,
    /// The second constraint sits in a higher stratum.
    Dominated,
    /// Same stratum, or at least one name is not in the order.
    Unranked,
}

/// An ordered sequence of strata, highest first.
///
/// Stratum `i` dominates stratum `j` for `i < j`; members of one stratum are
/// mutually unranked. Each name appears in exactly one stratum and no stratum
/// is empty. Two orders are equal when their stratum sequences are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialOrder {
    strata: Vec<BTreeSet<String>>,
}

impl PartialOrder {
    /// Build an order from an explicit top-down grouping.
    pub fn stratify<I, S, N>(groups: I) -> Result<Self, RankingError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let mut strata = Vec::new();
        for (index, group) in groups.into_iter().enumerate() {
            let mut stratum = BTreeSet::new();
            for name in group {
                let name = name.into();
                if !seen.insert(name.clone()) {
                    return Err(RankingError::DuplicateConstraint { name });
                }
                stratum.insert(name);
            }
            if stratum.is_empty() {
                return Err(RankingError::EmptyStratum { index });
            }
            strata.push(stratum);
        }
        Ok(Self { strata })
    }

    /// Everything in one stratum (fully unranked). No names gives an empty order.
    pub fn unranked<I, N>(names: I) -> Result<Self, RankingError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Ok(Self::default());
        }
        Self::stratify([names])
    }

    pub fn strata(&self) -> &[BTreeSet<String>] {
        &self.strata
    }

    /// Number of strata.
    pub fn len(&self) -> usize {
        self.strata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strata.is_empty()
    }

    pub fn constraint_count(&self) -> usize {
        self.strata.iter().map(BTreeSet::len).sum()
    }

    /// True when every stratum holds a single constraint.
    pub fn is_total(&self) -> bool {
        self.strata.iter().all(|s| s.len() == 1)
    }

    pub fn stratum_of(&self, name: &str) -> Option<usize> {
        self.strata.iter().position(|s| s.contains(name))
    }

    /// Constraint names, top stratum first, by name within a stratum.
    pub fn constraints(&self) -> impl Iterator<Item = &str> {
        self.strata.iter().flatten().map(String::as_str)
    }

    pub fn compare(&self, a: &str, b: &str) -> Dominance {
        match (self.stratum_of(a), self.stratum_of(b)) {
            (Some(i), Some(j)) if i < j => Dominance::Dominates,
            (Some(i), Some(j)) if i > j => Dominance::Dominated,
            _ => Dominance::Unranked,
        }
    }

    pub fn dominates(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Dominance::Dominates
    }

    /// Check that the order contains exactly `names`.
    pub fn ensure_covers<'a, I>(&self, names: I) -> Result<(), RankingError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let expected: BTreeSet<&str> = names.into_iter().collect();
        let actual: BTreeSet<&str> = self.constraints().collect();
        if expected == actual {
            return Ok(());
        }
        Err(RankingError::ConstraintMismatch {
            missing: expected.difference(&actual).map(|s| s.to_string()).collect(),
            unexpected: actual.difference(&expected).map(|s| s.to_string()).collect(),
        })
    }
}

impl fmt::Display for PartialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stratum) in self.strata.iter().enumerate() {
            if i > 0 {
                write!(f, " {DOMINANCE_MARKER} ")?;
            }
            if stratum.len() == 1 {
                // Non-empty by construction.
                if let Some(name) = stratum.iter().next() {
                    f.write_str(name)?;
                }
            } else {
                let names: Vec<&str> = stratum.iter().map(String::as_str).collect();
                write!(f, "{{{}}}", names.join(", "))?;
            }
        }
        Ok(())
    }
}

impl FromStr for PartialOrder {
    type Err = RankingError;

    /// Parse `{A, B} >> C` notation. Braces around a single name are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Ok(Self::default());
        }
        let malformed = |reason: &str| RankingError::Malformed {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut groups = Vec::new();
        for part in input.split(DOMINANCE_MARKER) {
            let part = part.trim();
            if part.is_empty() {
                return Err(malformed("missing stratum between dominance markers"));
            }
            let group: Vec<&str> = match part.strip_prefix('{') {
                Some(rest) => {
                    let inner = rest
                        .strip_suffix('}')
                        .ok_or_else(|| malformed("unclosed '{'"))?
                        .trim();
                    if inner.is_empty() {
                        Vec::new()
                    } else {
                        inner.split(',').map(str::trim).collect()
                    }
                }
                None => vec![part],
            };
            for name in &group {
                if name.is_empty() {
                    return Err(malformed("empty constraint name"));
                }
                if name.contains(['{', '}', ',']) {
                    return Err(malformed("unexpected '{', '}' or ','"));
                }
            }
            groups.push(group);
        }
        Self::stratify(groups)
    }
}
