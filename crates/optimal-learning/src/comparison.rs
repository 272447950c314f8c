//! Winner/competitor comparison pairs.
//!
//! Every algorithm learns from the same pair list: for each example in data
//! order, one pair per competitor in candidate order. This order is the
//! documented iteration order of the order-sensitive learners.

use optimal_core::Grammar;
use serde::{Deserialize, Serialize};

/// Which candidate a constraint favors within one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// The competitor violates it more.
    Winner,
    /// The winner violates it more.
    Loser,
    /// Equal violations.
    Neutral,
}

/// One winner set against one of its competitors, with both violation
/// profiles in grammar constraint order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPair {
    /// Index of the example in the grammar.
    pub example: usize,
    /// Index of the competitor among the example's candidates.
    pub competitor: usize,
    winner: Vec<u32>,
    loser: Vec<u32>,
}

impl ComparisonPair {
    /// Profiles must have equal length.
    pub fn new(example: usize, competitor: usize, winner: Vec<u32>, loser: Vec<u32>) -> Self {
        debug_assert_eq!(winner.len(), loser.len());
        Self {
            example,
            competitor,
            winner,
            loser,
        }
    }

    /// Violations of the winner.
    pub fn winner_profile(&self) -> &[u32] {
        &self.winner
    }

    /// Violations of the competitor.
    pub fn loser_profile(&self) -> &[u32] {
        &self.loser
    }

    /// Which side `constraint` favors.
    pub fn preference(&self, constraint: usize) -> Preference {
        match self.loser[constraint].cmp(&self.winner[constraint]) {
            std::cmp::Ordering::Greater => Preference::Winner,
            std::cmp::Ordering::Less => Preference::Loser,
            std::cmp::Ordering::Equal => Preference::Neutral,
        }
    }

    /// Competitor violations minus winner violations.
    pub fn difference(&self, constraint: usize) -> f64 {
        f64::from(self.loser[constraint]) - f64::from(self.winner[constraint])
    }

    /// Constraints the competitor violates more, in grammar order.
    pub fn winner_preferring(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.winner.len()).filter(|&c| self.preference(c) == Preference::Winner)
    }

    /// Constraints the winner violates more, in grammar order.
    pub fn loser_preferring(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.winner.len()).filter(|&c| self.preference(c) == Preference::Loser)
    }
}

/// All comparison pairs of a grammar, in data order.
pub fn comparisons(grammar: &Grammar) -> Vec<ComparisonPair> {
    let mut pairs = Vec::new();
    for (e, example) in grammar.examples().iter().enumerate() {
        // Validated grammars always have a winner.
        let Some(winner) = example.winner() else {
            continue;
        };
        for (c, competitor) in example.competitors() {
            pairs.push(ComparisonPair::new(
                e,
                c,
                winner.profile().to_vec(),
                competitor.profile().to_vec(),
            ));
        }
    }
    pairs
}
