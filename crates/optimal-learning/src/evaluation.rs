//! Checks shared by every learner: does a ranking or weighting explain a pair.

use optimal_core::errors::RankingError;
use optimal_core::{Grammar, PartialOrder};

use crate::comparison::{comparisons, ComparisonPair};
use crate::stratification::Stratification;

/// Strict-domination check.
///
/// The pair is explained when the highest stratum holding a winner-preferring
/// constraint lies strictly above the highest stratum holding a
/// loser-preferring one. No winner-preferring constraint means the pair can
/// never be explained; no loser-preferring one means it always is.
pub fn explains(stratification: &Stratification, pair: &ComparisonPair) -> bool {
    let top_winner = pair
        .winner_preferring()
        .map(|c| stratification.stratum_of(c))
        .min();
    let top_loser = pair
        .loser_preferring()
        .map(|c| stratification.stratum_of(c))
        .min();
    match (top_winner, top_loser) {
        (Some(w), Some(l)) => w < l,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Harmony of a violation profile: the negated weighted violation sum.
pub fn harmony(weights: &[f64], profile: &[u32]) -> f64 {
    -weights
        .iter()
        .zip(profile)
        .map(|(w, &v)| w * f64::from(v))
        .sum::<f64>()
}

/// Winner harmony must strictly exceed competitor harmony.
pub fn harmonically_explains(weights: &[f64], pair: &ComparisonPair) -> bool {
    harmony(weights, pair.winner_profile()) > harmony(weights, pair.loser_profile())
}

/// Example indices with at least one unexplained pair, in data order.
pub fn failing_examples(stratification: &Stratification, pairs: &[ComparisonPair]) -> Vec<usize> {
    collect_examples(pairs.iter().filter(|p| !explains(stratification, p)))
}

/// Example indices where some competitor matches or beats the winner's harmony.
pub fn harmonic_failures(weights: &[f64], pairs: &[ComparisonPair]) -> Vec<usize> {
    collect_examples(pairs.iter().filter(|p| !harmonically_explains(weights, p)))
}

/// Inputs for a list of example indices.
pub fn example_inputs(grammar: &Grammar, examples: &[usize]) -> Vec<String> {
    examples
        .iter()
        .map(|&e| grammar.examples()[e].input().to_string())
        .collect()
}

/// Inputs of the examples a partial order fails to explain. The order must
/// cover exactly the grammar's constraints.
pub fn unexplained_examples(
    grammar: &Grammar,
    order: &PartialOrder,
) -> Result<Vec<String>, RankingError> {
    let stratification = Stratification::from_partial_order(grammar, order)?;
    let failing = failing_examples(&stratification, &comparisons(grammar));
    Ok(example_inputs(grammar, &failing))
}

/// Inputs of the examples where `weights` (grammar order) do not give the
/// winner strictly the best harmony.
pub fn harmonic_errors(grammar: &Grammar, weights: &[f64]) -> Vec<String> {
    let failing = harmonic_failures(weights, &comparisons(grammar));
    example_inputs(grammar, &failing)
}

fn collect_examples<'a>(pairs: impl Iterator<Item = &'a ComparisonPair>) -> Vec<usize> {
    let mut examples: Vec<usize> = Vec::new();
    for pair in pairs {
        if examples.last() != Some(&pair.example) {
            examples.push(pair.example);
        }
    }
    examples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_preferring_constraint_must_be_strictly_higher() {
        // Constraint 0 prefers the winner, 1 prefers the loser.
        let pair = ComparisonPair::new(0, 1, vec![0, 1], vec![1, 0]);
        assert!(!explains(&Stratification::unranked(2), &pair));
        assert!(explains(&Stratification::from_indices(vec![0, 1]), &pair));
        assert!(!explains(&Stratification::from_indices(vec![1, 0]), &pair));
    }

    #[test]
    fn pair_without_winner_preference_is_never_explained() {
        let pair = ComparisonPair::new(0, 1, vec![1, 0], vec![0, 0]);
        assert!(!explains(&Stratification::from_indices(vec![1, 0]), &pair));
        let tie = ComparisonPair::new(0, 1, vec![0, 0], vec![0, 0]);
        assert!(!explains(&Stratification::unranked(2), &tie));
    }

    #[test]
    fn harmony_is_negated_weighted_sum() {
        assert_eq!(harmony(&[2.0, 0.5], &[1, 2]), -3.0);
        let pair = ComparisonPair::new(0, 1, vec![0, 1], vec![1, 0]);
        assert!(harmonically_explains(&[2.0, 1.0], &pair));
        assert!(!harmonically_explains(&[1.0, 1.0], &pair));
    }

    #[test]
    fn examples_are_reported_once() {
        let pairs = vec![
            ComparisonPair::new(0, 1, vec![1], vec![0]),
            ComparisonPair::new(0, 2, vec![1], vec![0]),
            ComparisonPair::new(1, 1, vec![0], vec![1]),
        ];
        assert_eq!(failing_examples(&Stratification::unranked(1), &pairs), [0]);
        assert_eq!(harmonic_failures(&[0.0], &pairs), [0, 1]);
    }
}
