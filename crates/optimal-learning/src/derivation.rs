//! Partial orders from numeric ranking values or weights.

use optimal_core::errors::RankingError;
use optimal_core::{Grammar, PartialOrder};

/// Group constraints by value, highest first.
///
/// Values are sorted descending and adjacent values closer than `epsilon`
/// share a stratum, so a stratum may span more than `epsilon` end to end.
/// Exactly equal values always share a stratum, even when `epsilon` is 0.
/// Equal values keep grammar order, which makes the result deterministic.
pub fn stratify_values(
    grammar: &Grammar,
    values: &[f64],
    epsilon: f64,
) -> Result<PartialOrder, RankingError> {
    let names = grammar.constraint_names();
    let mut order: Vec<usize> = (0..values.len().min(names.len())).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut previous: Option<f64> = None;
    for c in order {
        let value = values[c];
        match (previous, groups.last_mut()) {
            (Some(p), Some(group)) if p - value < epsilon || p == value => group.push(names[c]),
            _ => groups.push(vec![names[c]]),
        }
        previous = Some(value);
    }

    let order = PartialOrder::stratify(groups)?;
    order.ensure_covers(names.iter().copied())?;
    Ok(order)
}
