use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::{Constraint, Example};
use crate::errors::ValidationError;

/// A validated grammar: ordered constraints plus training examples.
///
/// Invariants established by [`Grammar::new`]:
/// - constraint names are unique and writable in ranking notation;
/// - every example has exactly one optimal candidate and at least one competitor;
/// - every candidate reports a count for every constraint and nothing else.
#[derive(Debug, Clone)]
pub struct Grammar {
    constraints: Vec<Constraint>,
    examples: Vec<Example>,
    index: FxHashMap<String, usize>,
}

impl Grammar {
    /// Validate and build a grammar.
    pub fn new(
        constraints: Vec<Constraint>,
        examples: Vec<Example>,
    ) -> Result<Self, ValidationError> {
        let mut index = FxHashMap::default();
        for (i, constraint) in constraints.iter().enumerate() {
            Constraint::validate_name(constraint.name())?;
            if index.insert(constraint.name().to_string(), i).is_some() {
                return Err(ValidationError::DuplicateConstraint {
                    name: constraint.name().to_string(),
                });
            }
        }

        let mut grammar = Self {
            constraints,
            examples,
            index,
        };
        grammar.validate_examples()?;

        debug!(
            constraints = grammar.constraints.len(),
            examples = grammar.examples.len(),
            "grammar validated"
        );
        Ok(grammar)
    }

    fn validate_examples(&mut self) -> Result<(), ValidationError> {
        let names: Vec<&str> = self.constraints.iter().map(Constraint::name).collect();
        let declared: FxHashSet<&str> = names.iter().copied().collect();

        for example in &mut self.examples {
            let optimal = example
                .candidates()
                .iter()
                .filter(|c| c.is_optimal())
                .count();
            match optimal {
                0 => {
                    return Err(ValidationError::NoOptimalCandidate {
                        input: example.input().to_string(),
                    })
                }
                1 => {}
                count => {
                    return Err(ValidationError::MultipleOptimalCandidates {
                        input: example.input().to_string(),
                        count,
                    })
                }
            }
            if example.candidates().len() < 2 {
                return Err(ValidationError::NoCompetitor {
                    input: example.input().to_string(),
                });
            }

            let input = example.input().to_string();
            for candidate in example.candidates_mut() {
                if let Some(unknown) = candidate
                    .violations()
                    .keys()
                    .find(|k| !declared.contains(k.as_str()))
                {
                    return Err(ValidationError::UnknownConstraint {
                        input,
                        output: candidate.output().to_string(),
                        constraint: unknown.clone(),
                    });
                }

                let mut profile = Vec::with_capacity(names.len());
                for name in &names {
                    match candidate.violation(name) {
                        Some(count) => profile.push(count),
                        None => {
                            return Err(ValidationError::MissingViolation {
                                input,
                                output: candidate.output().to_string(),
                                constraint: name.to_string(),
                            })
                        }
                    }
                }
                candidate.set_profile(profile);
            }
        }
        Ok(())
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.index.get(name).map(|&i| &self.constraints[i])
    }

    /// Position of a constraint in grammar order.
    pub fn constraint_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn constraint_names(&self) -> Vec<&str> {
        self.constraints.iter().map(Constraint::name).collect()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Candidate;

    fn constraints() -> Vec<Constraint> {
        vec![
            Constraint::new("NOCODA"),
            Constraint::new("MAX"),
            Constraint::new("DEP"),
        ]
    }

    #[test]
    fn fills_profiles_in_constraint_order() {
        let example = Example::new(
            "/pat/",
            vec![
                Candidate::new("pa.ta", true, [("DEP", 1), ("MAX", 0), ("NOCODA", 0)]),
                Candidate::new("pat", false, [("NOCODA", 1), ("MAX", 0), ("DEP", 0)]),
            ],
        );
        let grammar = Grammar::new(constraints(), vec![example]).unwrap();
        let candidates = grammar.examples()[0].candidates();
        assert_eq!(candidates[0].profile(), &[0, 0, 1]);
        assert_eq!(candidates[1].profile(), &[1, 0, 0]);
        assert_eq!(grammar.constraint_index("DEP"), Some(2));
    }

    #[test]
    fn rejects_duplicate_constraint() {
        let err = Grammar::new(
            vec![Constraint::new("MAX"), Constraint::new("MAX")],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateConstraint {
                name: "MAX".to_string()
            }
        );
    }

    #[test]
    fn rejects_multiple_winners() {
        let example = Example::new(
            "/pat/",
            vec![
                Candidate::new("pa.ta", true, [("NOCODA", 0), ("MAX", 0), ("DEP", 1)]),
                Candidate::new("pat", true, [("NOCODA", 1), ("MAX", 0), ("DEP", 0)]),
            ],
        );
        let err = Grammar::new(constraints(), vec![example]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MultipleOptimalCandidates { count: 2, .. }
        ));
    }
}
