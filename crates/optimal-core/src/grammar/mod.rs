//! Violation model: constraints, candidates, examples, and the validated grammar.
//!
//! A `Grammar` is built once at the boundary and is read-only afterwards.
//! Construction validates every example and fills each candidate's dense
//! violation profile, aligned to the grammar's constraint order.

pub mod builder;
pub mod candidate;
pub mod constraint;
pub mod example;
#[allow(clippy::module_inception)]
pub mod grammar;
pub mod loader;

pub use builder::GrammarBuilder;
pub use candidate::Candidate;
pub use constraint::Constraint;
pub use example::Example;
pub use grammar::Grammar;
pub use loader::{CandidateRow, ConstraintEntry, GrammarFile};
