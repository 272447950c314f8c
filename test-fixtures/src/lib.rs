//! Grammar fixtures shared by integration tests and benchmarks.
//!
//! Fixtures live in `test-fixtures/grammars/` as YAML or JSON grammar files.

use std::path::PathBuf;

use optimal_core::{Constraint, Grammar, GrammarBuilder};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Walk up from whichever crate is running the test.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Absolute path to a grammar fixture, e.g. `"syllable.yaml"`.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_root().join("grammars").join(name)
}

/// Load and validate a grammar fixture.
///
/// # Panics
/// Panics if the file is missing or does not validate.
pub fn load_grammar(name: &str) -> Grammar {
    let path = fixture_path(name);
    Grammar::from_path(&path)
        .unwrap_or_else(|e| panic!("Failed to load grammar fixture {}: {}", path.display(), e))
}

/// A consistent grammar generated from a hidden total ranking `C0 >> C1 >> ...`.
///
/// Example `i` pits a winner violating `C{i+1}` against a loser violating
/// `C{i}`, so every adjacent pair of constraints is attested once.
pub fn chain_grammar(constraints: usize) -> Grammar {
    let names: Vec<String> = (0..constraints).map(|i| format!("C{i}")).collect();
    let mut builder = GrammarBuilder::new().constraints(names.iter().map(Constraint::new));
    let names = &names;
    let row = move |violated: usize| {
        names
            .iter()
            .enumerate()
            .map(move |(c, name)| (name.clone(), u32::from(c == violated)))
    };
    for i in 0..constraints.saturating_sub(1) {
        let input = format!("/in{i}/");
        builder = builder
            .row(input.clone(), format!("win{i}"), true, row(i + 1))
            .row(input, format!("lose{i}"), false, row(i));
    }
    builder
        .build()
        .unwrap_or_else(|e| panic!("chain grammar failed to validate: {e}"))
}
