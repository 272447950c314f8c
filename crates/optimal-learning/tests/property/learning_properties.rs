use optimal_core::{Algorithm, Constraint, Grammar, GrammarBuilder, OptimalConfig};
use optimal_learning::continuous::maxent::{gradient, objective};
use optimal_learning::{harmonic_errors, stratify_values, unexplained_examples, Learner};
use proptest::prelude::*;

/// Examples consistent with a hidden total ranking: each winner is the
/// candidate whose violations are lexicographically smallest under it.
fn consistent_grammar(hidden: &[usize], tableaux: &[Vec<Vec<u32>>]) -> Grammar {
    let n = hidden.len();
    let names: Vec<String> = (0..n).map(|c| format!("C{c}")).collect();
    let key = |profile: &Vec<u32>| hidden.iter().map(|&c| profile[c]).collect::<Vec<_>>();

    let mut builder = GrammarBuilder::new().constraints(names.iter().map(Constraint::new));
    for (e, candidates) in tableaux.iter().enumerate() {
        let Some(winner) = candidates.iter().min_by_key(|p| key(*p)) else {
            continue;
        };
        let competitors: Vec<&Vec<u32>> = candidates.iter().filter(|p| *p != winner).collect();
        if competitors.is_empty() {
            continue;
        }
        let row = |profile: &Vec<u32>| {
            names
                .iter()
                .cloned()
                .zip(profile.iter().copied())
                .collect::<Vec<_>>()
        };
        let input = format!("/in{e}/");
        builder = builder.row(input.clone(), "win", true, row(winner));
        for (k, competitor) in competitors.into_iter().enumerate() {
            builder = builder.row(input.clone(), format!("cand{k}"), false, row(competitor));
        }
    }
    builder.build().unwrap()
}

fn data() -> impl Strategy<Value = (Vec<usize>, Vec<Vec<Vec<u32>>>)> {
    (2usize..6).prop_flat_map(|n| {
        (
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            proptest::collection::vec(
                proptest::collection::vec(proptest::collection::vec(0u32..3, n), 2..5),
                1..6,
            ),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn converged_orders_explain_the_data((hidden, tableaux) in data()) {
        let grammar = consistent_grammar(&hidden, &tableaux);
        let config = OptimalConfig::default();
        for algorithm in [Algorithm::Basic, Algorithm::Rcd, Algorithm::Edcd, Algorithm::Gla] {
            let mut learner = Learner::new(grammar.clone(), algorithm, &config).unwrap();
            let report = learner.train().unwrap();
            if matches!(algorithm, Algorithm::Rcd | Algorithm::Edcd) {
                prop_assert!(
                    report.is_converged(),
                    "{} did not converge: {:?}",
                    algorithm,
                    report.status
                );
            }
            if report.is_converged() {
                let unexplained = unexplained_examples(&grammar, &report.partial_order).unwrap();
                prop_assert!(unexplained.is_empty(), "{} left {:?}", algorithm, unexplained);
            }
        }
    }

    #[test]
    fn converged_weights_explain_the_data((hidden, tableaux) in data()) {
        let grammar = consistent_grammar(&hidden, &tableaux);
        let config = OptimalConfig::default();
        for algorithm in [Algorithm::Hg, Algorithm::MaxEnt] {
            let mut learner = Learner::new(grammar.clone(), algorithm, &config).unwrap();
            let report = learner.train().unwrap();
            if report.is_converged() {
                let by_name = learner.get_weights().unwrap();
                let weights: Vec<f64> = grammar
                    .constraint_names()
                    .iter()
                    .map(|name| by_name[*name])
                    .collect();
                let unexplained = harmonic_errors(&grammar, &weights);
                prop_assert!(unexplained.is_empty(), "{} left {:?}", algorithm, unexplained);
            }
        }
    }

    #[test]
    fn ordering_learners_are_deterministic((hidden, tableaux) in data()) {
        let grammar = consistent_grammar(&hidden, &tableaux);
        for algorithm in [Algorithm::Basic, Algorithm::Rcd, Algorithm::Edcd] {
            let run = || {
                Learner::new(grammar.clone(), algorithm, &OptimalConfig::default())
                    .unwrap()
                    .train()
                    .unwrap()
                    .partial_order
            };
            prop_assert_eq!(run(), run());
        }
    }

    #[test]
    fn gla_runs_repeat_under_a_seed(seed in any::<u64>(), (hidden, tableaux) in data()) {
        let grammar = consistent_grammar(&hidden, &tableaux);
        let mut config = OptimalConfig::default();
        config.learner.seed = Some(seed);
        config.gla.epochs = Some(20);
        config.gla.shuffle = Some(true);
        let run = || {
            let mut learner = Learner::new(grammar.clone(), Algorithm::Gla, &config).unwrap();
            learner.train().unwrap();
            learner.trajectory().unwrap().to_vec()
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn derivation_is_idempotent(
        values in proptest::collection::vec(-5.0f64..5.0, 4),
        epsilon in 0.0f64..1.0,
    ) {
        let grammar = test_fixtures::chain_grammar(4);
        let first = stratify_values(&grammar, &values, epsilon).unwrap();
        let second = stratify_values(&grammar, &values, epsilon).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.constraint_count(), 4);
    }

    #[test]
    fn maxent_gradient_matches_finite_differences(
        weights in proptest::collection::vec(0.0f64..5.0, 4),
        l2 in 0.0f64..0.1,
    ) {
        let grammar = test_fixtures::chain_grammar(4);
        let analytic = gradient(&grammar, &weights, l2);
        let h = 1e-6;
        for c in 0..weights.len() {
            let mut up = weights.clone();
            let mut down = weights.clone();
            up[c] += h;
            down[c] -= h;
            let numeric =
                (objective(&grammar, &up, l2) - objective(&grammar, &down, l2)) / (2.0 * h);
            prop_assert!((numeric - analytic[c]).abs() < 1e-4);
        }
    }
}
