//! GLA, Harmonic Grammar, and MaxEnt learners.

use optimal_core::{LearningStatus, OptimalConfig, PartialOrder};
use optimal_learning::continuous::maxent::{gradient, objective};
use optimal_learning::{
    harmonic_errors, unexplained_examples, GradualLearner, HarmonicLearner, MaxEntLearner,
};
use test_fixtures::{chain_grammar, load_grammar};

fn noiseless() -> OptimalConfig {
    let mut config = OptimalConfig::default();
    config.gla.noise = Some(0.0);
    config
}

#[test]
fn hg_weights_markedness_and_max_over_dep() {
    let grammar = load_grammar("syllable.yaml");
    let mut learner = HarmonicLearner::from_config(&OptimalConfig::default());
    let report = learner.learn(&grammar).unwrap();

    let [max, nocoda, dep] = [learner.weights()[0], learner.weights()[1], learner.weights()[2]];
    assert!(max > dep && nocoda > dep, "weights {:?}", learner.weights());
    assert_eq!(dep, 0.0);
    assert!((max - 0.1).abs() < 1e-12 && (nocoda - 0.1).abs() < 1e-12);
    assert!(report.is_converged());
    assert_eq!(report.updates, 2);
    assert_eq!(report.partial_order, "{MAX, NOCODA} >> DEP".parse::<PartialOrder>().unwrap());
    assert!(harmonic_errors(&grammar, learner.weights()).is_empty());
}

#[test]
fn hg_reports_non_convergence_on_contradictory_data() {
    let grammar = load_grammar("contradictory.yaml");
    let mut config = OptimalConfig::default();
    config.hg.max_epochs = Some(20);
    let report = HarmonicLearner::from_config(&config).learn(&grammar).unwrap();
    assert!(matches!(
        report.status,
        LearningStatus::NotConverged { iterations: 20, .. }
    ));
}

#[test]
fn gla_without_noise_moves_by_plasticity() {
    let grammar = load_grammar("syllable.yaml");
    let mut learner = GradualLearner::from_config(&noiseless());
    let report = learner.learn(&grammar).unwrap();

    // One error: NOCODA up, DEP down. MAX then already beats DEP.
    assert_eq!(learner.values(), &[100.0, 101.0, 99.0]);
    assert_eq!(report.partial_order.to_string(), "NOCODA >> MAX >> DEP");
    assert_eq!(learner.trajectory().len(), 2);
    assert_eq!(report.iterations, 2);
    assert!(report.is_converged());
}

#[test]
fn gla_same_seed_same_trajectory() {
    let grammar = load_grammar("syllable.yaml");
    let mut config = OptimalConfig::default();
    config.learner.seed = Some(1234);
    config.gla.shuffle = Some(true);

    let mut first = GradualLearner::from_config(&config);
    let mut second = GradualLearner::from_config(&config);
    let a = first.learn(&grammar).unwrap();
    let b = second.learn(&grammar).unwrap();

    assert_eq!(a, b);
    assert_eq!(first.trajectory(), second.trajectory());
    assert!(a.is_converged());
    assert!(a.partial_order.dominates("MAX", "DEP"));
    assert!(a.partial_order.dominates("NOCODA", "DEP"));
}

#[test]
fn gla_status_follows_the_derived_order() {
    // Steps smaller than epsilon leave every constraint in one stratum.
    let grammar = load_grammar("syllable.yaml");
    let mut config = noiseless();
    config.gla.plasticity = Some(0.004);
    config.gla.epochs = Some(50);
    let mut learner = GradualLearner::from_config(&config);
    let report = learner.learn(&grammar).unwrap();

    assert_eq!(report.partial_order.to_string(), "{DEP, MAX, NOCODA}");
    let unexplained = unexplained_examples(&grammar, &report.partial_order).unwrap();
    assert_eq!(unexplained.len(), 3);
    match report.status {
        LearningStatus::NotConverged {
            iterations,
            residual_errors,
            gradient_norm: None,
        } => {
            assert_eq!(iterations, 50);
            assert_eq!(residual_errors, unexplained.len());
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn gla_retraining_repeats_the_run() {
    let grammar = load_grammar("syllable.yaml");
    let mut config = OptimalConfig::default();
    config.learner.seed = Some(99);
    config.gla.shuffle = Some(true);
    let mut learner = GradualLearner::from_config(&config);

    let first = learner.learn(&grammar).unwrap();
    let trajectory = learner.trajectory().to_vec();
    let second = learner.learn(&grammar).unwrap();

    assert_eq!(first, second);
    assert_eq!(learner.trajectory(), trajectory.as_slice());
}

#[test]
fn maxent_learns_non_negative_weights() {
    let grammar = load_grammar("syllable.yaml");
    let mut learner = MaxEntLearner::from_config(&OptimalConfig::default());
    let report = learner.learn(&grammar).unwrap();

    let weights = learner.weights();
    assert_eq!(weights[2], 0.0);
    assert!(weights[0] > 0.0 && weights[0] == weights[1]);
    assert!(report.is_converged(), "status {:?}", report.status);
    assert_eq!(report.partial_order, "{MAX, NOCODA} >> DEP".parse::<PartialOrder>().unwrap());
}

#[test]
fn maxent_cap_reports_gradient_norm() {
    let grammar = load_grammar("syllable.yaml");
    let mut config = OptimalConfig::default();
    config.maxent.max_iterations = Some(3);
    let report = MaxEntLearner::from_config(&config).learn(&grammar).unwrap();
    match report.status {
        LearningStatus::NotConverged {
            iterations,
            gradient_norm: Some(norm),
            ..
        } => {
            assert_eq!(iterations, 3);
            assert!(norm > 0.0);
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn maxent_flat_optimum_on_contradictory_data_is_not_converged() {
    let grammar = load_grammar("contradictory.yaml");
    let mut learner = MaxEntLearner::from_config(&OptimalConfig::default());
    let report = learner.learn(&grammar).unwrap();

    let unexplained = harmonic_errors(&grammar, learner.weights());
    assert!(!unexplained.is_empty());
    assert!(!report.is_converged(), "status {:?}", report.status);
    match report.status {
        LearningStatus::NotConverged {
            residual_errors,
            gradient_norm: Some(_),
            ..
        } => assert_eq!(residual_errors, unexplained.len()),
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn maxent_gradient_matches_finite_differences() {
    let grammar = chain_grammar(4);
    let l2 = 0.05;
    let h = 1e-6;
    for weights in [[0.0, 0.0, 0.0, 0.0], [1.5, 0.2, 3.0, 0.7], [4.0, 4.0, 0.1, 2.5]] {
        let analytic = gradient(&grammar, &weights, l2);
        for c in 0..weights.len() {
            let mut up = weights;
            let mut down = weights;
            up[c] += h;
            down[c] -= h;
            let numeric =
                (objective(&grammar, &up, l2) - objective(&grammar, &down, l2)) / (2.0 * h);
            assert!(
                (numeric - analytic[c]).abs() < 1e-4,
                "constraint {c}: numeric {numeric}, analytic {}",
                analytic[c]
            );
        }
    }
}
