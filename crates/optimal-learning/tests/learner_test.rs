//! The learner facade.

use optimal_core::errors::ConfigError;
use optimal_core::{Algorithm, Constraint, GrammarBuilder, OptimalConfig};
use optimal_learning::{unexplained_examples, Learner};
use test_fixtures::load_grammar;

#[test]
fn every_token_selects_its_algorithm() {
    for token in ["basic", "rcd", "edcd", "gla", "maxent", "hg", " RCD "] {
        let grammar = load_grammar("syllable.yaml");
        let learner = Learner::from_token(grammar, token, &OptimalConfig::default()).unwrap();
        assert_eq!(learner.algorithm(), token.parse::<Algorithm>().unwrap());
    }
}

#[test]
fn unknown_token_is_a_config_error() {
    let err = Learner::from_token(load_grammar("syllable.yaml"), "ot", &OptimalConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownAlgorithm { ref token } if token == "ot"));
}

#[test]
fn config_chooses_the_algorithm() {
    let config = OptimalConfig::from_toml("[learner]\nalgorithm = \"edcd\"\n").unwrap();
    let learner = Learner::from_config(load_grammar("syllable.yaml"), &config).unwrap();
    assert_eq!(learner.algorithm(), Algorithm::Edcd);
}

#[test]
fn epenthesis_grammar_under_every_ordering_learner() {
    // Each competitor here violates both NOCODA and MAX.
    let grammar = GrammarBuilder::new()
        .constraints(["MAX", "NOCODA", "DEP"].map(Constraint::new))
        .row("/pat/", "pa.ta", true, [("MAX", 0), ("NOCODA", 0), ("DEP", 1)])
        .row("/pat/", "pat", false, [("MAX", 1), ("NOCODA", 1), ("DEP", 0)])
        .row("/tik/", "ti.ki", true, [("MAX", 0), ("NOCODA", 0), ("DEP", 1)])
        .row("/tik/", "tik", false, [("MAX", 1), ("NOCODA", 1), ("DEP", 0)])
        .build()
        .unwrap();

    for algorithm in [Algorithm::Basic, Algorithm::Rcd] {
        let mut learner =
            Learner::new(grammar.clone(), algorithm, &OptimalConfig::default()).unwrap();
        learner.train().unwrap();
        assert_eq!(learner.render().as_deref(), Some("{MAX, NOCODA} >> DEP"));
    }

    let mut hg = Learner::new(grammar, Algorithm::Hg, &OptimalConfig::default()).unwrap();
    hg.learn().unwrap();
    let weights = hg.get_weights().unwrap();
    assert!(weights["MAX"] > weights["DEP"]);
    assert!(weights["NOCODA"] > weights["DEP"]);
}

#[test]
fn contradictory_data_still_yields_an_order() {
    let grammar = load_grammar("contradictory.yaml");
    let mut learner = Learner::from_token(grammar, "rcd", &OptimalConfig::default()).unwrap();
    let report = learner.train().unwrap();
    assert!(report.status.is_inconsistent());
    let order = learner.partial_order().unwrap();
    assert_eq!(order.stratum_of("IDENT"), order.stratum_of("AGREE"));
    assert_eq!(
        unexplained_examples(learner.grammar(), order).unwrap(),
        ["/an+pa/", "/in+po/"]
    );
}

#[test]
fn learned_orders_explain_consistent_data() {
    for algorithm in [Algorithm::Basic, Algorithm::Rcd, Algorithm::Edcd] {
        let mut learner =
            Learner::new(load_grammar("chain.json"), algorithm, &OptimalConfig::default()).unwrap();
        let report = learner.train().unwrap();
        assert!(report.is_converged());
        assert!(unexplained_examples(learner.grammar(), &report.partial_order)
            .unwrap()
            .is_empty());
    }
}

#[test]
fn gla_exposes_values_by_name() {
    let mut config = OptimalConfig::default();
    config.gla.noise = Some(0.0);
    let mut learner = Learner::new(load_grammar("syllable.yaml"), Algorithm::Gla, &config).unwrap();
    assert!(learner.trajectory().is_none());
    learner.train().unwrap();

    let values = learner.get_ranking_values().unwrap();
    assert_eq!(values["NOCODA"], 101.0);
    assert_eq!(values["DEP"], 99.0);
    assert!(learner.get_weights().is_none());
    assert_eq!(learner.trajectory().map(<[_]>::len), Some(2));
    assert_eq!(learner.last_report().unwrap().algorithm, Algorithm::Gla);
}

#[test]
fn report_serializes() {
    let grammar = load_grammar("syllable.yaml");
    let mut learner = Learner::from_token(grammar, "rcd", &OptimalConfig::default()).unwrap();
    let report = learner.train().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["algorithm"], "rcd");
    assert_eq!(json["status"]["kind"], "converged");
}
