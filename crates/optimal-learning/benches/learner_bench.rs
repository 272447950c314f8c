//! Criterion benchmarks for the learners over synthetic chain grammars.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use optimal_core::{Algorithm, OptimalConfig};
use optimal_learning::Learner;
use test_fixtures::chain_grammar;

fn bench_learners(c: &mut Criterion) {
    let config = OptimalConfig::default();
    let mut group = c.benchmark_group("train");
    for size in [8usize, 32] {
        let grammar = chain_grammar(size);
        for algorithm in [Algorithm::Rcd, Algorithm::Edcd, Algorithm::Hg, Algorithm::MaxEnt] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &grammar,
                |bench, grammar| {
                    bench.iter(|| {
                        let mut learner =
                            Learner::new(grammar.clone(), algorithm, &config).unwrap();
                        black_box(learner.train().unwrap())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_gla_epochs(c: &mut Criterion) {
    let grammar = chain_grammar(16);
    let mut config = OptimalConfig::default();
    config.gla.epochs = Some(100);
    c.bench_function("gla_100_epochs_16_constraints", |bench| {
        bench.iter(|| {
            let mut learner = Learner::new(grammar.clone(), Algorithm::Gla, &config).unwrap();
            black_box(learner.train().unwrap())
        })
    });
}

criterion_group!(benches, bench_learners, bench_gla_epochs);
criterion_main!(benches);
