use automaton_minimizer::{prelude::*, random::generate_random_automaton};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn minimize_random_automata(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for symbols in [2, 4, 8] {
        let automata: Vec<_> = (0..16)
            .map(|_| generate_random_automaton(symbols, 0.1, 2))
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(symbols),
            &automata,
            |b, automata| {
                b.iter(|| {
                    for automaton in automata {
                        let mut automaton = automaton.clone();
                        automaton.minimize().expect("random automata are deterministic");
                        black_box(automaton.size());
                    }
                })
            },
        );
    }
    group.finish();
}

fn analyze_random_automata(c: &mut Criterion) {
    let automata: Vec<_> = (0..16)
        .map(|_| generate_random_automaton(3, 0.1, 3))
        .collect();
    c.bench_function("analyze", |b| {
        b.iter(|| {
            for automaton in &automata {
                black_box(analyze(automaton).expect("random automata are deterministic"));
            }
        })
    });
}

criterion_group!(benches, minimize_random_automata, analyze_random_automata);
criterion_main!(benches);
