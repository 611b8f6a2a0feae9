//! Expression Benchmarks
//!
//! Benchmarks for infix-to-postfix conversion and postfix evaluation.
//!
//! Run with: `cargo bench --bench expression_ops`

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kalkulator::prelude::*;

fn expression_of_length(operators: usize) -> String {
    let mut text = String::from("1");
    for i in 0..operators {
        let op = Operator::ALL[i % Operator::ALL.len()];
        text.push_str(&format!(" {op} {}", i % 97 + 1));
    }
    text
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for operators in [1, 10, 100, 1000] {
        let infix = expression_of_length(operators);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{operators}_operators")),
            &infix,
            |bench, infix| {
                bench.iter(|| black_box(convert(black_box(infix))));
            },
        );
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for operators in [1, 10, 100, 1000] {
        let postfix = convert(&expression_of_length(operators)).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{operators}_operators")),
            &postfix,
            |bench, postfix| {
                bench.iter(|| black_box(evaluate(black_box(postfix))));
            },
        );
    }

    group.finish();
}

fn bench_keypad_session(c: &mut Criterion) {
    let actions = KeypadAction::parse_sequence("123 + 45 * 6 - 78 / 9 = * 2 = < < C").unwrap();

    c.bench_function("keypad_session", |bench| {
        bench.iter(|| {
            let mut calc = Calculator::new();
            calc.replay(black_box(actions.iter().copied()));
            black_box(calc);
        });
    });
}

criterion_group!(benches, bench_convert, bench_evaluate, bench_keypad_session);
criterion_main!(benches);
