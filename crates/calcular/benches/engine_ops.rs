//! Expression Engine Benchmarks
//!
//! Benchmarks for tokenizing, parsing, evaluation and the engine's
//! accumulate/commit/evaluate cycle.
//!
//! Run with: `cargo bench --bench engine_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use calcular::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_expression_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("expression_parsing");

    let expressions = vec![
        ("single_literal", "42"),
        ("simple_add", "2+3"),
        ("precedence", "2+3*4"),
        ("left_chain", "1+2+3+4+5+6+7+8"),
        ("decimals", "3.14159*2.71828"),
        ("unary_minus", "-4+5*-3"),
    ];

    for (name, expr) in expressions {
        group.bench_with_input(BenchmarkId::from_parameter(name), &expr, |bench, e| {
            bench.iter(|| {
                let ast = Parser::parse_str(black_box(*e)).unwrap();
                black_box(ast);
            });
        });
    }

    group.finish();
}

fn bench_expression_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("expression_evaluation");

    let expressions = vec![
        ("simple_add", "2+3"),
        ("mixed_precedence", "2+3*4-6/2"),
        ("division_chain", "1024/2/2/2/2"),
        ("decimals", "0.1+0.2+0.3+0.4"),
    ];

    for (name, expr) in expressions {
        group.bench_with_input(BenchmarkId::from_parameter(name), &expr, |bench, e| {
            bench.iter(|| {
                let value = evaluate_str(black_box(*e)).unwrap();
                black_box(value);
            });
        });
    }

    group.finish();
}

fn bench_engine_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_round_trip");

    let digit_counts = vec![1usize, 4, 8, 14];

    for count in digit_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_digit_operands", count)),
            &count,
            |bench, &n| {
                bench.iter(|| {
                    let mut engine = ExpressionEngine::new();
                    for _ in 0..n {
                        engine.push_digit(black_box('9'));
                    }
                    engine.push_operator(Operator::Add);
                    for _ in 0..n {
                        engine.push_digit(black_box('8'));
                    }
                    engine.evaluate().unwrap();
                    black_box(engine);
                });
            },
        );
    }

    group.finish();
}

fn bench_display_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_rendering");

    // Totals holding an increasing number of committed terms
    let term_counts = vec![1usize, 4, 16, 64];

    for count in term_counts {
        let mut engine = ExpressionEngine::new();
        for _ in 0..count {
            engine.push_digit('1');
            engine.push_digit('2');
            engine.push_operator(Operator::Multiply);
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_terms", count)),
            &engine,
            |bench, eng| {
                bench.iter(|| {
                    let rendered = black_box(eng).total_display();
                    black_box(rendered);
                });
            },
        );
    }

    group.finish();
}

fn bench_unary_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("unary_operations");

    let mut engine = ExpressionEngine::new();
    for ch in "123456.789".chars() {
        engine.push_digit(ch);
    }

    group.bench_with_input(
        BenchmarkId::from_parameter("square"),
        &engine,
        |bench, eng| {
            bench.iter(|| {
                let mut e = eng.clone();
                e.square().unwrap();
                black_box(e);
            });
        },
    );

    group.bench_with_input(
        BenchmarkId::from_parameter("sqrt"),
        &engine,
        |bench, eng| {
            bench.iter(|| {
                let mut e = eng.clone();
                e.sqrt().unwrap();
                black_box(e);
            });
        },
    );

    group.finish();
}

fn bench_value_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_formatting");

    let values = vec![
        ("integral", 42.0),
        ("negative_integral", -1234.0),
        ("short_fraction", 3.5),
        ("long_fraction", std::f64::consts::PI),
        ("near_integral", 0.30000000000000004),
    ];

    for (name, value) in values {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |bench, &v| {
            bench.iter(|| {
                let formatted = format_value(black_box(v));
                black_box(formatted);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_expression_parsing,
    bench_expression_evaluation,
    bench_engine_round_trip,
    bench_display_rendering,
    bench_unary_operations,
    bench_value_formatting
);
criterion_main!(benches);
