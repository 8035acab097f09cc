//! Benchmarks for leaf rules and the chaining protocol.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nebula_rule::prelude::*;

fn bench_leaf_rules(c: &mut Criterion) {
    let string = string_rule();
    let email = email_rule();
    let value = json!("user@example.com");

    c.bench_function("string_rule", |b| {
        b.iter(|| string.validate(black_box(&value)))
    });
    c.bench_function("email_rule", |b| {
        b.iter(|| email.validate(black_box(&value)))
    });
}

fn bench_chained_rule(c: &mut Criterion) {
    // One pre-rule plus a parameterized predicate.
    let rule = length_between(3, 64);
    let value = json!("user@example.com");

    c.bench_function("length_between_with_pre_rule", |b| {
        b.iter(|| rule.validate(black_box(&value)))
    });
}

fn bench_sentinel_bypass(c: &mut Criterion) {
    let rule = email_rule();
    let sentinel = not_provided();

    c.bench_function("sentinel_bypass", |b| {
        b.iter(|| rule.validate(black_box(&sentinel)))
    });
}

criterion_group!(
    benches,
    bench_leaf_rules,
    bench_chained_rule,
    bench_sentinel_bypass
);
criterion_main!(benches);
