use crate::common::{configure_criterion, flat_rules, realistic_user_data, user_rules};
use criterion::{criterion_group, BenchmarkId, Criterion};
use rule_rail::prelude::*;
use std::hint::black_box;

pub fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate");

    group.bench_function("static_message_pass", |b| {
        let rule = assert_that(true, "never rendered");
        b.iter(|| black_box(rule.check()))
    });

    group.bench_function("static_message_fail", |b| {
        let rule = assert_that(false, "rendered without allocation");
        b.iter(|| black_box(rule.check()))
    });

    group.bench_function("lazy_message_pass", |b| {
        let id = 42;
        let rule = assert_that!(true, "user {} failed", id);
        b.iter(|| black_box(rule.check()))
    });

    group.bench_function("lazy_message_fail", |b| {
        let id = 42;
        let rule = assert_that!(false, "user {} failed", id);
        b.iter(|| black_box(rule.check()))
    });

    group.finish();
}

pub fn bench_combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinators");

    for size in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("any_first_fails", size), &size, |b, &size| {
            let rule = assert_any(flat_rules(size, 1));
            b.iter(|| black_box(rule.check()))
        });

        group.bench_with_input(BenchmarkId::new("all_every_third_fails", size), &size, |b, &size| {
            let rule = assert_all(flat_rules(size, 3));
            b.iter(|| black_box(rule.check()))
        });

        group.bench_with_input(BenchmarkId::new("all_pass", size), &size, |b, &size| {
            let rule = assert_all(flat_rules(size, 0));
            b.iter(|| black_box(rule.check()))
        });
    }

    group.finish();
}

pub fn bench_realistic_validation(c: &mut Criterion) {
    let users = realistic_user_data();
    let mut group = c.benchmark_group("realistic");

    group.bench_function("build_and_validate_users", |b| {
        b.iter(|| {
            let failed = users.iter().filter(|user| validate(&user_rules(user)).is_err()).count();
            black_box(failed)
        })
    });

    group.finish();
}

criterion_group! {
    name = rule_benches;
    config = configure_criterion();
    targets = bench_predicates, bench_combinators, bench_realistic_validation,
}
