use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semrange::prelude::*;

fn strict_ok_inputs() -> Vec<&'static str> {
    vec![
        "0.0.4",
        "10.20.30",
        "1.1.2-prerelease+meta",
        "1.0.0-alpha.beta.1",
        "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
        "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
    ]
}

fn parse_strict_ok(inputs: &[&str]) {
    for input in inputs {
        let res = Version::parse(input, true);
        assert!(res.is_ok());
    }
}

fn strict_err_inputs() -> Vec<&'static str> {
    vec![
        "1.2",
        "1.2.3-0123",
        "+invalid",
        "alpha..",
        "1.0.0-alpha...1",
        "1.2.3.DEV",
    ]
}

fn parse_strict_err(inputs: &[&str]) {
    for input in inputs {
        let res = Version::parse(input, true);
        assert!(res.is_err());
    }
}

/// A long run of near-identifiers that never completes a match, the classic way to make a
/// backtracking matcher blow up.
fn pathological_input() -> String {
    format!("1.0.0-{}!", "a.".repeat(4096))
}

fn sort_versions(inputs: &[&str]) -> Vec<Version> {
    let mut versions: Vec<Version> = inputs
        .iter()
        .map(|input| Version::parse(input, true).unwrap())
        .collect();
    versions.sort();
    versions
}

fn range_inputs() -> Vec<&'static str> {
    vec!["0.4.6", "[>=1.2", "1", "0.0.0", "  [ >= 2.0.0-rc.1 ]"]
}

fn parse_and_contain(inputs: &[&str], version: &Version) -> usize {
    inputs
        .iter()
        .map(|input| Range::parse(input).unwrap())
        .filter(|range| range.contains(version))
        .count()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_strict_ok", |b| {
        b.iter(|| parse_strict_ok(black_box(&strict_ok_inputs())))
    });
    c.bench_function("parse_strict_err", |b| {
        b.iter(|| parse_strict_err(black_box(&strict_err_inputs())))
    });

    let pathological = pathological_input();
    c.bench_function("parse_pathological", |b| {
        b.iter(|| Version::parse(black_box(&pathological), true).is_err())
    });

    c.bench_function("sort_versions", |b| {
        b.iter(|| sort_versions(black_box(&strict_ok_inputs())))
    });

    let version = Version::from_core(1, 2, 9);
    c.bench_function("range_parse_contains", |b| {
        b.iter(|| parse_and_contain(black_box(&range_inputs()), black_box(&version)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
