use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use portfolio_domain::{builtin_profiles, Evaluator, Lexicon, PortfolioReport};

fn benchmark_evaluate_profiles(c: &mut Criterion) {
    let evaluator = Evaluator::standard();
    let mut group = c.benchmark_group("evaluate");

    for profile in builtin_profiles() {
        group.bench_with_input(
            BenchmarkId::from_parameter(profile.name()),
            profile,
            |b, p| {
                b.iter(|| evaluator.evaluate_years(black_box(p.description()), p.years_active()))
            },
        );
    }

    group.finish();
}

fn benchmark_portfolio_report(c: &mut Criterion) {
    let evaluator = Evaluator::standard();
    c.bench_function("portfolio_report", |b| {
        b.iter(|| PortfolioReport::evaluate(&evaluator, black_box(builtin_profiles())))
    });
}

fn benchmark_description_length(c: &mut Criterion) {
    let evaluator = Evaluator::standard();
    let mut group = c.benchmark_group("description_length");

    // keyword-free filler forces every rule to be checked
    for repeats in [1usize, 10, 100] {
        let text = "quarterly throughput review ".repeat(repeats);
        group.bench_with_input(BenchmarkId::from_parameter(text.len()), &text, |b, t| {
            b.iter(|| evaluator.evaluate_years(black_box(t), 12))
        });
    }

    group.finish();
}

fn benchmark_lexicon_toml(c: &mut Criterion) {
    let raw = Lexicon::standard().to_toml_string().unwrap();
    c.bench_function("lexicon_from_toml", |b| {
        b.iter(|| Lexicon::from_toml_str(black_box(&raw)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_evaluate_profiles,
    benchmark_portfolio_report,
    benchmark_description_length,
    benchmark_lexicon_toml
);
criterion_main!(benches);
