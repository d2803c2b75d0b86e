use bidforge::config::SolverConfig;
use bidforge::solver::solve;
use bidforge::table::OptionRow;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn setup_table(keywords: usize) -> Vec<OptionRow> {
    let mut rng = fastrand::Rng::with_seed(1234);
    let mut rows = Vec::new();
    for k in 0..keywords {
        let base_cost = rng.u32(50..800) as f64 * 1_000.0;
        let base_clicks = rng.u32(10..500) as f64;
        for rank in 1..=10u32 {
            let factor = 1.0 / rank as f64;
            rows.push(OptionRow::new(
                rows.len(),
                &format!("kw{}", k),
                rank,
                (base_cost * factor).round(),
                (base_clicks * factor).round(),
            ));
        }
    }
    rows
}

fn bench_solve(c: &mut Criterion) {
    let rows = setup_table(200);
    let budget = 40_000_000.0;

    let seq = SolverConfig {
        parallel_threshold: u64::MAX,
        ..Default::default()
    };
    let par = SolverConfig {
        parallel_threshold: 0,
        ..Default::default()
    };

    c.bench_function("solve_200kw_sequential", |b| {
        b.iter(|| solve(black_box(&rows), black_box(budget), &seq).unwrap())
    });
    c.bench_function("solve_200kw_parallel", |b| {
        b.iter(|| solve(black_box(&rows), black_box(budget), &par).unwrap())
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
