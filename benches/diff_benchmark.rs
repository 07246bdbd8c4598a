//! Diff engine benchmark: Measure LCS diff and render performance.
//!
//! Target: < 5ms for a 500-line file with scattered edits

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use diffcheck::render::{ansi, html, unified};
use diffcheck::{compute_diff, Comparison, LcsTable, OutputBuffer, RenderConfig};

/// Create source-like lines for benchmarking.
fn create_test_lines(count: usize, seed: usize) -> Vec<String> {
    (0..count)
        .map(|n| {
            // Every 17th line differs between seeds
            let variant = if n % 17 == 0 { seed } else { 0 };
            format!("    let value_{n} = compute({n}, {variant}); // <{}>", n % 7)
        })
        .collect()
}

fn diff_identical(c: &mut Criterion) {
    let lines = create_test_lines(500, 0);

    c.bench_function("diff_500_identical", |b| {
        b.iter(|| compute_diff(black_box(&lines), black_box(&lines)))
    });
}

fn diff_scattered_edits(c: &mut Criterion) {
    let a = create_test_lines(500, 0);
    let b_lines = create_test_lines(500, 1);

    c.bench_function("diff_500_scattered", |b| {
        b.iter(|| compute_diff(black_box(&a), black_box(&b_lines)))
    });
}

fn diff_disjoint(c: &mut Criterion) {
    let a: Vec<String> = (0..300).map(|n| format!("left {n}")).collect();
    let b_lines: Vec<String> = (0..300).map(|n| format!("right {n}")).collect();

    c.bench_function("diff_300_disjoint", |b| {
        b.iter(|| compute_diff(black_box(&a), black_box(&b_lines)))
    });
}

fn table_only(c: &mut Criterion) {
    let a = create_test_lines(500, 0);
    let b_lines = create_test_lines(500, 1);

    c.bench_function("lcs_table_500", |b| {
        b.iter(|| LcsTable::build(black_box(&a), black_box(&b_lines)))
    });
}

fn render_outputs(c: &mut Criterion) {
    let a = create_test_lines(500, 0);
    let b_lines = create_test_lines(500, 1);
    let script = compute_diff(&a, &b_lines);
    let config = RenderConfig::default();
    let comparison = Comparison::Ready(script.clone());

    c.bench_function("render_html_500", |b| {
        b.iter(|| html::render_html(black_box(&comparison), &config))
    });

    c.bench_function("render_unified_500", |b| {
        b.iter(|| unified::render_unified(black_box(&script), &config))
    });

    c.bench_function("render_side_by_side_500", |b| {
        b.iter(|| {
            let mut output = OutputBuffer::with_capacity(65536);
            ansi::render_side_by_side(black_box(&script), &config, 160, &mut output)
        })
    });
}

fn diff_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_by_size");

    for count in [50, 200, 500, 1000] {
        let a = create_test_lines(count, 0);
        let b_lines = create_test_lines(count, 1);

        group.bench_with_input(
            BenchmarkId::new("scattered", count),
            &(a, b_lines),
            |b, (a, bb)| b.iter(|| compute_diff(black_box(a), black_box(bb))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    diff_identical,
    diff_scattered_edits,
    diff_disjoint,
    table_only,
    render_outputs,
    diff_various_sizes,
);
criterion_main!(benches);
