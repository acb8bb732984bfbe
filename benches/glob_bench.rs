// benches/glob_bench.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use globtrail::{GlobOptions, GlobOptionsBuilder, GlobTrail};

fn bench_flat_patterns(c: &mut Criterion) {
    let options = GlobOptions::default();
    let patterns = vec!["*.rs", "*.toml"];

    c.bench_function("flat_patterns", |b| {
        b.iter(|| {
            let result = GlobTrail::sync(black_box(&patterns), black_box(options.clone()));
            black_box(result.unwrap())
        })
    });
}

fn bench_globstar(c: &mut Criterion) {
    let options = GlobOptions::default();
    let patterns = vec!["src/**/*.rs"];

    c.bench_function("globstar", |b| {
        b.iter(|| {
            let result = GlobTrail::sync(black_box(&patterns), black_box(options.clone()));
            black_box(result.unwrap())
        })
    });
}

fn bench_multi_pattern_union(c: &mut Criterion) {
    let options = GlobOptions::default();
    let patterns = vec!["src/**/*.rs", "tests/**/*.rs", "*.toml"];

    c.bench_function("multi_pattern_union", |b| {
        b.iter(|| {
            let result = GlobTrail::sync(black_box(&patterns), black_box(options.clone()));
            black_box(result.unwrap())
        })
    });
}

fn bench_dirs_included(c: &mut Criterion) {
    let options = GlobOptionsBuilder::new().only_files(false).build();
    let patterns = vec!["**/*"];

    c.bench_function("dirs_included", |b| {
        b.iter(|| {
            let result = GlobTrail::sync(black_box(&patterns), black_box(options.clone()));
            black_box(result.unwrap())
        })
    });
}

#[cfg(feature = "async")]
fn bench_async_drain(c: &mut Criterion) {
    use futures::{pin_mut, StreamExt};
    use tokio::runtime::Runtime;

    let options = GlobOptions::default();
    let patterns = vec!["src/**/*.rs"];

    c.bench_function("async_drain", |b| {
        b.iter(|| {
            let rt = Runtime::new().unwrap();
            rt.block_on(async {
                let stream = GlobTrail::stream(black_box(&patterns), black_box(options.clone()))
                    .unwrap();
                pin_mut!(stream);

                let mut count = 0;
                while let Some(event) = stream.next().await {
                    black_box(event);
                    count += 1;
                }
                count
            })
        })
    });
}

#[cfg(not(feature = "async"))]
criterion_group!(
    benches,
    bench_flat_patterns,
    bench_globstar,
    bench_multi_pattern_union,
    bench_dirs_included
);

#[cfg(feature = "async")]
criterion_group!(
    benches,
    bench_flat_patterns,
    bench_globstar,
    bench_multi_pattern_union,
    bench_dirs_included,
    bench_async_drain
);

criterion_main!(benches);
