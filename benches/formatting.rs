use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use taglog::caller;
use taglog::fmt::{Color, LineParts, concat, hash, timestamp};

fn bench_line_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("LineParts::render");

    let tagged = LineParts {
        timestamp: "2025-01-15T14:30:00Z",
        label: "INFO",
        tag: "svc",
        color: Color::Yellow,
        caller: "app::serve",
        message: "Application started successfully",
    };
    group.bench_function("tagged", |b| {
        b.iter(|| black_box(&tagged).render());
    });

    let untagged = LineParts { tag: "", ..tagged };
    group.bench_function("untagged", |b| {
        b.iter(|| black_box(&untagged).render());
    });

    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    c.bench_function("concat", |b| {
        b.iter(|| concat(&[black_box(&"served "), &1024, &" requests in ", &1.5, &"s"]));
    });
}

fn bench_tag_hash(c: &mut Criterion) {
    c.bench_function("fnv1a_32", |b| {
        b.iter(|| hash::fnv1a_32(black_box("authentication-service")));
    });
}

fn bench_timestamp(c: &mut Criterion) {
    c.bench_function("timestamp::now", |b| {
        b.iter(timestamp::now);
    });
}

fn bench_shorten(c: &mut Criterion) {
    let mut group = c.benchmark_group("caller::shorten");
    group.bench_function("receiver", |b| {
        b.iter(|| caller::shorten(black_box("<app::jobs::Worker as app::Job>::run")));
    });
    group.bench_function("plain", |b| {
        b.iter(|| caller::shorten(black_box("app::jobs::run_all")));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_line_render,
    bench_concat,
    bench_tag_hash,
    bench_timestamp,
    bench_shorten,
);
criterion_main!(benches);
