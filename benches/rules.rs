use criterion::{Criterion, black_box, criterion_group, criterion_main};
use paku::FileRecord;
use paku::filter::{AgeFilter, CapFilter};
use paku::rules::{AgeRule, CapRule};
use std::time::{Duration, SystemTime};

fn records(count: u64) -> Vec<FileRecord> {
    (0..count)
        .map(|i| {
            let t = SystemTime::UNIX_EPOCH + Duration::from_secs((i * 7919) % 1_000_000);
            FileRecord::from_path(format!("/var/log/app-{i:05}.log"))
                .unwrap()
                .with_created(t)
                .with_modified(t)
        })
        .collect()
}

fn bench_rule_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule::parse");

    group.bench_function("age", |b| {
        b.iter(|| black_box("MDate <= 90m").parse::<AgeRule>());
    });

    group.bench_function("cap", |b| {
        b.iter(|| black_box("25 cdate desc").parse::<CapRule>());
    });

    group.bench_function("age_invalid", |b| {
        b.iter(|| black_box("older than a week").parse::<AgeRule>());
    });

    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let files = records(10_000);
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

    let age: AgeRule = "cdate>3d".parse().unwrap();
    group.bench_function("age_10k", |b| {
        b.iter(|| AgeFilter::filter_at(black_box(files.clone()), &age, now));
    });

    let cap: CapRule = "100 mdate desc".parse().unwrap();
    group.bench_function("cap_mdate_10k", |b| {
        b.iter(|| CapFilter::apply(black_box(files.clone()), &cap));
    });

    let by_name: CapRule = "100 name".parse().unwrap();
    group.bench_function("cap_name_10k", |b| {
        b.iter(|| CapFilter::apply(black_box(files.clone()), &by_name));
    });

    group.finish();
}

criterion_group!(benches, bench_rule_parse, bench_filters);
criterion_main!(benches);
