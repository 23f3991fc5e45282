use chrono::{FixedOffset, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use patlog::fmt::encode::{ccyymmdd, itoa, two_two_two};
use patlog::{
    Layout, Level, LogRecord, PATTERN_ABBREV, PATTERN_DEFAULT, PATTERN_JSON, PATTERN_SHORT,
    PatternLayout,
};
use std::hint::black_box;

fn sample_record() -> LogRecord {
    LogRecord::new(Level::Info, "Application started successfully")
        .created(
            FixedOffset::east_opt(3600)
                .unwrap()
                .with_ymd_and_hms(2025, 1, 15, 14, 30, 0)
                .unwrap(),
        )
        .prefix("MAIN")
        .source("src/server/listener.rs")
        .line(128)
}

fn bench_pattern_layout_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("PatternLayout::format");
    let record = sample_record();

    for (name, pattern) in [
        ("default", PATTERN_DEFAULT),
        ("short", PATTERN_SHORT),
        ("abbrev", PATTERN_ABBREV),
        ("json", PATTERN_JSON),
    ] {
        let layout = PatternLayout::new(pattern);
        group.bench_function(name, |b| {
            b.iter(|| layout.format(black_box(Some(&record))));
        });
    }

    let layout = PatternLayout::new(PATTERN_DEFAULT);
    layout.set_utc(true);
    group.bench_function("default_utc", |b| {
        b.iter(|| layout.format(black_box(Some(&record))));
    });

    group.finish();
}

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let mut buf = Vec::with_capacity(64);

    group.bench_function("itoa_padded", |b| {
        b.iter(|| {
            buf.clear();
            itoa(&mut buf, black_box(123), 6);
        });
    });

    group.bench_function("two_two_two", |b| {
        b.iter(|| {
            buf.clear();
            two_two_two(&mut buf, black_box(14), black_box(30), black_box(5), b':');
        });
    });

    group.bench_function("ccyymmdd", |b| {
        b.iter(|| {
            buf.clear();
            ccyymmdd(&mut buf, black_box(20), black_box(25), 1, 15, b'/');
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pattern_layout_format, bench_encoders);
criterion_main!(benches);
