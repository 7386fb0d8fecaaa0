use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vermatch::{extract_first_match, Matcher, Mode, Semver, Version};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "3.2.1-alpha.1.release.3+exp.sha.5114f85",
        "10.20.30-rc-1",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version), Mode::Strict).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases: Vec<(Version, Version)> = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("3.2.1-beta.4", "3.2.1-beta.17"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("3.2.1-rc.8", "3.2.1-rc.12"),
        ("1.0.0-1", "1.0.0-alpha"),
    ]
    .iter()
    .map(|(a, b)| (a.parse().unwrap(), b.parse().unwrap()))
    .collect();

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (a, bver) in &cases {
                black_box(black_box(a).cmp(black_box(bver)));
            }
        })
    });
}

fn bench_matches(c: &mut Criterion) {
    let matcher = Matcher::new(
        Some("3.0.0"),
        Some("3.2.1-rc.12"),
        &["3.1.0", "3.1.1"],
        Some(("1.0.0", "1.9.9")),
    )
    .unwrap();
    let candidates: Vec<Version> = ["3.2.1-rc.8", "3.1.0", "1.5.0", "4.0.0"]
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();

    c.bench_function("matcher_matches", |b| {
        b.iter(|| {
            for candidate in &candidates {
                black_box(matcher.matches(black_box(candidate)));
            }
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    let texts = [
        "build v1.2.3-beta done",
        "release 2.0.0+20240101 shipped",
        "nothing to see here",
    ];

    c.bench_function("extract_first_match", |b| {
        b.iter(|| {
            for text in texts {
                black_box(extract_first_match(black_box(text), Mode::Strict));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = [
        "1.0", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0", "2.4", "1.0.0-rc.1", "10.0.0",
    ];

    c.bench_function("sort_versions", |b| {
        b.iter(|| black_box(Semver::sort(black_box(&versions), Mode::Permissive)))
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_compare,
    bench_matches,
    bench_extract,
    bench_sort
);
criterion_main!(benches);
