//! Benchmarks for requirement resolution and decoration rendering.
//!
//! Performance targets (one call per dependency on every refresh):
//! - Resolving against 100 versions: < 50μs
//! - Composing a decoration with 100 hover entries: < 500μs
//! - Composing all decorations of a 25-dependency manifest: < 5ms

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deps_decor_core::{
    DecorConfig, DecorationComposer, Item, LineIndex, SemverResolver, VersionResolver,
};
use std::hint::black_box;

const MANIFEST: &str = r#"
[package]
name = "medium-project"
version = "0.1.0"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
serde_json = "1.0"
tokio = { version = "1.0", features = ["macros", "rt-multi-thread"] }
reqwest = { version = "0.12", features = ["json", "gzip"] }
thiserror = "2.0"
anyhow = "1.0"
dashmap = "6.0"
async-trait = "0.1"
semver = "1.0"
toml_edit = "0.24"
tracing = "0.1"
tracing-subscriber = "0.3"
futures = "0.3"
regex = "1.0"
url = "2.0"
uuid = "1.0"
chrono = "0.4"
parking_lot = "0.12"
rayon = "1.0"
bytes = "1"
once_cell = "1.20"
urlencoding = "2.1"
tempfile = "3"
insta = "1.0"
criterion = "0.8"
"#;

/// Newest-first list spanning a few majors and minors.
fn generate_versions(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let n = count - i;
            format!("{}.{}.{}", n / 50, (n / 10) % 5, n % 10)
        })
        .collect()
}

/// Items for every `name = "req"` or `version = "req"` occurrence.
fn manifest_items(text: &str) -> Vec<Item> {
    let mut items = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if let Some((name, rest)) = line.split_once(" = ")
            && !line.starts_with('[')
            && !line.starts_with("name")
            && !line.starts_with("version")
        {
            let req_line = rest.find("version = ").map_or(rest, |i| &rest[i + 10..]);
            if let Some(open) = req_line.find('"')
                && let Some(len) = req_line[open + 1..].find('"')
            {
                let start = offset + (line.len() - req_line.len()) + open;
                let value = &req_line[open + 1..open + 1 + len];
                items.push(Item::new(name.trim(), value, start, start + len + 2));
            }
        }
        offset += line.len();
    }
    items
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for count in [10, 100, 1000] {
        let versions = generate_versions(count);
        group.bench_with_input(BenchmarkId::new("caret", count), &versions, |b, versions| {
            b.iter(|| SemverResolver.resolve(black_box("^1.2"), black_box(versions)))
        });
        group.bench_with_input(
            BenchmarkId::new("invalid", count),
            &versions,
            |b, versions| b.iter(|| SemverResolver.resolve(black_box("garbage"), black_box(versions))),
        );
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let composer = DecorationComposer::new(DecorConfig::default());
    let index = LineIndex::new(MANIFEST);
    let items = manifest_items(MANIFEST);

    for count in [10, 100] {
        let versions = generate_versions(count);
        let item = &items[0];
        group.bench_with_input(
            BenchmarkId::new("single_item", count),
            &versions,
            |b, versions| b.iter(|| composer.compose(&index, black_box(item), versions, None)),
        );
    }

    let versions = generate_versions(50);
    group.bench_function("full_manifest", |b| {
        b.iter(|| {
            items
                .iter()
                .map(|item| composer.compose(&index, black_box(item), &versions, None))
                .count()
        })
    });

    group.finish();
}

fn bench_line_index(c: &mut Criterion) {
    c.bench_function("line_index_build", |b| {
        b.iter(|| LineIndex::new(black_box(MANIFEST)))
    });
}

criterion_group!(benches, bench_resolve, bench_compose, bench_line_index);
criterion_main!(benches);
