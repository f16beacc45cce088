use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relata::algo::{tfidf::TextVectorizer, tokenizer};
use relata::catalog::CatalogEntry;
use relata::engine::{compute_recommendations, RecommendConfig};
use serde_json::json;

/// Generate a synthetic catalog for benchmarking.
fn generate_catalog(n: usize) -> Vec<CatalogEntry> {
    let domains = [
        ("garden installation ceramic planters soil", "nature,sculpture"),
        ("interactive light projection gallery wall", "light,interactive"),
        ("field recording mountain stream ambience", "sound,nature"),
        ("generative print series recycled paper", "print,generative"),
        ("bronze figure study life drawing session", "sculpture,figure"),
        ("augmented reality garden walkthrough demo", "nature,interactive"),
        ("woodcut landscape edition winter series", "print,nature"),
        ("kinetic mobile suspended steel wire", "sculpture,kinetic"),
    ];
    (0..n)
        .map(|i| {
            let (title, tags) = domains[i % domains.len()];
            serde_json::from_value(json!({
                "id": format!("item-{i}"),
                "title": title,
                "description": format!("catalog entry {i} variant {}", i % 50),
                "tags": tags,
                "year": 2000 + (i % 25) as i64,
                "locked": i % 9 == 0,
            }))
            .unwrap()
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "interactive light projection for a gallery wall with mixed-media panels";
    c.bench_function("tokenize/single", |b| {
        b.iter(|| tokenizer::tokenize(black_box(text)))
    });
}

fn bench_text_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_vectorize");
    for size in [100, 500, 2000] {
        let texts: Vec<String> = generate_catalog(size)
            .iter()
            .map(|e| e.text_blob())
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &texts, |b, texts| {
            let vectorizer = TextVectorizer::new(300, 1);
            b.iter(|| black_box(vectorizer.fit_transform(texts)))
        });
    }
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_recommendations");
    group.sample_size(10);
    for size in [100, 500, 1000] {
        let entries = generate_catalog(size);
        let config = RecommendConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(compute_recommendations(entries, &config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_text_vectorize, bench_full_pass);
criterion_main!(benches);
