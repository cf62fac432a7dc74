//! Benchmarks for vectorization and similarity computation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic corpus so the bench runs without the TMDB CSVs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{SimilarityMatrix, Vocabulary};

/// Build a deterministic synthetic corpus of tag strings.
fn synthetic_corpus(items: usize, words_per_item: usize) -> Vec<String> {
    (0..items)
        .map(|i| {
            (0..words_per_item)
                .map(|j| format!("tok{}", (i * 31 + j * 7) % 800))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_vocabulary_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(500, 120);

    c.bench_function("vocabulary_build", |b| {
        b.iter(|| {
            let vocab = Vocabulary::build(black_box(&corpus), black_box(5000));
            black_box(vocab)
        })
    });
}

fn bench_matrix_from_tags(c: &mut Criterion) {
    let corpus = synthetic_corpus(500, 120);
    let vocab = Vocabulary::build(&corpus, 5000);

    c.bench_function("similarity_matrix_500", |b| {
        b.iter(|| {
            let matrix = SimilarityMatrix::from_tag_strings(black_box(&corpus), black_box(&vocab));
            black_box(matrix)
        })
    });
}

criterion_group!(benches, bench_vocabulary_build, bench_matrix_from_tags);
criterion_main!(benches);
