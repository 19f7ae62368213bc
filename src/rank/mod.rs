// file: src/rank/mod.rs
// description: TF-IDF re-ranking over fetched memories
// reference: internal module structure

pub mod similarity;
pub mod tfidf;
pub mod tokenize;

pub use similarity::cosine_similarity;
pub use tfidf::{TermVector, TfidfVectorizer};

use crate::models::{Memory, RankedMatch};
use tracing::debug;

/// Fit a TF-IDF model over the memory texts, score every memory against the
/// query, and return the top `min(top_n, len)` matches by descending
/// similarity. Equal scores keep the original fetch order (stable sort, no
/// secondary key).
pub fn rank_top_matches(query: &str, memories: Vec<Memory>, top_n: usize) -> Vec<RankedMatch> {
    let texts: Vec<&str> = memories.iter().map(|m| m.text.as_str()).collect();

    let vectorizer = TfidfVectorizer::fit(&texts);
    let query_vec = vectorizer.transform(query);
    debug!(
        "Fitted vectorizer over {} memories ({} terms)",
        memories.len(),
        vectorizer.vocabulary_size()
    );

    let mut scored: Vec<(Memory, f32)> = memories
        .into_iter()
        .map(|memory| {
            let doc_vec = vectorizer.transform(&memory.text);
            let score = cosine_similarity(&query_vec, &doc_vec);
            (memory, score)
        })
        .collect();

    // sort_by is stable, so ties preserve fetch order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, (memory, score))| RankedMatch::new(memory, i + 1, score))
        .collect()
}
