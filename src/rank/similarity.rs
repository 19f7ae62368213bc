// file: src/rank/similarity.rs
// description: cosine similarity over sparse term vectors
// reference: internal ranking math

use crate::rank::tfidf::TermVector;

/// Cosine similarity between two sparse vectors. Both sides come out of
/// `TfidfVectorizer::transform` already L2-normalized, so this reduces to a
/// sparse dot product; an empty vector scores 0.0 against everything.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f32 {
    let mut i = 0;
    let mut j = 0;
    let mut dot = 0.0;

    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    dot
}
