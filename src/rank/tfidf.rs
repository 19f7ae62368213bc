// file: src/rank/tfidf.rs
// description: TF-IDF vectorizer with smoothed idf and L2-normalized vectors
// reference: Spärck Jones (1972), term specificity / IDF motivation

use crate::rank::tokenize::tokenize;
use std::collections::HashMap;

/// A fitted TF-IDF model over a document corpus.
///
/// Fitting builds a vocabulary and per-term smoothed inverse document
/// frequency: `idf(t) = ln((1 + n) / (1 + df(t))) + 1`. Transforming a text
/// produces an L2-normalized tf·idf vector in that space, so cosine
/// similarity between two transformed vectors is their dot product.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

/// Sparse vector in the vectorizer's term space: (term index, weight) pairs,
/// sorted by term index, unit L2 norm unless empty.
pub type TermVector = Vec<(usize, f32)>;

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights from `texts`.
    pub fn fit(texts: &[&str]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for text in texts {
            let mut seen: Vec<usize> = Vec::new();
            for token in tokenize(text) {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(token).or_insert(next_index);
                if index == document_frequency.len() {
                    document_frequency.push(0);
                }
                if !seen.contains(&index) {
                    seen.push(index);
                    document_frequency[index] += 1;
                }
            }
        }

        let n = texts.len() as f32;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Project `text` into the fitted term space. Terms outside the
    /// vocabulary are ignored; a text with no known terms yields an empty
    /// (all-zero) vector.
    pub fn transform(&self, text: &str) -> TermVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: TermVector = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        vector.sort_by_key(|&(index, _)| index);

        let norm = vector
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt();
        if norm > 0.0 {
            for (_, w) in vector.iter_mut() {
                *w /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
