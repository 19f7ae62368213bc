// file: src/models/ranked.rs
// description: ranked match model with similarity scores
// reference: used for TF-IDF re-ranking results

use crate::models::Memory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub memory: Memory,

    /// 1-based rank, 1 is the best match
    pub rank: usize,

    /// Cosine similarity against the query, range [-1, 1]
    pub score: f32,
}

impl RankedMatch {
    pub fn new(memory: Memory, rank: usize, score: f32) -> Self {
        Self {
            memory,
            rank,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ranked_match_creation() {
        let m = Memory {
            id: "abc123".to_string(),
            text: "lunch at noon".to_string(),
            tags: vec!["work".to_string()],
        };
        let ranked = RankedMatch::new(m, 1, 0.8731);
        assert_eq!(ranked.rank, 1);
        assert_eq!(ranked.score, 0.8731);
        assert_eq!(ranked.memory.id, "abc123");
    }
}
