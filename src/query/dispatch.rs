// file: src/query/dispatch.rs
// description: two-branch query dispatcher and result rendering
// reference: internal query flow

use crate::config::QueryConfig;
use crate::error::Result;
use crate::index::MemoryIndex;
use crate::models::{Memory, RankedMatch};
use crate::query::filter::tag_filter;
use crate::rank::rank_top_matches;
use tracing::{debug, info};

pub const NO_MEMORIES: &str = "❌ No memories found.";

/// One query invocation: what to look for, which tags to require, and
/// whether to re-rank locally with TF-IDF instead of trusting the engine's
/// token search.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub query: String,
    pub tags: Vec<String>,
    pub use_tfidf: bool,
}

/// Run one query against the index and print the results.
///
/// Empty result sets on either path are not errors: the no-memories line is
/// printed and the call returns Ok. Index and decoding failures propagate.
pub async fn query_memory(
    index: &MemoryIndex,
    request: &QueryRequest,
    config: &QueryConfig,
) -> Result<()> {
    let filter = tag_filter(&request.tags);
    if let Some(f) = &filter {
        debug!("Applying filter: {}", f);
    }

    let lines = if request.use_tfidf {
        let memories = index.fetch_documents(config.fetch_limit, filter).await?;
        info!("Fetched {} memories for re-ranking", memories.len());
        render_tfidf(&request.query, memories, config.top_n)
    } else {
        let hits = index.search(&request.query, filter).await?;
        info!("Index returned {} hits", hits.len());
        render_hits(&hits)
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// Token-search rendering: one line per hit, in the engine's order.
pub fn render_hits(hits: &[Memory]) -> Vec<String> {
    if hits.is_empty() {
        return vec![NO_MEMORIES.to_string()];
    }

    hits.iter()
        .map(|hit| format!("- [{}] {} ({})", hit.short_id(), hit.text, hit.tag_list()))
        .collect()
}

/// TF-IDF rendering: a header plus one line per ranked match.
pub fn render_tfidf(query: &str, memories: Vec<Memory>, top_n: usize) -> Vec<String> {
    if memories.is_empty() {
        return vec![NO_MEMORIES.to_string()];
    }

    let ranked = rank_top_matches(query, memories, top_n);

    let mut lines = Vec::with_capacity(ranked.len() + 1);
    lines.push(format!("💡 Top {} matches (TF-IDF):", ranked.len()));
    for m in &ranked {
        lines.push(format_ranked(m));
    }
    lines
}

fn format_ranked(m: &RankedMatch) -> String {
    format!(
        "{}. {} [ID={}] (score={:.4})",
        m.rank,
        m.memory.text,
        m.memory.short_id(),
        m.score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn memory(id: &str, text: &str, tags: &[&str]) -> Memory {
        Memory {
            id: id.to_string(),
            text: text.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_hits_render_no_memories_line() {
        assert_eq!(render_hits(&[]), vec![NO_MEMORIES.to_string()]);
    }

    #[test]
    fn test_empty_fetch_renders_no_memories_line() {
        assert_eq!(
            render_tfidf("lunch plans", Vec::new(), 5),
            vec![NO_MEMORIES.to_string()]
        );
    }

    #[test]
    fn test_one_line_per_hit_in_order() {
        let hits = vec![
            memory("abcdefghijklmnop", "lunch at noon", &["work", "food"]),
            memory("q", "team meeting", &[]),
        ];

        let lines = render_hits(&hits);
        assert_eq!(
            lines,
            vec![
                "- [abcdefghijkl] lunch at noon (work, food)".to_string(),
                "- [q] team meeting ()".to_string(),
            ]
        );
    }

    #[test]
    fn test_tfidf_renders_header_and_capped_lines() {
        let memories: Vec<Memory> = (0..7)
            .map(|i| memory(&format!("m{i}"), "lunch plans again", &[]))
            .collect();

        let lines = render_tfidf("lunch", memories, 5);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "💡 Top 5 matches (TF-IDF):");
    }

    #[test]
    fn test_tfidf_line_format() {
        let memories = vec![memory("abcdefghijklmnop", "lunch at noon", &[])];
        let lines = render_tfidf("lunch at noon", memories, 5);

        assert_eq!(lines[0], "💡 Top 1 matches (TF-IDF):");
        assert_eq!(lines[1], "1. lunch at noon [ID=abcdefghijkl] (score=1.0000)");
    }

    #[test]
    fn test_tfidf_ranks_lunch_above_meeting() {
        let memories = vec![
            memory("m1", "lunch at noon", &[]),
            memory("m2", "team meeting", &[]),
            memory("m3", "lunch plans for friday", &[]),
        ];

        let lines = render_tfidf("lunch plans", memories, 5);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("lunch"));
        assert!(lines[2].contains("lunch"));
        assert!(lines[3].contains("team meeting"));
    }

    #[test]
    fn test_tfidf_scores_non_increasing_in_output() {
        let memories = vec![
            memory("m1", "milk delivery tomorrow", &[]),
            memory("m2", "buy milk and eggs", &[]),
            memory("m3", "dentist appointment", &[]),
        ];

        let lines = render_tfidf("milk eggs", memories, 5);
        let scores: Vec<f32> = lines[1..]
            .iter()
            .map(|l| {
                let start = l.rfind("(score=").unwrap() + "(score=".len();
                l[start..l.len() - 1].parse().unwrap()
            })
            .collect();

        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }
}
