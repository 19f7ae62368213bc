// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod query;
pub mod rank;
pub mod utils;

pub use config::{Config, IndexConfig, QueryConfig};
pub use error::{MemoryError, Result};
pub use index::{IndexStats, MemoryIndex};
pub use models::{Memory, RankedMatch};
pub use query::{query_memory, tag_filter, QueryRequest};
pub use rank::{cosine_similarity, rank_top_matches, TfidfVectorizer};
