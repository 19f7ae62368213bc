// file: src/query/mod.rs
// description: query dispatch module exports
// reference: internal module structure

pub mod dispatch;
pub mod filter;

pub use dispatch::{query_memory, QueryRequest};
pub use filter::tag_filter;
