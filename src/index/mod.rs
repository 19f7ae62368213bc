// file: src/index/mod.rs
// description: index client module exports
// reference: internal module structure

pub mod client;
pub mod types;

pub use client::MemoryIndex;
pub use types::IndexStats;
