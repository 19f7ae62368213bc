// file: src/models/mod.rs
// description: data model module exports
// reference: internal module structure

pub mod memory;
pub mod ranked;

pub use memory::Memory;
pub use ranked::RankedMatch;
