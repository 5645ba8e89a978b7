//! Directory structure rendering
//!
//! This module turns a directory into a text diagram:
//!
//! - `entry`: lists a directory's immediate children
//! - `sort`: orders siblings, directories by name and files naturally
//! - `render`: draws connector glyphs depth-first into one buffer
//! - `builder`: `TreeBuilder`, which renders and saves the result

mod builder;
mod config;
mod entry;
mod render;
mod sort;

// Re-export public types
pub use builder::{StructureReport, TreeBuilder, persist, persist_with};
pub use config::BuilderConfig;
pub use entry::{Entry, Lister, list_entries};
pub use render::{
    BLANK, BRANCH, LAST_BRANCH, Renderer, Rendering, VERTICAL, connector, continuation_prefix,
};
pub use sort::{NaturalKey, natural_cmp, order_entries, split_extension};
