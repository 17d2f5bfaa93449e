//! docsearch-text
//!
//! Tantivy-backed [`docsearch_core::SearchIndex`]. The corpus is indexed in
//! RAM once at startup; see `index` for the build and `search` for how query
//! text becomes a tantivy query.

pub mod tantivy_utils;
pub mod index;
pub mod search;

pub use index::TantivyIndex;
