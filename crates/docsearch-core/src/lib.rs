#![deny(unused_variables)]
#![deny(unused_imports)]

//! docsearch-core
//!
//! Corpus model, facet state, pagination and the query controller that ties
//! them to a pluggable [`traits::SearchIndex`].

pub mod config;
pub mod controller;
pub mod corpus;
pub mod error;
pub mod facets;
pub mod layout;
pub mod paginator;
pub mod route;
pub mod traits;
pub mod types;

pub use controller::{FacetCounts, QueryController, QueryState, SearchEvent};
pub use error::{Error, Result};
pub use facets::{FacetGroup, FilterState};
pub use paginator::{PageSize, PageView, Paginator};
pub use traits::SearchIndex;
pub use types::{Category, Document, FacetKind, SearchHit, SearchOptions};
