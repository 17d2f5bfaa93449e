//! Query orchestration.
//!
//! [`QueryController`] owns the index, the facet selections and the current
//! results. Every input goes through one of the `on_*` methods (or
//! [`QueryController::on_event`]) and runs to completion before returning, so
//! the view can read `current_page_items` / `total_match_count` right after.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::facets::FilterState;
use crate::paginator::{PageSize, PageView, Paginator};
use crate::traits::SearchIndex;
use crate::types::{Document, FacetKind, SearchHit};

/// Discrete inputs coming from the view.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    TextChanged(Option<String>),
    FacetToggled { group: FacetKind, name: String, value: bool },
    PageChanged { page_size: usize, page_number: usize },
}

/// Everything a query depends on, derived in full from the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub text: Option<String>,
    pub active_categories: BTreeSet<String>,
    pub active_types: BTreeSet<String>,
}

impl QueryState {
    pub fn new(text: Option<String>, filters: &FilterState) -> Self {
        Self { text, active_categories: filters.active_categories(), active_types: filters.active_types() }
    }

    /// Text worth sending to the index, if any.
    pub fn searchable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Category OR type: either facet dimension admits a document on its own.
    pub fn admits(&self, doc: &Document) -> bool {
        self.active_categories.contains(doc.category.as_str()) || self.active_types.contains(&doc.doc_type)
    }
}

/// Per-facet match counts over the current results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub categories: BTreeMap<String, usize>,
    pub types: BTreeMap<String, usize>,
}

pub struct QueryController<I> {
    index: I,
    filters: FilterState,
    query: QueryState,
    results: Vec<SearchHit>,
    paginator: Paginator,
}

impl<I: SearchIndex> QueryController<I> {
    pub fn new(index: I, filters: FilterState, page_size: PageSize) -> Self {
        let query = QueryState::new(None, &filters);
        Self { index, filters, query, results: Vec::new(), paginator: Paginator::new(page_size) }
    }

    /// Seed the free text, typically from the route's `search` parameter.
    pub fn with_initial_text(mut self, text: Option<String>) -> Result<Self> {
        self.on_text_change(text.as_deref())?;
        Ok(self)
    }

    pub fn on_event(&mut self, event: SearchEvent) -> Result<()> {
        match event {
            SearchEvent::TextChanged(text) => self.on_text_change(text.as_deref()),
            SearchEvent::FacetToggled { group, name, value } => self.on_facet_toggle(group, &name, value),
            SearchEvent::PageChanged { page_size, page_number } => self.on_page_change(page_size, page_number),
        }
    }

    pub fn on_text_change(&mut self, text: Option<&str>) -> Result<()> {
        let query = QueryState::new(text.map(str::to_string), &self.filters);
        self.refresh(query)
    }

    pub fn on_facet_toggle(&mut self, group: FacetKind, name: &str, value: bool) -> Result<()> {
        let filters = self.filters.toggled(group, name, value).inspect_err(|e| warn!("Rejected facet toggle: {}", e))?;
        let query = QueryState::new(self.query.text.clone(), &filters);
        self.refresh(query)?;
        self.filters = filters;
        Ok(())
    }

    pub fn on_page_change(&mut self, page_size: usize, page_number: usize) -> Result<()> {
        self.paginator
            .set_page(page_size, page_number, self.results.len())
            .inspect_err(|e| warn!("Rejected page request: {}", e))
    }

    /// Run `query` against the index without touching controller state.
    pub fn execute(&self, query: &QueryState) -> Result<Vec<SearchHit>> {
        let Some(text) = query.searchable_text() else {
            return Ok(Vec::new());
        };
        let filter = |doc: &Document| -> Result<bool> { Ok(query.admits(doc)) };
        let hits = self.index.query(text, &filter)?;
        debug!(
            query = text,
            categories = ?query.active_categories,
            types = ?query.active_types,
            matches = hits.len(),
            "Executed search"
        );
        Ok(hits)
    }

    // Nothing is committed unless the query succeeds.
    fn refresh(&mut self, query: QueryState) -> Result<()> {
        let results = self.execute(&query)?;
        self.paginator.reset(results.len());
        self.results = results;
        self.query = query;
        Ok(())
    }

    pub fn current_page_items(&self) -> &[SearchHit] { self.paginator.view().items(&self.results) }

    pub fn total_match_count(&self) -> usize { self.results.len() }

    pub fn results(&self) -> &[SearchHit] { &self.results }

    pub fn page_view(&self) -> &PageView { self.paginator.view() }

    pub fn page_count(&self) -> usize { self.paginator.page_count(self.results.len()) }

    pub fn query_state(&self) -> &QueryState { &self.query }

    pub fn filter_state(&self) -> &FilterState { &self.filters }

    pub fn index(&self) -> &I { &self.index }

    pub fn facet_counts(&self) -> FacetCounts {
        let mut counts = FacetCounts::default();
        for hit in &self.results {
            *counts.categories.entry(hit.document.category.as_str().to_string()).or_insert(0) += 1;
            *counts.types.entry(hit.document.doc_type.clone()).or_insert(0) += 1;
        }
        counts
    }
}
