use crate::error::Result;
use crate::types::{Document, SearchHit, SearchOptions};

/// Predicate applied to every match before it enters the result list.
pub type DocumentFilter<'a> = dyn Fn(&Document) -> Result<bool> + 'a;

/// Full-text index over the corpus. Built once, queried many times.
pub trait SearchIndex: Send + Sync {
    /// Index `title` and `content` of every document, keeping all fields retrievable.
    ///
    /// An empty corpus is an error: there is nothing a query could ever return.
    fn build(documents: &[Document], options: &SearchOptions) -> Result<Self>
    where
        Self: Sized;

    /// Run `text` against the index and return matches accepted by `filter`,
    /// best first. `text` must contain something other than whitespace.
    fn query(&self, text: &str, filter: &DocumentFilter<'_>) -> Result<Vec<SearchHit>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
