//! Property tests for pagination and facet filtering.

mod common;

use common::{doc, StubIndex};
use docsearch_core::paginator::page_bounds;
use docsearch_core::{Category, Document, FacetKind, FilterState, PageSize, QueryController, SearchIndex, SearchOptions};
use proptest::prelude::*;

fn page_size_strategy() -> impl Strategy<Value = PageSize> {
    prop::sample::select(PageSize::ALL.to_vec())
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn type_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["html", "Guides", "ts"])
}

fn document_strategy() -> impl Strategy<Value = Document> {
    (prop::string::string_regex("[a-e]{2,5}").unwrap(), category_strategy(), type_strategy())
        .prop_map(|(word, category, doc_type)| doc(&word, &format!("{} text", word), category, doc_type))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(document_strategy(), 1..40)
}

proptest! {
    /// Walking every page in order yields the whole list exactly once.
    #[test]
    fn prop_pages_reassemble_results(len in 0usize..120, size in page_size_strategy()) {
        let items: Vec<usize> = (0..len).collect();
        let pages = len.div_ceil(size.get());
        let mut rebuilt = Vec::new();
        for number in 1..=pages {
            rebuilt.extend_from_slice(&items[page_bounds(size, number, len)]);
        }
        prop_assert_eq!(rebuilt, items);
    }

    /// Pages that start at or beyond the end are empty.
    #[test]
    fn prop_page_past_end_is_empty(len in 0usize..60, size in page_size_strategy(), extra in 0usize..5) {
        let first_empty = len.div_ceil(size.get()) + 1;
        prop_assert!(page_bounds(size, first_empty + extra, len).is_empty());
    }

    /// Every result is admitted by the active category set OR the active type set.
    #[test]
    fn prop_results_respect_facets(
        corpus in corpus_strategy(),
        off_categories in prop::collection::vec(category_strategy(), 0..4),
        on_types in prop::collection::vec(type_strategy(), 0..3),
        query in "[a-e]{1,2}",
    ) {
        let index = StubIndex::build(&corpus, &SearchOptions::default()).unwrap();
        let mut controller = QueryController::new(index, FilterState::default(), PageSize::Twenty);
        controller.on_text_change(Some(query.as_str())).unwrap();
        for c in &off_categories {
            controller.on_facet_toggle(FacetKind::Category, c.as_str(), false).unwrap();
        }
        for t in &on_types {
            controller.on_facet_toggle(FacetKind::Type, t, true).unwrap();
        }
        let state = controller.query_state().clone();
        for hit in controller.results() {
            prop_assert!(
                state.active_categories.contains(hit.document.category.as_str())
                    || state.active_types.contains(&hit.document.doc_type)
            );
        }
        prop_assert!(controller.current_page_items().len() <= 20);
    }

    /// Blank text never produces results, whatever the facets.
    #[test]
    fn prop_blank_text_is_empty(corpus in corpus_strategy(), blank in "[ \t]{0,3}", on_types in prop::collection::vec(type_strategy(), 0..3)) {
        let index = StubIndex::build(&corpus, &SearchOptions::default()).unwrap();
        let mut controller = QueryController::new(index, FilterState::default(), PageSize::Five);
        for t in &on_types {
            controller.on_facet_toggle(FacetKind::Type, t, true).unwrap();
        }
        controller.on_text_change(Some(blank.as_str())).unwrap();
        prop_assert_eq!(controller.total_match_count(), 0);
    }
}
