#![allow(dead_code)]

use docsearch_core::error::{Error, Result};
use docsearch_core::traits::{DocumentFilter, SearchIndex};
use docsearch_core::types::{Category, Document, SearchHit, SearchOptions};

/// Word-prefix matcher standing in for a real full-text engine.
/// Score is the number of query terms that hit, so ordering is deterministic.
pub struct StubIndex {
    documents: Vec<Document>,
}

impl SearchIndex for StubIndex {
    fn build(documents: &[Document], _options: &SearchOptions) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::corpus_load("<memory>", "corpus contains no documents"));
        }
        Ok(Self { documents: documents.to_vec() })
    }

    fn query(&self, text: &str, filter: &DocumentFilter<'_>) -> Result<Vec<SearchHit>> {
        if text.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }
        let terms: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        let mut hits = Vec::new();
        for (position, doc) in self.documents.iter().enumerate() {
            let haystack = format!("{} {}", doc.title, doc.content).to_lowercase();
            let words: Vec<&str> = haystack.split(|c: char| !c.is_alphanumeric()).collect();
            let score = terms.iter().filter(|t| words.iter().any(|w| w.starts_with(t.as_str()))).count();
            if score > 0 && filter(doc)? {
                hits.push(SearchHit { position, score: score as f32, document: doc.clone() });
            }
        }
        hits.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.position.cmp(&b.position)));
        Ok(hits)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

pub fn doc(title: &str, content: &str, category: Category, doc_type: &str) -> Document {
    Document {
        title: title.to_string(),
        content: content.to_string(),
        link: format!("/{}/{}", category, title.to_lowercase().replace(' ', "-")),
        category,
        doc_type: doc_type.to_string(),
        section: "overview".to_string(),
    }
}

pub fn button_and_guide() -> Vec<Document> {
    vec![
        doc("Button", "A clickable button", Category::Components, "html"),
        doc("Guide to Forms", "How to lay out form fields", Category::Guides, "ts"),
    ]
}

/// Twelve components that all mention "widget".
pub fn widgets(n: usize) -> Vec<Document> {
    (0..n).map(|i| doc(&format!("Widget {}", i), "a reusable widget", Category::Components, "html")).collect()
}
