use std::fmt::Display;

use tantivy::collector::TopDocs;
use tantivy::schema::{Field, Schema, Value};
use tantivy::tokenizer::TextAnalyzer;
use tantivy::{doc, Index, IndexWriter, Searcher, TantivyDocument};
use tracing::{debug, info};

use docsearch_core::error::{Error, Result};
use docsearch_core::traits::{DocumentFilter, SearchIndex};
use docsearch_core::types::{Category, Document, SearchHit, SearchOptions};

use crate::search::{analyze, build_query, QueryFields};
use crate::tantivy_utils::{
	build_schema, register_tokenizers, CATEGORY, CONTENT, DOC_TYPE, LINK, POSITION, QUERY_TOKENIZER, SECTION, TITLE,
};

fn engine_err(e: impl Display) -> Error { Error::Index(e.to_string()) }

struct DocFields {
	title: Field,
	content: Field,
	link: Field,
	category: Field,
	doc_type: Field,
	section: Field,
	position: Field,
}

impl DocFields {
	fn from_schema(schema: &Schema) -> Result<Self> {
		let field = |name: &str| schema.get_field(name).map_err(engine_err);
		Ok(Self {
			title: field(TITLE)?,
			content: field(CONTENT)?,
			link: field(LINK)?,
			category: field(CATEGORY)?,
			doc_type: field(DOC_TYPE)?,
			section: field(SECTION)?,
			position: field(POSITION)?,
		})
	}

	fn query_fields(&self) -> QueryFields {
		QueryFields { title: self.title, content: self.content, doc_type: self.doc_type }
	}

	/// Rebuild the corpus record from stored fields. A missing field means the
	/// index was not built from this corpus schema.
	fn document_from(&self, stored: &TantivyDocument) -> Result<(usize, Document)> {
		let text = |field: Field, name: &str| -> Result<String> {
			stored
				.get_first(field)
				.and_then(|v| v.as_str())
				.map(str::to_string)
				.ok_or_else(|| Error::QueryPredicate(format!("stored entry lacks '{}'", name)))
		};
		let position = stored
			.get_first(self.position)
			.and_then(|v| v.as_u64())
			.ok_or_else(|| Error::QueryPredicate(format!("stored entry lacks '{}'", POSITION)))?;
		let category: Category = text(self.category, CATEGORY)?
			.parse()
			.map_err(|e: Error| Error::QueryPredicate(e.to_string()))?;
		let document = Document {
			title: text(self.title, TITLE)?,
			content: text(self.content, CONTENT)?,
			link: text(self.link, LINK)?,
			category,
			doc_type: text(self.doc_type, DOC_TYPE)?,
			section: text(self.section, SECTION)?,
		};
		Ok((position as usize, document))
	}
}

/// In-memory tantivy index over the documentation corpus.
pub struct TantivyIndex {
	searcher: Searcher,
	query_analyzer: TextAnalyzer,
	fields: DocFields,
	options: SearchOptions,
	num_docs: usize,
}

impl SearchIndex for TantivyIndex {
	fn build(documents: &[Document], options: &SearchOptions) -> Result<Self> {
		if documents.is_empty() {
			return Err(Error::corpus_load("<corpus>", "corpus contains no documents"));
		}
		let schema = build_schema();
		let index = Index::create_in_ram(schema.clone());
		register_tokenizers(&index);
		let fields = DocFields::from_schema(&schema)?;

		let mut index_writer: IndexWriter = index.writer(50_000_000).map_err(engine_err)?;
		for (position, d) in documents.iter().enumerate() {
			let doc = doc!(
				fields.title => d.title.clone(),
				fields.content => d.content.clone(),
				fields.link => d.link.clone(),
				fields.category => d.category.as_str(),
				fields.doc_type => d.doc_type.clone(),
				fields.section => d.section.clone(),
				fields.position => position as u64,
			);
			index_writer.add_document(doc).map_err(engine_err)?;
		}
		index_writer.commit().map_err(engine_err)?;

		let reader = index.reader().map_err(engine_err)?;
		let searcher = reader.searcher();
		let query_analyzer = index
			.tokenizers()
			.get(QUERY_TOKENIZER)
			.ok_or_else(|| Error::Index(format!("tokenizer '{}' is not registered", QUERY_TOKENIZER)))?;
		info!(documents = documents.len(), prefix = options.prefix, type_boost = options.type_boost, "Built search index");
		Ok(Self { searcher, query_analyzer, fields, options: options.clone(), num_docs: documents.len() })
	}

	fn query(&self, text: &str, filter: &DocumentFilter<'_>) -> Result<Vec<SearchHit>> {
		if text.trim().is_empty() {
			return Err(Error::EmptyQuery);
		}
		let mut analyzer = self.query_analyzer.clone();
		let terms = analyze(&mut analyzer, text);
		if terms.is_empty() {
			debug!(query = text, "Query has no indexable terms");
			return Ok(Vec::new());
		}
		let query = build_query(&terms, &self.fields.query_fields(), &self.options).map_err(engine_err)?;
		// every match is needed: filtering and paging happen after scoring
		let top_docs = self.searcher.search(query.as_ref(), &TopDocs::with_limit(self.num_docs.max(1))).map_err(engine_err)?;

		let mut hits = Vec::new();
		for (score, doc_address) in top_docs {
			let stored: TantivyDocument = self.searcher.doc(doc_address).map_err(engine_err)?;
			let (position, document) = self.fields.document_from(&stored)?;
			if filter(&document)? {
				hits.push(SearchHit { position, score, document });
			}
		}
		hits.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.position.cmp(&b.position)));
		Ok(hits)
	}

	fn len(&self) -> usize { self.num_docs }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn stored(fields: &DocFields, category: Option<&str>) -> TantivyDocument {
		let mut d = doc!(
			fields.title => "Button",
			fields.content => "clickable",
			fields.link => "/button",
			fields.doc_type => "html",
			fields.section => "Usage",
			fields.position => 0u64,
		);
		if let Some(category) = category {
			d.add_text(fields.category, category);
		}
		d
	}

	#[test]
	fn stored_entry_round_trips() {
		let fields = DocFields::from_schema(&build_schema()).unwrap();
		let (position, document) = fields.document_from(&stored(&fields, Some("components"))).unwrap();
		assert_eq!(position, 0);
		assert_eq!(document.category, Category::Components);
		assert_eq!(document.doc_type, "html");
	}

	#[test]
	fn missing_category_is_a_predicate_error() {
		let fields = DocFields::from_schema(&build_schema()).unwrap();
		assert!(matches!(fields.document_from(&stored(&fields, None)), Err(Error::QueryPredicate(_))));
	}

	#[test]
	fn unknown_category_is_a_predicate_error() {
		let fields = DocFields::from_schema(&build_schema()).unwrap();
		assert!(matches!(fields.document_from(&stored(&fields, Some("recipes"))), Err(Error::QueryPredicate(_))));
	}
}
