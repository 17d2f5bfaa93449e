//! Query construction: prefix-tolerant terms OR-ed across title and content,
//! re-ranked by a boosted type clause.

use tantivy::query::{BooleanQuery, BoostQuery, Occur, Query, RegexQuery, TermQuery};
use tantivy::schema::{Field, IndexRecordOption};
use tantivy::tokenizer::{TextAnalyzer, TokenStream};
use tantivy::Term;

use docsearch_core::types::SearchOptions;

#[derive(Debug, Clone, Copy)]
pub struct QueryFields {
	pub title: Field,
	pub content: Field,
	pub doc_type: Field,
}

/// Distinct terms of `text` in order of first appearance.
pub fn analyze(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
	let mut terms: Vec<String> = Vec::new();
	let mut stream = analyzer.token_stream(text);
	while stream.advance() {
		let token = &stream.token().text;
		if !terms.contains(token) { terms.push(token.clone()); }
	}
	terms
}

/// Title and content decide membership: a document matches if any term hits
/// either field. The boosted type clause only adds score to those matches.
pub fn build_query(terms: &[String], fields: &QueryFields, options: &SearchOptions) -> tantivy::Result<Box<dyn Query>> {
	let mut text_clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
	let mut type_clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
	for term in terms {
		text_clauses.push((Occur::Should, term_query(fields.title, term, options.prefix)?));
		text_clauses.push((Occur::Should, term_query(fields.content, term, options.prefix)?));
		let boosted = BoostQuery::new(term_query(fields.doc_type, term, options.prefix)?, options.type_boost);
		type_clauses.push((Occur::Should, Box::new(boosted)));
	}
	let text_match: Box<dyn Query> = Box::new(BooleanQuery::new(text_clauses));
	let mut clauses = vec![(Occur::Must, text_match)];
	clauses.extend(type_clauses);
	Ok(Box::new(BooleanQuery::new(clauses)))
}

// Exact match scores by frequency; the prefix branch adds a flat score so whole
// words rank above completions.
fn term_query(field: Field, term: &str, prefix: bool) -> tantivy::Result<Box<dyn Query>> {
	let exact: Box<dyn Query> = Box::new(TermQuery::new(Term::from_field_text(field, term), IndexRecordOption::WithFreqs));
	if !prefix { return Ok(exact); }
	let completion = RegexQuery::from_pattern(&format!("{}.*", escape_regex(term)), field)?;
	Ok(Box::new(BooleanQuery::new(vec![(Occur::Should, exact), (Occur::Should, Box::new(completion) as Box<dyn Query>)])))
}

fn escape_regex(term: &str) -> String {
	let mut escaped = String::with_capacity(term.len());
	for c in term.chars() {
		if "\\.+*?()|[]{}^$#&-~".contains(c) { escaped.push('\\'); }
		escaped.push(c);
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use tantivy::tokenizer::{LowerCaser, SimpleTokenizer};

	#[test]
	fn analyze_lowercases_and_dedups() {
		let mut analyzer = TextAnalyzer::builder(SimpleTokenizer::default()).filter(LowerCaser).build();
		assert_eq!(analyze(&mut analyzer, "Date date-Picker!"), vec!["date", "picker"]);
		assert!(analyze(&mut analyzer, " ,. ").is_empty());
	}

	#[test]
	fn regex_metacharacters_are_escaped() {
		assert_eq!(escape_regex("a.b"), "a\\.b");
		assert_eq!(escape_regex("plain"), "plain");
	}
}
