use tantivy::schema::{IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tantivy::Index;

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";
pub const LINK: &str = "link";
pub const CATEGORY: &str = "category";
pub const DOC_TYPE: &str = "type";
pub const SECTION: &str = "section";
pub const POSITION: &str = "position";

/// Analyzer for indexed text: lowercased, English stop words removed.
pub const TEXT_TOKENIZER: &str = "docs_text";
/// Analyzer for query text: lowercased only, so half-typed stop words still prefix-match.
pub const QUERY_TOKENIZER: &str = "docs_query";

const STOP_WORDS: &[&str] = &[
	"a","an","and","are","as","at","be","by","for","from","has","he","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
];

pub fn build_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	let text_field_indexing = TextFieldIndexing::default().set_tokenizer(TEXT_TOKENIZER).set_index_option(IndexRecordOption::WithFreqsAndPositions);
	let text_options = TextOptions::default().set_indexing_options(text_field_indexing).set_stored();
	let _title_field = schema_builder.add_text_field(TITLE, text_options.clone());
	let _content_field = schema_builder.add_text_field(CONTENT, text_options);
	// type only re-ranks title/content matches; tokenized like query text
	let type_indexing = TextFieldIndexing::default().set_tokenizer(QUERY_TOKENIZER).set_index_option(IndexRecordOption::WithFreqs);
	let _type_field = schema_builder.add_text_field(DOC_TYPE, TextOptions::default().set_indexing_options(type_indexing).set_stored());
	let _link_field = schema_builder.add_text_field(LINK, STORED);
	let _category_field = schema_builder.add_text_field(CATEGORY, STRING | STORED);
	let _section_field = schema_builder.add_text_field(SECTION, STORED);
	let _position_field = schema_builder.add_u64_field(POSITION, STORED);
	schema_builder.build()
}

pub fn register_tokenizers(index: &Index) {
	let text = TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(LowerCaser)
		.filter(StopWordFilter::remove(STOP_WORDS.iter().map(|s| s.to_string())))
		.build();
	index.tokenizers().register(TEXT_TOKENIZER, text);
	let query = TextAnalyzer::builder(SimpleTokenizer::default()).filter(LowerCaser).build();
	index.tokenizers().register(QUERY_TOKENIZER, query);
}
