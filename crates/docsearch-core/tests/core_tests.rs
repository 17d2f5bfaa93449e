use std::fs;
use tempfile::TempDir;

use docsearch_core::config::Config;
use docsearch_core::corpus::{parse_corpus, CorpusLoader};
use docsearch_core::error::Error;
use docsearch_core::{Category, PageSize};

const TWO_DOCS: &str = r#"[
  {"id": 1, "title": "Button", "content": "A clickable button", "link": "/components/button", "category": "components", "type": "html", "section": "Overview"},
  {"id": 2, "title": "Guide to Forms", "content": "Form layout", "link": "/guides/forms", "category": "guides", "type": "Guides", "section": "Usage"}
]"#;

#[test]
fn load_single_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("search.json");
    fs::write(&path, TWO_DOCS).unwrap();

    let docs = CorpusLoader::new().load(&path).expect("load");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].category, Category::Components);
    assert_eq!(docs[1].doc_type, "Guides");
}

#[test]
fn load_directory_of_shards_in_path_order() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("b.json"), TWO_DOCS).unwrap();
    fs::write(
        tmp.path().join("a.json"),
        r#"[{"title": "Colors", "content": "palette", "link": "/styles/colors", "category": "styles", "type": "html", "section": "Overview"}]"#,
    )
    .unwrap();
    fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

    let docs = CorpusLoader::new().load(tmp.path()).expect("load dir");
    let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Colors", "Button", "Guide to Forms"]);
}

#[test]
fn empty_corpus_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("search.json");
    fs::write(&path, "[]").unwrap();
    assert!(matches!(CorpusLoader::new().load(&path), Err(Error::CorpusLoad { .. })));
    assert!(matches!(CorpusLoader::new().load(&tmp.path().join("missing.json")), Err(Error::CorpusLoad { .. })));
}

#[test]
fn malformed_documents_are_rejected() {
    let unknown_category = r#"[{"title": "X", "content": "", "link": "", "category": "recipes", "type": "html", "section": ""}]"#;
    assert!(matches!(parse_corpus(unknown_category, "inline"), Err(Error::CorpusLoad { .. })));
    let missing_type = r#"[{"title": "X", "content": "", "link": "", "category": "bits", "section": ""}]"#;
    assert!(matches!(parse_corpus(missing_type, "inline"), Err(Error::CorpusLoad { .. })));
}

#[test]
fn blank_titles_are_loaded() {
    let blank_title = r#"[{"title": " ", "content": "spacing tokens", "link": "", "category": "bits", "type": "ts", "section": ""}]"#;
    let docs = parse_corpus(blank_title, "inline").expect("blank title is not malformed");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].content, "spacing tokens");
}

#[test]
fn config_defaults_without_files() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(tmp.path(), "test").expect("config");
    let settings = config.settings().unwrap();
    assert_eq!(settings.page_size().unwrap(), PageSize::Five);
    assert!(settings.search.prefix);
    assert_eq!(settings.search.type_boost, 20.0);
    assert_eq!(settings.filter_state().active_categories().len(), 4);
    assert_eq!(config.corpus_path().unwrap(), tmp.path().join("test_data/search.json"));
}

#[test]
fn env_file_overrides_base_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[paging]\ndefault_page_size = 10\n\n[corpus]\npath = \"dist/search.json\"\n").unwrap();
    fs::write(tmp.path().join("config.test.toml"), "[paging]\ndefault_page_size = 20\n").unwrap();

    let config = Config::load_from(tmp.path(), "test").expect("config");
    assert_eq!(config.settings().unwrap().page_size().unwrap(), PageSize::Twenty);
    assert_eq!(config.get::<String>("corpus.path").unwrap(), "dist/search.json");

    let dev = Config::load_from(tmp.path(), "dev").expect("dev config");
    assert_eq!(dev.settings().unwrap().page_size().unwrap(), PageSize::Ten);
}

#[test]
fn unsupported_page_size_is_a_config_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[paging]\ndefault_page_size = 7\n").unwrap();
    assert!(matches!(Config::load_from(tmp.path(), "test"), Err(Error::InvalidConfig(_))));
}
