//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + `DOCSEARCH_*` env vars (`__` separates nested keys, e.g.
//! `DOCSEARCH_PAGING__DEFAULT_PAGE_SIZE=10`). Provides helpers to expand `~`
//! and `${VAR}` and to resolve relative paths against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::facets::{FilterState, DEFAULT_TYPES};
use crate::paginator::PageSize;
use crate::types::{Category, SearchOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub corpus: CorpusSettings,
    pub search: SearchOptions,
    pub paging: PagingSettings,
    pub facets: FacetSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    pub path: String,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self { path: "test_data/search.json".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingSettings {
    pub default_page_size: usize,
}

impl Default for PagingSettings {
    fn default() -> Self {
        Self { default_page_size: PageSize::default().get() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSettings {
    pub categories: Vec<String>,
    pub types: Vec<String>,
}

impl Default for FacetSettings {
    fn default() -> Self {
        Self {
            categories: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        self.page_size()?;
        for name in &self.facets.categories {
            name.parse::<Category>().map_err(|e| Error::InvalidConfig(e.to_string()))?;
        }
        if !(self.search.type_boost.is_finite() && self.search.type_boost > 0.0) {
            return Err(Error::InvalidConfig(format!("search.type_boost must be positive, got {}", self.search.type_boost)));
        }
        Ok(())
    }

    pub fn page_size(&self) -> Result<PageSize> {
        PageSize::try_from(self.paging.default_page_size)
            .map_err(|_| Error::InvalidConfig(format!("paging.default_page_size must be 5, 10 or 20, got {}", self.paging.default_page_size)))
    }

    /// Initial toggle state: configured categories on, configured types off.
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.facets.categories.iter().cloned(), self.facets.types.iter().cloned())
    }
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        let base = env::current_dir().map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Self::load_from(&base, &env_name)
    }

    pub fn load_from(base: &Path, env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file(base.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("DOCSEARCH_").split("__"));

        let config = Self { figment, base_dir: base.to_path_buf() };
        config.settings()?.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment.extract().map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Corpus location with `~`/`$VAR` expanded, relative to the config directory.
    pub fn corpus_path(&self) -> Result<PathBuf> {
        Ok(resolve_with_base(&self.base_dir, self.settings()?.corpus.path))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
