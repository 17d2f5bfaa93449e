use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load corpus from {source_path}: {reason}")]
    CorpusLoad { source_path: String, reason: String },

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Stored entry does not match the corpus schema: {0}")]
    QueryPredicate(String),

    #[error("Unknown {group} facet: {name}")]
    UnknownFacet { group: String, name: String },

    #[error("Query text must not be empty")]
    EmptyQuery,

    #[error("Search index failure: {0}")]
    Index(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn corpus_load(source_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorpusLoad { source_path: source_path.into(), reason: reason.into() }
    }

    /// Errors that leave the controller usable; everything else means the
    /// corpus or index cannot be trusted.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidPageRequest(_) | Self::UnknownFacet { .. } | Self::EmptyQuery)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
