//! Loads the generated search corpus: a JSON array of documents, either in a
//! single file or split across `*.json` shards in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::Document;

pub struct CorpusLoader {
    extension: String,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self { extension: "json".to_string() }
    }
}

impl CorpusLoader {
    pub fn new() -> Self { Self::default() }

    pub fn load(&self, path: &Path) -> Result<Vec<Document>> {
        let documents = if path.is_dir() {
            self.load_directory(path)?
        } else {
            let json = self.read_file(path)?;
            parse_corpus(&json, &path.display().to_string())?
        };
        if documents.is_empty() {
            return Err(Error::corpus_load(path.display().to_string(), "corpus contains no documents"));
        }
        info!(documents = documents.len(), source = %path.display(), "Loaded corpus");
        Ok(documents)
    }

    fn load_directory(&self, dir: &Path) -> Result<Vec<Document>> {
        let shards = self.list_shards(dir);
        if shards.is_empty() {
            return Err(Error::corpus_load(dir.display().to_string(), format!("no .{} files found", self.extension)));
        }
        let mut all = Vec::new();
        for (shard_index, shard) in shards.iter().enumerate() {
            debug!(shard = %shard.display(), "Reading corpus shard {}/{}", shard_index + 1, shards.len());
            let json = self.read_file(shard)?;
            all.extend(parse_corpus(&json, &shard.display().to_string())?);
        }
        Ok(all)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::corpus_load(path.display().to_string(), e.to_string()))
    }

    fn list_shards(&self, root: &Path) -> Vec<PathBuf> {
        let mut shards: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some(self.extension.as_str()))
            .map(|e| e.path().to_path_buf())
            .collect();
        shards.sort();
        shards
    }
}

/// Parse one JSON array of documents. `source` only labels errors.
pub fn parse_corpus(json: &str, source: &str) -> Result<Vec<Document>> {
    serde_json::from_str(json).map_err(|e| Error::corpus_load(source, e.to_string()))
}
