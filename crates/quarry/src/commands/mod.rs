pub mod chat;
pub mod query;
pub mod stats;
pub mod version;

use anyhow::Context;
use quarry_core::RetrievalConfig;
use quarry_index::DocumentIndex;
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> anyhow::Result<RetrievalConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: RetrievalConfig = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(RetrievalConfig::default()),
    }
}

pub fn build_index(
    corpus: &Path,
    config: &RetrievalConfig,
    seed: Option<u64>,
) -> anyhow::Result<DocumentIndex> {
    let documents = crate::corpus::load(corpus)?;
    tracing::debug!(documents = documents.len(), "corpus loaded");
    Ok(DocumentIndex::from_config(documents, config, seed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults_when_omitted() {
        let config = load_config(None).unwrap();
        assert_eq!(config.vocab_size, 1000);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"vocab_size": 256, "top_k": 3}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.vocab_size, 256);
        assert_eq!(config.top_k, 3);
        // Untouched fields keep their defaults
        assert_eq!(config.embedding_dim, 128);
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"vocab_size": 0}"#).unwrap();
        assert!(load_config(Some(&path)).is_err());

        std::fs::write(&path, "not json").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_build_index_from_corpus_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("data.txt");
        std::fs::write(&path, "the cat sat\nthe dog ran\n").unwrap();

        let config = RetrievalConfig::default();
        let index = build_index(&path, &config, Some(1)).unwrap();
        assert_eq!(index.len(), 2);
    }
}
