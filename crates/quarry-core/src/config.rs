//! Configuration for hybrid retrieval

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Weights applied when combining lexical and semantic scores.
///
/// The 0.8/0.2 split is a design constant of the ranking formula; changing
/// it changes ranking behavior, so the defaults are the contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    pub lexical: f64,
    pub semantic: f64,
}

impl BlendWeights {
    pub fn new() -> Self {
        Self {
            lexical: 0.8,
            semantic: 0.2,
        }
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Retrieval engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Hashed vocabulary size (token ids live in [0, vocab_size))
    pub vocab_size: usize,

    /// Embedding vector dimension
    pub embedding_dim: usize,

    /// BM25 term-frequency saturation
    pub k1: f64,

    /// BM25 length normalization
    pub b: f64,

    /// Results returned per query
    pub top_k: usize,

    /// Minimum combined score for a confident answer
    pub confidence_threshold: f64,

    /// Lexical/semantic blend weights
    pub blend: BlendWeights,
}

impl RetrievalConfig {
    pub fn new() -> Self {
        Self {
            vocab_size: 1000,
            embedding_dim: 128,
            k1: 1.5,
            b: 0.75,
            top_k: 1,
            confidence_threshold: 0.1,
            blend: BlendWeights::new(),
        }
    }

    /// Reject structurally unusable parameters before anything is built.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_size == 0 {
            return Err(Error::InvalidConfiguration(
                "vocab_size must be positive".to_string(),
            ));
        }
        if self.embedding_dim == 0 {
            return Err(Error::InvalidConfiguration(
                "embedding_dim must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self::new()
    }
}
