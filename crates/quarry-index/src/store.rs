//! Document index combining BM25 and embedding similarity

use crate::bm25::LexicalStats;
use crate::embedding::EmbeddingTable;
use crate::tokenizer::Tokenizer;
use quarry_core::{BlendWeights, RetrievalConfig, Result};
use serde::Serialize;
use tracing::debug;

/// One ranked retrieval result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Position of the document in corpus order
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Owns the corpus together with the per-document caches both scorers need:
/// word tokens for BM25 and summed embedding vectors for cosine similarity.
/// Immutable once built; every query is a read-only scan.
pub struct DocumentIndex {
    documents: Vec<String>,
    document_tokens: Vec<Vec<String>>,
    document_embeddings: Vec<Vec<f64>>,
    lexical: LexicalStats,
    table: EmbeddingTable,
    tokenizer: Tokenizer,
    blend: BlendWeights,
}

impl DocumentIndex {
    /// Index every document in corpus order. Word tokens feed the lexical
    /// statistics; id tokens are looked up and summed (not averaged — the
    /// aggregate scales with document length, cosine normalizes it away).
    pub fn build(
        documents: Vec<String>,
        tokenizer: Tokenizer,
        table: EmbeddingTable,
        config: &RetrievalConfig,
    ) -> Self {
        let mut lexical = LexicalStats::new(config.k1, config.b);
        let mut document_tokens = Vec::with_capacity(documents.len());
        let mut document_embeddings = Vec::with_capacity(documents.len());

        for document in &documents {
            let words = tokenizer.to_words(document);
            lexical.ingest(&words);
            document_tokens.push(words);
            document_embeddings.push(aggregate_embedding(&tokenizer, &table, document));
        }

        debug!(
            documents = documents.len(),
            avg_len = lexical.average_document_length(),
            "document index built"
        );

        Self {
            documents,
            document_tokens,
            document_embeddings,
            lexical,
            table,
            tokenizer,
            blend: config.blend,
        }
    }

    /// Construct tokenizer and embedding table from the config and build.
    /// A seed makes the embedding table (and thus scores) reproducible.
    pub fn from_config(
        documents: Vec<String>,
        config: &RetrievalConfig,
        seed: Option<u64>,
    ) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(config.vocab_size)?;
        let table = match seed {
            Some(seed) => EmbeddingTable::seeded(config.vocab_size, config.embedding_dim, seed)?,
            None => EmbeddingTable::new(config.vocab_size, config.embedding_dim)?,
        };
        Ok(Self::build(documents, tokenizer, table, config))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn lexical(&self) -> &LexicalStats {
        &self.lexical
    }

    /// BM25 sub-score of the document at `index` against a raw query.
    pub fn lexical_score(&self, query: &str, index: usize) -> f64 {
        let query_words = self.tokenizer.to_words(query);
        self.lexical.score(&query_words, &self.document_tokens[index])
    }

    /// Ranked top-k documents for a free-text query, descending by the
    /// blended score. Ties keep corpus order (stable sort). Empty index
    /// yields an empty result.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        let query_words = self.tokenizer.to_words(query);
        let query_embedding = aggregate_embedding(&self.tokenizer, &self.table, query);

        let mut hits: Vec<SearchHit> = self
            .documents
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let lexical = self.lexical.score(&query_words, &self.document_tokens[index]);
                let semantic =
                    cosine_similarity(&query_embedding, &self.document_embeddings[index]);
                SearchHit {
                    index,
                    text: text.clone(),
                    score: self.blend.lexical * lexical + self.blend.semantic * semantic,
                }
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_k);

        debug!(query_terms = query_words.len(), returned = hits.len(), "retrieve");
        hits
    }
}

/// Element-wise sum of the embedding rows for a text's token ids. A text
/// with no recognized tokens yields the zero vector.
fn aggregate_embedding(tokenizer: &Tokenizer, table: &EmbeddingTable, text: &str) -> Vec<f64> {
    let mut aggregate = vec![0.0; table.embedding_dim()];
    for id in tokenizer.to_ids(text) {
        for (slot, value) in aggregate.iter_mut().zip(table.lookup(id as i64)) {
            *slot += value;
        }
    }
    aggregate
}

/// Cosine similarity, 0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
