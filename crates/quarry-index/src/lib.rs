//! Hybrid lexical/semantic retrieval over an in-memory corpus

mod bm25;
mod embedding;
mod store;
mod tokenizer;

pub use bm25::LexicalStats;
pub use embedding::EmbeddingTable;
pub use store::{cosine_similarity, DocumentIndex, SearchHit};
pub use tokenizer::{term_id, Tokenizer};
