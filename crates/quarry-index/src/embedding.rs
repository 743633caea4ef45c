//! Fixed random embedding table

use quarry_core::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `vocab_size` rows of `embedding_dim` values, drawn once at construction
/// from a uniform Glorot-style bound and never mutated afterward. Lookup is
/// total: any integer id wraps into the table.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    vocab_size: usize,
    embedding_dim: usize,
    rows: Vec<Vec<f64>>,
}

impl EmbeddingTable {
    pub fn new(vocab_size: usize, embedding_dim: usize) -> Result<Self> {
        Self::with_rng(vocab_size, embedding_dim, &mut rand::thread_rng())
    }

    /// Reproducible table for a fixed seed.
    pub fn seeded(vocab_size: usize, embedding_dim: usize, seed: u64) -> Result<Self> {
        Self::with_rng(vocab_size, embedding_dim, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng>(vocab_size: usize, embedding_dim: usize, rng: &mut R) -> Result<Self> {
        if vocab_size == 0 || embedding_dim == 0 {
            return Err(Error::InvalidConfiguration(
                "vocab size and embedding dimension must be positive".to_string(),
            ));
        }

        let bound = (6.0 / (vocab_size + embedding_dim) as f64).sqrt();
        let rows = (0..vocab_size)
            .map(|_| (0..embedding_dim).map(|_| rng.gen_range(-bound..bound)).collect())
            .collect();

        Ok(Self {
            vocab_size,
            embedding_dim,
            rows,
        })
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Row for any id, negative or out of range; wraps via modulo.
    pub fn lookup(&self, id: i64) -> &[f64] {
        let row = (id.unsigned_abs() % self.vocab_size as u64) as usize;
        &self.rows[row]
    }
}
