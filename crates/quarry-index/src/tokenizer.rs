//! Text normalization and bounded term hashing

use quarry_core::{Error, Result};

/// Splits text into normalized word tokens and maps words into a bounded
/// integer id space via a wrapping polynomial hash. Stateless beyond the
/// fixed vocabulary size; safe to share freely.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vocab_size: usize,
}

impl Tokenizer {
    pub fn new(vocab_size: usize) -> Result<Self> {
        if vocab_size == 0 {
            return Err(Error::InvalidConfiguration(
                "vocab size must be positive".to_string(),
            ));
        }
        Ok(Self { vocab_size })
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Normalized word tokens: lowercased, punctuation other than hyphen
    /// stripped, whitespace-split, empty fragments dropped.
    pub fn to_words(&self, text: &str) -> Vec<String> {
        normalize(text)
    }

    /// Word tokens folded into [0, vocab_size). Distinct words may collide.
    pub fn to_ids(&self, text: &str) -> Vec<usize> {
        normalize(text)
            .iter()
            .map(|word| term_id(word, self.vocab_size))
            .collect()
    }

    /// Debug rendering of an id sequence as placeholder tokens.
    pub fn detokenize(&self, ids: &[usize]) -> String {
        ids.iter()
            .map(|id| format!("<token_{}>", id % self.vocab_size))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .map(|fragment| fragment.to_string())
        .collect()
}

/// 32-bit wrapping polynomial hash (`h = h*31 + char`) folded into the
/// vocabulary range. `unsigned_abs` keeps the fold total at `i32::MIN`,
/// where a signed `abs` would overflow.
pub fn term_id(term: &str, vocab_size: usize) -> usize {
    let mut hash: i32 = 0;
    for c in term.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs() as usize % vocab_size
}
