//! BM25 statistics accumulated over an ingested corpus

use std::collections::{HashMap, HashSet};

/// Per-term document frequencies and per-document lengths, with BM25
/// scoring over them. Append-only: documents are never removed.
#[derive(Debug, Clone)]
pub struct LexicalStats {
    k1: f64,
    b: f64,
    document_frequency: HashMap<String, usize>,
    document_lengths: Vec<usize>,
    // Running total so the average never needs a rescan
    total_length: usize,
    average_document_length: f64,
}

impl LexicalStats {
    pub fn new(k1: f64, b: f64) -> Self {
        Self {
            k1,
            b,
            document_frequency: HashMap::new(),
            document_lengths: Vec::new(),
            total_length: 0,
            average_document_length: 0.0,
        }
    }

    pub fn total_documents(&self) -> usize {
        self.document_lengths.len()
    }

    pub fn average_document_length(&self) -> f64 {
        self.average_document_length
    }

    pub fn distinct_terms(&self) -> usize {
        self.document_frequency.len()
    }

    /// Record one document's terms. Document frequency counts each distinct
    /// term once per document, not once per occurrence.
    pub fn ingest(&mut self, terms: &[String]) {
        self.document_lengths.push(terms.len());
        self.total_length += terms.len();

        let unique: HashSet<&String> = terms.iter().collect();
        for term in unique {
            *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
        }

        self.average_document_length =
            self.total_length as f64 / self.document_lengths.len() as f64;
    }

    /// BM25 score of `document` against `query`. Zero before any ingestion;
    /// query terms absent from the corpus contribute nothing.
    pub fn score(&self, query: &[String], document: &[String]) -> f64 {
        let total = self.total_documents();
        if total == 0 {
            return 0.0;
        }

        let mut term_frequencies: HashMap<&str, usize> = HashMap::new();
        for term in document {
            *term_frequencies.entry(term.as_str()).or_insert(0) += 1;
        }

        let mut score = 0.0;
        let distinct_query: HashSet<&String> = query.iter().collect();

        for term in distinct_query {
            let df = self
                .document_frequency
                .get(term.as_str())
                .copied()
                .unwrap_or(0);
            if df == 0 {
                continue;
            }

            let tf = term_frequencies.get(term.as_str()).copied().unwrap_or(0) as f64;

            // RSJ idf with +1 smoothing, non-negative by construction
            let idf = ((total as f64 - df as f64 + 0.5) / (df as f64 + 0.5) + 1.0).ln();
            let numerator = tf * (self.k1 + 1.0);
            let denominator = tf
                + self.k1
                    * (1.0 - self.b
                        + self.b * document.len() as f64 / self.average_document_length);

            score += idf * (numerator / denominator);
        }

        score
    }
}
