//! Chat answer policy over a built index

use quarry_index::DocumentIndex;

const NO_KNOWLEDGE: &str =
    "I'm sorry, I don't have enough information to answer that question.";
const LOW_CONFIDENCE: &str =
    "I'm not quite sure about that. Could you please rephrase your question?";

pub struct Responder {
    index: DocumentIndex,
    confidence_threshold: f64,
}

impl Responder {
    pub fn new(index: DocumentIndex, confidence_threshold: f64) -> Self {
        Self {
            index,
            confidence_threshold,
        }
    }

    /// Best-matching document text, or a fallback message when the corpus
    /// is empty or the best combined score is below the threshold.
    pub fn respond(&self, input: &str) -> String {
        let hits = self.index.retrieve(input, 1);
        match hits.first() {
            None => NO_KNOWLEDGE.to_string(),
            Some(hit) if hit.score < self.confidence_threshold => LOW_CONFIDENCE.to_string(),
            Some(hit) => hit.text.clone(),
        }
    }
}
