use quarry_core::RetrievalConfig;
use std::path::Path;

pub fn run(corpus: &Path, config: &RetrievalConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let index = super::build_index(corpus, config, seed)?;
    let lexical = index.lexical();

    let output = serde_json::json!({
        "documents": lexical.total_documents(),
        "average_document_length": lexical.average_document_length(),
        "distinct_terms": lexical.distinct_terms(),
        "vocab_size": config.vocab_size,
        "embedding_dim": config.embedding_dim,
    });

    println!("{output}");
    Ok(())
}
