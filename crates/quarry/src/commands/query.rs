use quarry_core::RetrievalConfig;
use std::path::Path;

pub fn run(
    corpus: &Path,
    query: &str,
    top_k: Option<usize>,
    json: bool,
    config: &RetrievalConfig,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let index = super::build_index(corpus, config, seed)?;
    let hits = index.retrieve(query, top_k.unwrap_or(config.top_k));

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("no matches");
    } else {
        for hit in &hits {
            println!("{:>8.4}  {}", hit.score, hit.text);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_runs_end_to_end() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("data.txt");
        std::fs::write(&path, "rust is a systems language\npython is dynamic\n").unwrap();

        let config = RetrievalConfig::default();
        let result = run(&path, "rust systems", Some(2), false, &config, Some(42));
        assert!(result.is_ok());
    }

    #[test]
    fn test_query_missing_corpus_errors() {
        let config = RetrievalConfig::default();
        let result = run(
            Path::new("/nonexistent/data.txt"),
            "rust",
            None,
            false,
            &config,
            None,
        );
        assert!(result.is_err());
    }
}
