use quarry_core::RetrievalConfig;
use quarry_index::DocumentIndex;

fn corpus_from_file(lines: &str) -> Vec<String> {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("data.txt");
    std::fs::write(&path, lines).unwrap();

    std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_corpus_file_to_ranked_results() {
    let documents = corpus_from_file(
        "Rust is a systems programming language\n\
         Python is a dynamic language\n\
         \n\
         Coffee is best brewed fresh\n",
    );
    assert_eq!(documents.len(), 3);

    let config = RetrievalConfig::new();
    let index = DocumentIndex::from_config(documents, &config, Some(42)).unwrap();

    // "systems programming" appears only in document 0; its lexical
    // sub-score must dominate regardless of the random embedding table
    let rust_score = index.lexical_score("systems programming", 0);
    for other in 1..index.len() {
        assert!(rust_score > index.lexical_score("systems programming", other));
    }

    let hits = index.retrieve("systems programming", 3);
    assert_eq!(hits.len(), 3);
    assert!(hits[0].score >= hits[1].score);
    assert!(hits[1].score >= hits[2].score);
}

#[test]
fn test_top_k_truncation() {
    let documents = corpus_from_file("only one document here\n");
    let config = RetrievalConfig::new();
    let index = DocumentIndex::from_config(documents, &config, Some(1)).unwrap();

    assert_eq!(index.retrieve("document", 2).len(), 1);
    assert_eq!(index.retrieve("document", 0).len(), 0);
}

#[test]
fn test_empty_corpus_never_errors() {
    let documents = corpus_from_file("\n\n\n");
    let config = RetrievalConfig::new();
    let index = DocumentIndex::from_config(documents, &config, None).unwrap();

    assert!(index.is_empty());
    assert!(index.retrieve("anything", 5).is_empty());
}

#[test]
fn test_statistics_reflect_corpus() {
    let documents = corpus_from_file("a b c\nd e\n");
    let config = RetrievalConfig::new();
    let index = DocumentIndex::from_config(documents, &config, Some(3)).unwrap();

    let lexical = index.lexical();
    assert_eq!(lexical.total_documents(), 2);
    assert_eq!(lexical.average_document_length(), 2.5);
    assert_eq!(lexical.distinct_terms(), 5);
}

#[test]
fn test_seeded_runs_reproducible() {
    let raw = "the cat sat\nthe dog ran\na bird flew away\n";
    let config = RetrievalConfig::new();

    let first = DocumentIndex::from_config(corpus_from_file(raw), &config, Some(9)).unwrap();
    let second = DocumentIndex::from_config(corpus_from_file(raw), &config, Some(9)).unwrap();

    assert_eq!(first.retrieve("cat", 3), second.retrieve("cat", 3));
}
