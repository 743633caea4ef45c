//! Line-delimited corpus loading

use anyhow::Context;
use std::path::Path;

/// One document per line, in file order; lines are trimmed and blank
/// lines dropped.
pub fn load(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading corpus {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_preserves_order_and_skips_blanks() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("data.txt");
        std::fs::write(&path, "first document\n\n  second document  \n\nthird\n").unwrap();

        let documents = load(&path).unwrap();
        assert_eq!(documents, vec!["first document", "second document", "third"]);
    }

    #[test]
    fn test_load_empty_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("does-not-exist.txt");
        assert!(load(&path).is_err());
    }
}
