pub fn run() -> anyhow::Result<()> {
    println!("quarry {}", env!("CARGO_PKG_VERSION"));
    println!("Hybrid BM25 + embedding retrieval over line-delimited corpora");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
