use crate::responder::Responder;
use quarry_core::RetrievalConfig;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn run(corpus: &Path, config: &RetrievalConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let index = super::build_index(corpus, config, seed)?;
    println!("Loaded {} documents. Ask a question (Ctrl-D to quit).", index.len());

    let responder = Responder::new(index, config.confidence_threshold);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        println!("{}", responder.respond(input));
    }

    Ok(())
}
