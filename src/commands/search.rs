//! Single-term connection search in one brain file

use std::path::Path;

use tracing::info;

use crate::brain::{find_connections, load_file};
use crate::error::Result;

/// Search `file` for `term` and print every connection.
///
/// Returns the printed lines. A missing or malformed file is an error.
pub fn run<P: AsRef<Path>>(term: &str, file: P) -> Result<Vec<String>> {
    let file = file.as_ref();
    let term = term.to_lowercase();

    println!("🔍 Searching for '{}' in {}...\n", term, file.display());

    let facts = load_file(file)?;
    info!("Loaded {} facts from {}", facts.len(), file.display());

    let lines: Vec<String> = find_connections(&facts, &term)
        .into_iter()
        .map(|fact| fact.arrow())
        .collect();

    if lines.is_empty() {
        println!("❌ No connections found.");
    }
    for line in &lines {
        println!("  ⭐ {}", line);
    }

    Ok(lines)
}
