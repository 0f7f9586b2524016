//! Convert a PDF paper to a sibling text file

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pdf;

pub fn run<P: AsRef<Path>>(file: P) -> Result<PathBuf> {
    println!("Reading {}...", file.as_ref().display());
    let output = pdf::convert(file)?;
    println!("✅ Success! Saved to {}", output.display());
    Ok(output)
}
