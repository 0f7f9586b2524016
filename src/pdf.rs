//! PDF → plain text conversion.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result};

/// Page separator emitted by `pdf-extract`.
const PAGE_BREAK: char = '\x0c';

/// Sibling `.txt` path: `papers/pinns.pdf` → `papers/pinns.txt`.
pub fn output_path<P: AsRef<Path>>(pdf: P) -> PathBuf {
    pdf.as_ref().with_extension("txt")
}

/// Each page followed by a newline; a trailing page break adds no empty page.
pub fn join_pages(raw: &str) -> String {
    let raw = raw.strip_suffix(PAGE_BREAK).unwrap_or(raw);
    let mut text = String::with_capacity(raw.len() + 16);
    for page in raw.split(PAGE_BREAK) {
        text.push_str(page);
        text.push('\n');
    }
    text
}

/// Extract the text of every page.
pub fn extract_text<P: AsRef<Path>>(pdf: P) -> Result<String> {
    let pdf = pdf.as_ref();
    if !pdf.exists() {
        return Err(Error::FileNotFound(pdf.display().to_string()));
    }

    let raw = pdf_extract::extract_text(pdf)
        .map_err(|e| Error::PdfError(format!("{}: {}", pdf.display(), e)))?;
    Ok(join_pages(&raw))
}

/// Extract `pdf` and write the text next to it. Returns the written path.
pub fn convert<P: AsRef<Path>>(pdf: P) -> Result<PathBuf> {
    let pdf = pdf.as_ref();
    info!("Reading {}...", pdf.display());

    let text = extract_text(pdf)?;
    let output = output_path(pdf);
    fs::write(&output, text)?;

    info!("Saved {}", output.display());
    Ok(output)
}
