//! Extract the text of a PDF into `<name>.txt`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use simula::commands;

#[derive(Parser)]
#[command(name = "convert_pdf")]
#[command(about = "Convert a PDF file to plain text")]
struct Cli {
    /// PDF file to convert
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("simula=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::convert_pdf::run(&cli.file)
        .with_context(|| format!("failed to convert {}", cli.file.display()))?;
    Ok(())
}
