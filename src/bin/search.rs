//! Find connections for a term in a brain file.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use simula::commands;
use simula::Config;

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Find connections for a term in a knowledge graph file")]
struct Cli {
    /// Term matched against subjects and objects
    term: String,

    /// Brain file (defaults to the configured search file)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("simula=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = cli.file.unwrap_or_else(|| Config::new().search_file);

    commands::search::run(&cli.term, &file)?;
    Ok(())
}
