//! Simula CLI - main entry point
//!
//! `simula "How do I simulate fluids?"` answers from the knowledge graph;
//! the subcommands expose the other tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use simula::architect::{DEFAULT_OUTPUT, DEFAULT_ROBOT, DEFAULT_TASK};
use simula::{commands, Config};

#[derive(Parser)]
#[command(name = "simula")]
#[command(about = "Knowledge graph search with Gemini-grounded answers", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Question to answer from the knowledge graph
    question: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question using retrieved facts
    Ask {
        /// Question, e.g. "How do I simulate fluids?"
        question: String,
    },

    /// Find connections for a term in one brain file
    Search {
        /// Term matched against subjects and objects
        term: String,

        /// Brain file (defaults to the configured search file)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Extract a PDF into a sibling .txt file
    ConvertPdf {
        /// PDF file
        file: PathBuf,
    },

    /// Design a grounded training-pack blueprint
    Architect {
        #[arg(long, default_value = DEFAULT_TASK)]
        task: String,

        #[arg(long, default_value = DEFAULT_ROBOT)]
        robot: String,

        /// Output JSON file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("simula=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command = match (cli.command, cli.question) {
        (Some(command), _) => command,
        (None, Some(question)) => Commands::Ask { question },
        (None, None) => anyhow::bail!("a question or a subcommand is required"),
    };

    execute_command(command).await
}

async fn execute_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Ask { question } => {
            commands::ask::run(&question).await?;
        }
        Commands::Search { term, file } => {
            let file = file.unwrap_or_else(|| Config::new().search_file);
            commands::search::run(&term, &file)?;
        }
        Commands::ConvertPdf { file } => {
            commands::convert_pdf::run(&file)?;
        }
        Commands::Architect {
            task,
            robot,
            output,
        } => {
            commands::architect::run(&task, &robot, &output).await?;
        }
    }

    Ok(())
}
