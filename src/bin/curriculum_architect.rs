//! Design a grounded training-pack blueprint for a robot task.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use simula::architect::{DEFAULT_OUTPUT, DEFAULT_ROBOT, DEFAULT_TASK};
use simula::commands;

#[derive(Parser)]
#[command(name = "curriculum_architect")]
#[command(about = "Design a training pack grounded on the knowledge graph")]
struct Cli {
    /// Task the robot has to learn
    #[arg(long, default_value = DEFAULT_TASK)]
    task: String,

    /// Robot model
    #[arg(long, default_value = DEFAULT_ROBOT)]
    robot: String,

    /// Where to write the blueprint JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("simula=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::architect::run(&cli.task, &cli.robot, &cli.output).await?;
    Ok(())
}
