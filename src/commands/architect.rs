//! Curriculum architect command

use std::path::Path;

use serde_json::Value;

use crate::architect::{save_blueprint, Architect};
use crate::brain::load_brain;
use crate::commands::ask::client_from_config;
use crate::config::Config;
use crate::error::Result;
use crate::integrations::GeminiClient;

pub async fn run(task: &str, robot: &str, output: &Path) -> Result<()> {
    let config = Config::load()?;
    let client = client_from_config(&config)?;

    let blueprint = design_and_save(&config, client, task, robot, output).await?;

    let rule = "-".repeat(50);
    println!("\n✅ CURRICULUM ARCHITECTED. Saved to {}", output.display());
    println!("{}", rule);
    println!("{}", serde_json::to_string_pretty(&blueprint)?);
    println!("{}", rule);
    Ok(())
}

/// Load the brain, design the blueprint and write it to `output`.
pub async fn design_and_save(
    config: &Config,
    client: GeminiClient,
    task: &str,
    robot: &str,
    output: &Path,
) -> Result<Value> {
    let graph = load_brain(&config.brain_files)?;

    let blueprint = Architect::new(client)
        .with_stop_words(config.stop_words.clone())
        .with_max_facts(config.max_architect_facts)
        .design(&graph, task, robot)
        .await?;

    save_blueprint(output, &blueprint)?;
    Ok(blueprint)
}
