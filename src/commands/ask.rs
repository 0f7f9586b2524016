//! Ask a question: load the brain, retrieve facts, answer with Gemini

use tracing::info;

use crate::brain::load_brain;
use crate::config::Config;
use crate::error::Result;
use crate::integrations::GeminiClient;
use crate::responder::Responder;

/// Printed when retrieval finds nothing.
pub const NO_DATA_MESSAGE: &str = "I searched my memory, but found no specific data on that.";

/// Build a Gemini client with the configured model and generation settings.
pub fn client_from_config(config: &Config) -> Result<GeminiClient> {
    Ok(GeminiClient::from_env()?
        .with_model(&config.gemini_model)
        .with_generation(config.temperature, config.max_output_tokens))
}

pub async fn run(question: &str) -> Result<()> {
    let config = Config::load()?;
    let client = client_from_config(&config)?;

    if let Some(answer) = answer_question(&config, client, question).await? {
        let rule = "=".repeat(50);
        println!("\n{}\n{}\n{}\n", rule, answer, rule);
    } else {
        println!("❌ {}", NO_DATA_MESSAGE);
    }
    Ok(())
}

/// Answer `question`, or `None` when no fact matched (no API call is made).
pub async fn answer_question(
    config: &Config,
    client: GeminiClient,
    question: &str,
) -> Result<Option<String>> {
    let graph = load_brain(&config.brain_files)?;

    println!("🤔 Thinking about: '{}'...", question);
    let facts = graph.search(question, &config.stop_words);
    if facts.is_empty() {
        info!("No facts matched '{}'", question);
        return Ok(None);
    }

    println!("🔍 Retrieved {} data points.", facts.len());

    let responder = Responder::new(client, config.max_answer_facts);
    let answer = responder.answer(&facts, question).await?;
    Ok(Some(answer))
}
