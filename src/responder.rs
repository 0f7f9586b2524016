//! Grounded answers: retrieved facts + question → Gemini.

use tracing::info;

use crate::config::DEFAULT_MAX_ANSWER_FACTS;
use crate::integrations::GeminiClient;
use crate::prompts::{render, Prompt};
use crate::Result;

/// Build the answer prompt from at most `max_facts` fact sentences.
pub fn render_answer_prompt(facts: &[String], question: &str, max_facts: usize) -> String {
    let context = facts
        .iter()
        .take(max_facts)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    render(
        &Prompt::Answer.template(),
        &[("context", context.as_str()), ("question", question)],
    )
}

pub struct Responder {
    client: GeminiClient,
    max_facts: usize,
}

impl Responder {
    pub fn new(client: GeminiClient, max_facts: usize) -> Self {
        Self { client, max_facts }
    }

    /// Ask the model; API errors propagate without retry.
    pub async fn answer(&self, facts: &[String], question: &str) -> Result<String> {
        let used = facts.len().min(self.max_facts);
        info!(
            "Asking {} with {} of {} facts",
            self.client.model(),
            used,
            facts.len()
        );

        let prompt = render_answer_prompt(facts, question, self.max_facts);
        self.client.generate(&prompt).await
    }
}

impl From<GeminiClient> for Responder {
    fn from(client: GeminiClient) -> Self {
        Self::new(client, DEFAULT_MAX_ANSWER_FACTS)
    }
}
