//! Curriculum architect: grounded training-pack blueprints.
//!
//! Retrieves physics facts from the brain, asks Gemini for a JSON dataset
//! blueprint and saves it to disk.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{info, warn};

use crate::brain::{KnowledgeGraph, StopWords};
use crate::config::DEFAULT_MAX_ARCHITECT_FACTS;
use crate::integrations::GeminiClient;
use crate::prompts::{render, Prompt};
use crate::{Error, Result};

pub const DEFAULT_TASK: &str = "Manipulate liquid container with shock wave potential";
pub const DEFAULT_ROBOT: &str = "Frank Emika Panda";
pub const DEFAULT_OUTPUT: &str = "grounded_training_pack.json";

/// Primary query, then the broader fallback.
pub const CONSTRAINT_QUERIES: &[&str] = &["physics failure simulation", "dataset simulation"];

pub const NO_KNOWLEDGE: &str = "No internal knowledge available.";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").expect("valid fence regex"));

/// Remove Markdown code fences and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Context block for the blueprint prompt.
///
/// Returns the joined facts and the number of matches found before truncation.
pub fn gather_context(
    graph: &KnowledgeGraph,
    stop_words: &StopWords,
    max_facts: usize,
) -> (String, usize) {
    if graph.is_empty() {
        return (NO_KNOWLEDGE.to_string(), 0);
    }

    info!("Scanning knowledge graph for physics constraints...");
    let mut results = Vec::new();
    for query in CONSTRAINT_QUERIES {
        results = graph.search(query, stop_words);
        if !results.is_empty() {
            break;
        }
    }

    let found = results.len();
    info!("Found {} relevant insights", found);
    results.truncate(max_facts);
    (results.join("\n"), found)
}

pub struct Architect {
    client: GeminiClient,
    stop_words: StopWords,
    max_facts: usize,
}

impl Architect {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            stop_words: StopWords::default(),
            max_facts: DEFAULT_MAX_ARCHITECT_FACTS,
        }
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_max_facts(mut self, max_facts: usize) -> Self {
        self.max_facts = max_facts;
        self
    }

    /// Design a training pack for `task` on `robot`, grounded on `graph`.
    pub async fn design(&self, graph: &KnowledgeGraph, task: &str, robot: &str) -> Result<Value> {
        info!("Searching internal knowledge for '{}'", task);
        let (context, _) = gather_context(graph, &self.stop_words, self.max_facts);

        info!("Architecting the training pack...");
        let prompt = render(
            &Prompt::Blueprint.template(),
            &[
                ("context", context.as_str()),
                ("task", task),
                ("robot", robot),
            ],
        );

        let reply = self.client.generate(&prompt).await?;
        let cleaned = strip_code_fences(&reply);

        serde_json::from_str(&cleaned).map_err(|e| {
            warn!("Model reply is not valid JSON");
            Error::SerializationError(format!("blueprint is not valid JSON: {}", e))
        })
    }
}

/// Write the blueprint as pretty JSON.
pub fn save_blueprint<P: AsRef<Path>>(path: P, blueprint: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(blueprint)?;
    fs::write(path.as_ref(), text)?;
    info!("Blueprint saved to {}", path.as_ref().display());
    Ok(())
}
