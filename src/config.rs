//! Configuration for brain files, retrieval limits and the Gemini model
//!
//! Loads configuration from config.yml file

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::brain::StopWords;
use crate::{Error, Result};

/// Default constants (fallback if config.yml not found)
pub const DEFAULT_BRAIN_FILES: &[&str] = &["pinns_brain.json", "the_well_brain.json"];
pub const DEFAULT_SEARCH_FILE: &str = "the_well_brain.json";
pub const DEFAULT_MAX_ANSWER_FACTS: usize = 50;
pub const DEFAULT_MAX_ARCHITECT_FACTS: usize = 15;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";

/// Files searched, in order, when SIMULA_CONFIG is unset
pub const CONFIG_CANDIDATES: &[&str] = &["config.yml", "../config.yml"];

/// YAML config structures
#[derive(Debug, Default, Deserialize)]
struct YamlConfig {
    brain: Option<BrainConfig>,
    retrieval: Option<RetrievalConfig>,
    gemini: Option<GeminiConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct BrainConfig {
    files: Option<Vec<String>>,
    search_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RetrievalConfig {
    stop_words: Option<Vec<String>>,
    max_answer_facts: Option<usize>,
    max_architect_facts: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiConfig {
    model: Option<String>,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub brain_files: Vec<PathBuf>,
    pub search_file: PathBuf,
    pub stop_words: StopWords,
    pub max_answer_facts: usize,
    pub max_architect_facts: usize,
    pub gemini_model: String,
    /// Unset means the API default
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Like [`Config::load`], but falls back to defaults with a warning
    pub fn new() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Using default configuration: {}", e);
            Self::defaults().with_env_overrides()
        })
    }

    /// Load configuration from $SIMULA_CONFIG, config.yml or use defaults
    /// Environment variables take precedence over config.yml values
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("SIMULA_CONFIG") {
            return Self::load_from_file(&path);
        }

        Ok(Self::load_first(CONFIG_CANDIDATES)?
            .unwrap_or_else(|| Self::defaults().with_env_overrides()))
    }

    /// Load the first candidate file that exists.
    /// Only a missing file moves on to the next one; unreadable or malformed files are errors.
    pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Result<Option<Self>> {
        Self::load_dotenv();

        for path in candidates {
            let path = path.as_ref();
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(Error::ConfigError(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    )))
                }
            };

            return Self::from_yaml_str(&content)
                .map(Some)
                .map_err(|e| match e {
                    Error::ConfigError(msg) => {
                        Error::ConfigError(format!("{}: {}", path.display(), msg))
                    }
                    other => other,
                });
        }

        Ok(None)
    }

    /// Resolve a value: prefer env var if config value looks like ${VAR}
    fn resolve_env_string(value: Option<String>, env_key: &str) -> Option<String> {
        if let Some(ref v) = value {
            if v.starts_with("${") && v.ends_with('}') {
                let var_name = &v[2..v.len() - 1];
                if let Ok(env_val) = std::env::var(var_name) {
                    return Some(env_val);
                }
            }
        }
        if let Ok(env_val) = std::env::var(env_key) {
            if !env_val.trim().is_empty() {
                return Some(env_val);
            }
        }
        value
    }

    /// Load .env file into environment variables using dotenvy
    fn load_dotenv() {
        if dotenvy::dotenv().is_err() {
            let _ = dotenvy::from_filename("../.env");
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_dotenv();

        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_yaml_str(&content)
    }

    /// Build configuration from YAML text, then apply env overrides
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping.
        let yaml: YamlConfig = if content.trim().is_empty() {
            YamlConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };

        let brain = yaml.brain.unwrap_or_default();
        let retrieval = yaml.retrieval.unwrap_or_default();
        let gemini = yaml.gemini.unwrap_or_default();
        let defaults = Self::defaults();

        let config = Self {
            brain_files: brain
                .files
                .map(|files| files.into_iter().map(PathBuf::from).collect())
                .unwrap_or(defaults.brain_files),
            search_file: brain
                .search_file
                .map(PathBuf::from)
                .unwrap_or(defaults.search_file),
            stop_words: retrieval
                .stop_words
                .map(|words| words.into_iter().collect())
                .unwrap_or(defaults.stop_words),
            max_answer_facts: retrieval
                .max_answer_facts
                .unwrap_or(defaults.max_answer_facts),
            max_architect_facts: retrieval
                .max_architect_facts
                .unwrap_or(defaults.max_architect_facts),
            gemini_model: gemini.model.unwrap_or(defaults.gemini_model),
            temperature: gemini.temperature,
            max_output_tokens: gemini.max_output_tokens,
        };

        Ok(config.with_env_overrides())
    }

    /// Built-in values used when no config.yml is present
    pub fn defaults() -> Self {
        Self {
            brain_files: DEFAULT_BRAIN_FILES.iter().map(PathBuf::from).collect(),
            search_file: PathBuf::from(DEFAULT_SEARCH_FILE),
            stop_words: StopWords::default(),
            max_answer_facts: DEFAULT_MAX_ANSWER_FACTS,
            max_architect_facts: DEFAULT_MAX_ARCHITECT_FACTS,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Apply SIMULA_BRAIN_FILES, SIMULA_MAX_FACTS and GEMINI_MODEL
    fn with_env_overrides(mut self) -> Self {
        if let Ok(files) = std::env::var("SIMULA_BRAIN_FILES") {
            let files: Vec<PathBuf> = files
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(PathBuf::from)
                .collect();
            if !files.is_empty() {
                self.brain_files = files;
            }
        }

        if let Some(limit) = std::env::var("SIMULA_MAX_FACTS")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
        {
            self.max_answer_facts = limit;
        }

        let model = std::mem::take(&mut self.gemini_model);
        self.gemini_model = Self::resolve_env_string(Some(model), "GEMINI_MODEL")
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        self
    }
}
