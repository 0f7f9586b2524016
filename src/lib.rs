//! Simula knowledge toolkit
//!
//! This library provides tools to:
//! - Extract text from PDF papers
//! - Load a knowledge graph of facts from JSON brain files
//! - Run keyword search over the graph
//! - Answer questions with Gemini, grounded on retrieved facts
//! - Design grounded training-pack blueprints

pub mod architect;
pub mod brain;
pub mod config;
pub mod error;
pub mod integrations;
pub mod pdf;
pub mod prompts;
pub mod responder;

// Re-export common types
pub use brain::{Fact, KnowledgeGraph, StopWords};
pub use config::Config;
pub use error::{Error, Result};
pub use integrations::GeminiClient;
pub use prompts::{load_prompt, Prompt};
pub use responder::Responder;

// Commands module uses re-exported types, so it must be declared after the re-exports
pub mod commands;
