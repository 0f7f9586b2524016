//! External integrations module.
//!
//! Provides clients for:
//! - Google Gemini (text generation)

pub mod gemini;

pub use gemini::GeminiClient;
