//! Prompt templates for the answer and blueprint calls.
//!
//! Built-in templates can be overridden by Markdown files in the `prompts/`
//! directory. Placeholders use `{name}` syntax.

use std::path::PathBuf;

use tracing::debug;

use crate::{Error, Result};

const ANSWER_TEMPLATE: &str = r#"You are Simula, an expert AI Physics Architect.
You have retrieved the following specific facts from your internal database:

--- DATA START ---
{context}
--- DATA END ---

USER QUESTION: {question}

INSTRUCTIONS:
1. Answer the user's question using ONLY the data provided above.
2. Be technical but clear.
3. Cite the specific datasets or methods mentioned in the data.

ANSWER:
"#;

const BLUEPRINT_TEMPLATE: &str = r#"You are the Chief Data Architect for a Robotics Data Factory.
We are using the 'Simula' framework (Taxonomies for Global Coverage).

INTERNAL RESEARCH (Context):
{context}

TASK: {task}
ROBOT: {robot}

GOAL: Design a "Training Pack" (Dataset Blueprint) for Isaac Sim.

INSTRUCTIONS:
1. If the Internal Research mentions specific equations (e.g. Navier-Stokes, Burgers), use them.
2. Define "Edge Cases" based on physics failures (turbulence, friction loss).
3. Output valid JSON only.

OUTPUT JSON STRUCTURE:
{
  "training_pack_id": "pack_001_grounded",
  "scientific_basis": "Derived from Internal Knowledge Graph",
  "curriculum_stages": [
    {
      "stage_name": "nominal_baseline",
      "description": "Standard operating conditions",
      "iterations": 10,
      "parameters": { "lighting": "uniform", "physics_fidelity": "low" }
    },
    {
      "stage_name": "scientific_stress_test",
      "description": "Testing specific physics failures",
      "iterations": 100,
      "parameters": {
        "equation_type": "string",
        "surface_friction": [0.1, 0.9],
        "notes": "Testing specific failure mode"
      }
    }
  ]
}
"#;

/// Available prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Grounded answer over retrieved facts.
    Answer,
    /// Training pack blueprint (JSON output).
    Blueprint,
}

impl Prompt {
    /// Override file name (Markdown).
    pub fn filename(&self) -> &'static str {
        match self {
            Prompt::Answer => "answer.md",
            Prompt::Blueprint => "blueprint.md",
        }
    }

    pub fn builtin(&self) -> &'static str {
        match self {
            Prompt::Answer => ANSWER_TEMPLATE,
            Prompt::Blueprint => BLUEPRINT_TEMPLATE,
        }
    }

    /// Override from `prompts/` if present, else the built-in template.
    pub fn template(&self) -> String {
        match load_prompt(self.filename()) {
            Ok(text) => {
                debug!("Using prompt override {}", self.filename());
                text
            }
            Err(_) => self.builtin().to_string(),
        }
    }
}

/// Replace `{key}` placeholders. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

/// Load a prompt by file name.
pub fn load_prompt(filename: &str) -> Result<String> {
    let path = prompts_dir().join(filename);
    std::fs::read_to_string(&path).map_err(|e| {
        Error::InvalidArgument(format!("Failed to load prompt {}: {}", filename, e))
    })
}

/// Prompts directory.
pub fn prompts_dir() -> PathBuf {
    let candidates = [PathBuf::from("prompts"), PathBuf::from("../prompts")];

    for path in candidates {
        if path.exists() {
            return path;
        }
    }

    PathBuf::from("prompts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_filenames() {
        assert_eq!(Prompt::Answer.filename(), "answer.md");
        assert_eq!(Prompt::Blueprint.filename(), "blueprint.md");
    }

    #[test]
    fn test_render_replaces_placeholders() {
        let text = render(
            Prompt::Answer.builtin(),
            &[("context", "A is is_a B"), ("question", "What is A?")],
        );
        assert!(text.contains("--- DATA START ---\nA is is_a B\n--- DATA END ---"));
        assert!(text.contains("USER QUESTION: What is A?"));
        assert!(!text.contains("{context}"));
    }

    #[test]
    fn test_render_keeps_json_braces() {
        let text = render(
            Prompt::Blueprint.builtin(),
            &[("context", "c"), ("task", "pour"), ("robot", "Panda")],
        );
        assert!(text.contains("\"training_pack_id\": \"pack_001_grounded\""));
        assert!(text.contains("TASK: pour"));
        assert!(text.contains("ROBOT: Panda"));
    }

    #[test]
    fn test_load_prompt_nonexistent_file() {
        assert!(load_prompt("nonexistent_file_12345.md").is_err());
    }
}
