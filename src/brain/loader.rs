//! Brain file loading.
//!
//! Two shapes are accepted:
//! - a JSON array of `{subject, predicate, object}` records
//! - a JSON object with a `links` array of `{source, target, id?}` records

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::fact::Fact;
use super::graph::KnowledgeGraph;
use crate::{Error, Result};

/// Normalize a parsed brain document into facts.
///
/// Any other shape yields no facts.
pub fn parse_facts(value: &Value) -> Vec<Fact> {
    match value {
        Value::Array(records) => collect(records, Fact::from_record),
        Value::Object(obj) => match obj.get("links") {
            Some(Value::Array(links)) => collect(links, Fact::from_link_record),
            _ => {
                warn!("JSON object has no `links` array, nothing to load");
                Vec::new()
            }
        },
        _ => {
            warn!("Unsupported brain shape, expected a list or a graph with `links`");
            Vec::new()
        }
    }
}

fn collect(records: &[Value], convert: fn(&Value) -> Option<Fact>) -> Vec<Fact> {
    let mut facts = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        match convert(record) {
            Some(fact) => facts.push(fact),
            None => debug!("Skipping non-object record #{}", idx),
        }
    }
    facts
}

/// Load one brain file. A missing file is an error.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Fact>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.display().to_string()),
        _ => Error::IoError(e),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        Error::SerializationError(format!("{}: {}", path.display(), e))
    })?;

    Ok(parse_facts(&value))
}

/// Load several brain files into one graph, in input order.
///
/// Missing files are skipped with a warning; malformed JSON is fatal.
pub fn load_brain<P: AsRef<Path>>(paths: &[P]) -> Result<KnowledgeGraph> {
    let mut graph = KnowledgeGraph::new();
    info!("Simula is waking up...");

    for path in paths {
        let path = path.as_ref();
        match load_file(path) {
            Ok(facts) => {
                info!(
                    "Connected to memory bank: {} ({} facts)",
                    path.display(),
                    facts.len()
                );
                graph.extend(facts);
            }
            Err(Error::FileNotFound(name)) => {
                warn!("Memory bank missing: {}", name);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(graph)
}
