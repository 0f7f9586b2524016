use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Predicate used when a source record does not name one.
pub const DEFAULT_PREDICATE: &str = "related_to";

/// One piece of domain knowledge: `subject --[predicate]--> object`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// Edge record of a graph-shaped brain file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Fact {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Build a fact from a `{subject, predicate, object}` JSON record.
    ///
    /// Non-string scalars are stringified, missing subject/object become
    /// empty and a missing predicate falls back to [`DEFAULT_PREDICATE`].
    /// Returns `None` for anything that is not a JSON object.
    pub fn from_record(record: &Value) -> Option<Self> {
        let obj = record.as_object()?;
        Some(Self {
            subject: obj.get("subject").map(scalar_to_string).unwrap_or_default(),
            predicate: predicate_or_default(obj.get("predicate")),
            object: obj.get("object").map(scalar_to_string).unwrap_or_default(),
        })
    }

    /// Build a fact from a `{source, target, id?}` link record.
    pub fn from_link_record(record: &Value) -> Option<Self> {
        let obj = record.as_object()?;
        Some(Self {
            subject: obj.get("source").map(scalar_to_string).unwrap_or_default(),
            predicate: predicate_or_default(obj.get("id")),
            object: obj.get("target").map(scalar_to_string).unwrap_or_default(),
        })
    }

    pub fn from_link(link: &Link) -> Self {
        Self {
            subject: link.source.clone(),
            predicate: link
                .id
                .clone()
                .unwrap_or_else(|| DEFAULT_PREDICATE.to_string()),
            object: link.target.clone(),
        }
    }

    /// Convert back to a graph link. The predicate is always written as `id`.
    pub fn to_link(&self) -> Link {
        Link {
            source: self.subject.clone(),
            target: self.object.clone(),
            id: Some(self.predicate.clone()),
        }
    }

    /// Sentence form handed to the model: `"A is is_a B"`.
    pub fn sentence(&self) -> String {
        self.to_string()
    }

    /// Arrow form used by the search tool: `"A --[is_a]--> B"`.
    pub fn arrow(&self) -> String {
        format!("{} --[{}]--> {}", self.subject, self.predicate, self.object)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} {}", self.subject, self.predicate, self.object)
    }
}

fn predicate_or_default(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => DEFAULT_PREDICATE.to_string(),
        Some(v) => scalar_to_string(v),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
