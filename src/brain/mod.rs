//! Knowledge "brain": fact loading and keyword retrieval.
//!
//! Facts are loaded from JSON brain files (flat triple lists or
//! node-link graphs), kept in insertion order, and searched with a
//! linear substring scan.

pub mod fact;
pub mod graph;
pub mod loader;
pub mod retriever;

pub use fact::{Fact, Link, DEFAULT_PREDICATE};
pub use graph::KnowledgeGraph;
pub use loader::{load_brain, load_file, parse_facts};
pub use retriever::{find_connections, keywords, search, search_facts, StopWords};
