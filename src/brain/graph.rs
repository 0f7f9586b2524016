use super::fact::{Fact, Link};
use super::retriever::{self, StopWords};

/// In-memory knowledge graph: an ordered bag of facts.
///
/// There is no index; every lookup is a full scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KnowledgeGraph {
    facts: Vec<Fact>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_facts(facts: Vec<Fact>) -> Self {
        Self { facts }
    }

    pub fn extend(&mut self, facts: impl IntoIterator<Item = Fact>) {
        self.facts.extend(facts);
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.facts.iter()
    }

    /// Keyword search rendered as sentences.
    pub fn search(&self, query: &str, stop_words: &StopWords) -> Vec<String> {
        retriever::search(&self.facts, query, stop_words)
    }

    pub fn search_facts(&self, query: &str, stop_words: &StopWords) -> Vec<&Fact> {
        retriever::search_facts(&self.facts, query, stop_words)
    }

    pub fn find_connections(&self, term: &str) -> Vec<&Fact> {
        retriever::find_connections(&self.facts, term)
    }

    /// Re-serialize as graph links (`subject`→`source`, `object`→`target`).
    pub fn links(&self) -> Vec<Link> {
        self.facts.iter().map(Fact::to_link).collect()
    }
}

impl<'a> IntoIterator for &'a KnowledgeGraph {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}
