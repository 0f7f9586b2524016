//! Keyword retrieval over a flat list of facts.
//!
//! Matching is a linear scan: a fact is returned when any query keyword is a
//! substring of its lowercased subject or object. Substring (not whole-word)
//! matching means short keywords can over-match, e.g. `"a"` inside `"wave"`.

use std::collections::HashSet;

use tracing::debug;

use super::fact::Fact;

/// Words dropped from queries before matching.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "what", "is", "how", "do", "i", "the", "a", "an", "in", "of", "to", "for", "are",
];

/// Lowercased stop-word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl Default for StopWords {
    fn default() -> Self {
        DEFAULT_STOP_WORDS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|w| {
                    let w: String = w.into();
                    w.trim().to_lowercase()
                })
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }
}

impl StopWords {
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}

/// Split a query on whitespace, lowercase it and drop stop words.
pub fn keywords(query: &str, stop_words: &StopWords) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|w| !stop_words.contains(w))
        .map(str::to_string)
        .collect()
}

/// Facts whose subject or object contains any keyword of `query`, in order.
pub fn search_facts<'a>(facts: &'a [Fact], query: &str, stop_words: &StopWords) -> Vec<&'a Fact> {
    let keywords = keywords(query, stop_words);
    debug!("Scanning for keywords: {:?}", keywords);

    facts
        .iter()
        .filter(|fact| matches_any(fact, &keywords))
        .collect()
}

/// Like [`search_facts`], rendered as `"subject is predicate object"`.
pub fn search(facts: &[Fact], query: &str, stop_words: &StopWords) -> Vec<String> {
    search_facts(facts, query, stop_words)
        .into_iter()
        .map(Fact::sentence)
        .collect()
}

/// Single-term lookup: the whole lowercased term is one substring needle.
pub fn find_connections<'a>(facts: &'a [Fact], term: &str) -> Vec<&'a Fact> {
    let needle = term.to_lowercase();
    facts
        .iter()
        .filter(|fact| {
            fact.subject.to_lowercase().contains(&needle)
                || fact.object.to_lowercase().contains(&needle)
        })
        .collect()
}

fn matches_any(fact: &Fact, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }
    let subject = fact.subject.to_lowercase();
    let object = fact.object.to_lowercase();
    keywords
        .iter()
        .any(|k| subject.contains(k.as_str()) || object.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Fact> {
        vec![
            Fact::new("A", "is_a", "B"),
            Fact::new("C", "is_a", "D"),
        ]
    }

    #[test]
    fn keywords_drop_stop_words_and_lowercase() {
        let words = keywords("How do I simulate Fluids?", &StopWords::default());
        assert_eq!(words, vec!["simulate", "fluids?"]);
    }

    #[test]
    fn keywords_keep_duplicates_in_order() {
        let words = keywords("wave WAVE shock", &StopWords::default());
        assert_eq!(words, vec!["wave", "wave", "shock"]);
    }

    #[test]
    fn stop_word_only_query_matches_nothing() {
        let facts = vec![Fact::new("the cat", "is", "an animal")];
        assert!(search(&facts, "what is the", &StopWords::default()).is_empty());
    }

    #[test]
    fn single_letter_fact_example() {
        let results = search(&sample(), "B", &StopWords::default());
        assert_eq!(results, vec!["A is is_a B".to_string()]);
    }

    #[test]
    fn matches_subject_or_object_substring() {
        let facts = vec![
            Fact::new("Navier-Stokes", "describes", "fluid flow"),
            Fact::new("Burgers equation", "models", "shock waves"),
            Fact::new("friction", "affects", "grip"),
        ];
        let stop = StopWords::default();

        assert_eq!(search_facts(&facts, "navier", &stop), vec![&facts[0]]);
        assert_eq!(search_facts(&facts, "shock", &stop), vec![&facts[1]]);
        assert!(search_facts(&facts, "describes", &stop).is_empty());
        assert!(search_facts(&facts, "quantum", &stop).is_empty());
    }

    #[test]
    fn any_keyword_is_enough() {
        let facts = vec![
            Fact::new("turbulence", "related_to", "flow"),
            Fact::new("friction", "related_to", "surface"),
        ];
        let results = search_facts(&facts, "turbulence surface", &StopWords::default());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn results_keep_collection_order_without_dedup() {
        let facts = vec![
            Fact::new("x wave", "p", "y"),
            Fact::new("z", "p", "wave"),
            Fact::new("x wave", "p", "y"),
        ];
        let results = search(&facts, "wave", &StopWords::default());
        assert_eq!(
            results,
            vec!["x wave is p y", "z is p wave", "x wave is p y"]
        );
    }

    #[test]
    fn custom_stop_words_replace_defaults() {
        let stop: StopWords = ["Fluid"].into_iter().collect();
        let facts = vec![
            Fact::new("fluid", "is", "wet"),
            Fact::new("the well", "is", "dataset"),
        ];

        assert!(search(&facts, "FLUID", &stop).is_empty());
        assert_eq!(search(&facts, "the fluid", &stop), vec!["the well is is dataset"]);
    }

    #[test]
    fn find_connections_uses_whole_term() {
        let facts = vec![
            Fact::new("Shock Wave", "causes", "pressure"),
            Fact::new("wave", "p", "shock"),
        ];
        let hits = find_connections(&facts, "shock wave");
        assert_eq!(hits, vec![&facts[0]]);
    }
}
