// Bag-of-words count vectorizer.
//
// Lowercases each document and extracts tokens of two or more Unicode word
// characters. The vocabulary is sorted lexicographically, so a term's column
// index depends only on the set of terms seen, not on document order.
// Counts are raw (no weighting).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("Invalid token pattern"))
}

/// Sparse document-term count matrix with its vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountMatrix {
    vocabulary: Vec<String>,
    /// Per document: (term index, count), ascending by term index
    rows: Vec<Vec<(usize, u32)>>,
}

impl CountMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[Vec<(usize, u32)>] {
        &self.rows
    }

    pub fn num_documents(&self) -> usize {
        self.rows.len()
    }

    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Count of `term` in document `doc` (0 when absent).
    pub fn count(&self, doc: usize, term: &str) -> u32 {
        let Ok(idx) = self.vocabulary.binary_search_by(|t| t.as_str().cmp(term)) else {
            return 0;
        };
        self.rows
            .get(doc)
            .and_then(|row| row.iter().find(|(i, _)| *i == idx))
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct CountVectorizer {
    pub lowercase: bool,
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl CountVectorizer {
    /// Tokens of one document, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        token_pattern()
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Learn the vocabulary and count terms per document.
    pub fn fit_transform(&self, documents: &[&str]) -> CountMatrix {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
                for token in tokens {
                    if let Ok(idx) = vocabulary.binary_search(token) {
                        *counts.entry(idx).or_insert(0) += 1;
                    }
                }
                counts.into_iter().collect()
            })
            .collect();

        CountMatrix { vocabulary, rows }
    }
}
