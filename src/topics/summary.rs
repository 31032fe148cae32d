// Topic summaries: the printable view of a fitted model.

use serde::{Deserialize, Serialize};

use super::lda::FittedTopics;

/// One topic as reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    /// 1-based topic number
    pub number: usize,
    /// Top terms with their topic weight, highest first
    pub terms: Vec<(String, f64)>,
    /// Documents whose most probable topic is this one
    pub documents: usize,
}

impl TopicSummary {
    /// The topic's terms joined by spaces, highest weight first.
    pub fn label(&self) -> String {
        self.terms
            .iter()
            .map(|(term, _)| term.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Summarize every topic of a fitted model.
pub fn summarize(fitted: &FittedTopics, top_terms: usize) -> Vec<TopicSummary> {
    let mut documents = vec![0usize; fitted.num_topics()];
    for doc in 0..fitted.doc_topic.len() {
        if let Some(topic) = fitted.dominant_topic(doc) {
            documents[topic] += 1;
        }
    }

    documents
        .into_iter()
        .enumerate()
        .map(|(topic, documents)| TopicSummary {
            number: topic + 1,
            terms: fitted.top_terms(topic, top_terms),
            documents,
        })
        .collect()
}
