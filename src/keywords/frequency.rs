// Keyword and title word frequencies across the whole dataset.
//
// Both counts are pure functions of the dataset: keyword lists are flattened
// in record order, titles are split on whitespace and flattened the same way.

use serde::{Deserialize, Serialize};

use super::counter::FrequencyCounter;
use crate::dataset::Dataset;

/// How many keywords the default report lists.
pub const TOP_KEYWORDS: usize = 20;
/// How many title words the default report lists.
pub const TOP_TITLE_WORDS: usize = 10;

/// Result of the frequency stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Most frequent keywords, highest count first
    pub top_keywords: Vec<(String, usize)>,
    /// Most frequent title words, highest count first
    pub top_title_words: Vec<(String, usize)>,
    /// Distinct keywords across all records
    pub distinct_keywords: usize,
    /// Keyword occurrences across all records
    pub total_keywords: usize,
}

/// Count every keyword occurrence across all records.
pub fn keyword_counts(dataset: &Dataset) -> FrequencyCounter<String> {
    dataset
        .records()
        .iter()
        .flat_map(|r| r.keyword_list.iter().cloned())
        .collect()
}

/// The `n` most frequent keywords.
pub fn top_keywords(dataset: &Dataset, n: usize) -> Vec<(String, usize)> {
    keyword_counts(dataset).most_common(n)
}

/// The `n` most frequent whitespace-separated words in job titles.
pub fn top_title_words(dataset: &Dataset, n: usize) -> Vec<(String, usize)> {
    let counter: FrequencyCounter<String> = dataset
        .records()
        .iter()
        .flat_map(|r| r.title_words().map(str::to_string))
        .collect();
    counter.most_common(n)
}

/// Run the full frequency stage.
pub fn analyze(dataset: &Dataset, keyword_n: usize, title_n: usize) -> KeywordReport {
    let counts = keyword_counts(dataset);
    KeywordReport {
        top_keywords: counts.most_common(keyword_n),
        top_title_words: top_title_words(dataset, title_n),
        distinct_keywords: counts.distinct(),
        total_keywords: counts.total(),
    }
}
