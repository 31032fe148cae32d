// Applies a rule set to every posting's raw keyword text.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::rules::RuleSet;
use crate::dataset::{Dataset, KeywordField};

/// Separator between tags in a tag string.
pub const TAG_SEPARATOR: &str = ", ";

/// A posting's title alongside its derived tag string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedRecord {
    pub title: Option<String>,
    /// Matched tags joined with ", " in rule order; empty when none matched
    pub tags: String,
}

/// Result of the tagging stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagReport {
    pub records: Vec<TaggedRecord>,
    /// Records carrying each tag, in rule order (zero counts included)
    pub tag_counts: Vec<(String, usize)>,
    /// Records that matched no rule
    pub untagged: usize,
}

/// Tags whose rules match `keywords`, in rule declaration order.
pub fn matching_tags<'a>(rules: &'a RuleSet, keywords: &KeywordField) -> Vec<&'a str> {
    match keywords.as_text() {
        Some(text) => rules
            .rules()
            .iter()
            .filter(|rule| rule.matches(text))
            .map(|rule| rule.tag.as_str())
            .collect(),
        None => Vec::new(),
    }
}

/// The tag string for one keyword field. A missing field yields "".
pub fn tag_string(rules: &RuleSet, keywords: &KeywordField) -> String {
    matching_tags(rules, keywords).join(TAG_SEPARATOR)
}

/// Tag every record of the dataset.
pub fn tag_dataset(dataset: &Dataset, rules: &RuleSet) -> TagReport {
    let mut counts = vec![0usize; rules.len()];
    let mut untagged = 0;

    let records: Vec<TaggedRecord> = dataset
        .records()
        .iter()
        .map(|record| {
            let tags = matching_tags(rules, &record.keywords);
            for (i, rule) in rules.rules().iter().enumerate() {
                if tags.contains(&rule.tag.as_str()) {
                    counts[i] += 1;
                }
            }
            if tags.is_empty() {
                untagged += 1;
            }
            TaggedRecord {
                title: record.title.clone(),
                tags: tags.join(TAG_SEPARATOR),
            }
        })
        .collect();

    let tag_counts = rules
        .rules()
        .iter()
        .zip(counts)
        .map(|(rule, count)| (rule.tag.clone(), count))
        .collect();

    info!(records = records.len(), untagged, "Tagged job postings");

    TagReport {
        records,
        tag_counts,
        untagged,
    }
}
