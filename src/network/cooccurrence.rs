// Keyword pair counting.
//
// Each record's keyword list is sorted before pairing, so a pair's identity
// does not depend on the order keywords were listed in: (A, B) is always
// stored with A <= B. A record with n keywords contributes exactly C(n, 2)
// pairs. Duplicate keywords inside one record are paired like any other
// position, so ["a", "a", "b"] yields (a, a), (a, b), (a, b).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::Dataset;
use crate::keywords::counter::FrequencyCounter;

/// An unordered keyword pair, stored in sorted order.
pub type KeywordPair = (String, String);

/// Pairs listed in the default report.
pub const TOP_PAIRS: usize = 10;
/// Pairs that become edges of the network graph.
pub const GRAPH_PAIRS: usize = 30;

/// Result of the co-occurrence stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairReport {
    /// Most frequent pairs, highest count first
    pub top_pairs: Vec<(KeywordPair, usize)>,
    /// Pairs at graph size, used to build the network
    pub graph_pairs: Vec<(KeywordPair, usize)>,
    /// Pair occurrences across all records
    pub total_pairs: usize,
    /// Distinct pairs across all records
    pub distinct_pairs: usize,
}

impl PairReport {
    pub fn is_empty(&self) -> bool {
        self.total_pairs == 0
    }
}

/// All 2-combinations of one record's keywords, after sorting.
pub fn keyword_pairs(keywords: &[String]) -> Vec<KeywordPair> {
    let mut sorted: Vec<&String> = keywords.iter().collect();
    sorted.sort();

    let mut pairs = Vec::with_capacity(sorted.len() * sorted.len().saturating_sub(1) / 2);
    for (i, a) in sorted.iter().enumerate() {
        for b in &sorted[i + 1..] {
            pairs.push(((*a).clone(), (*b).clone()));
        }
    }
    pairs
}

/// Count every pair across all records, in record order.
pub fn pair_counts(dataset: &Dataset) -> FrequencyCounter<KeywordPair> {
    dataset
        .records()
        .iter()
        .flat_map(|r| keyword_pairs(&r.keyword_list))
        .collect()
}

/// Run the co-occurrence stage.
pub fn analyze(dataset: &Dataset, top_n: usize, graph_n: usize) -> PairReport {
    let counts = pair_counts(dataset);

    info!(
        total = counts.total(),
        distinct = counts.distinct(),
        "Counted keyword pairs"
    );

    PairReport {
        top_pairs: counts.most_common(top_n),
        graph_pairs: counts.most_common(graph_n),
        total_pairs: counts.total(),
        distinct_pairs: counts.distinct(),
    }
}
