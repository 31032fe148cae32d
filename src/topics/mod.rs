// Topic modeling: count vectorization and a seeded LDA sampler over the
// keyword text of each posting.

pub mod lda;
pub mod summary;
pub mod traits;
pub mod vectorizer;

use anyhow::Result;

use crate::dataset::Dataset;
use summary::TopicSummary;
use traits::TopicModel;
use vectorizer::CountVectorizer;

/// Topics the default model fits.
pub const NUM_TOPICS: usize = 5;
/// Terms reported per topic.
pub const TOP_TERMS: usize = 7;
/// Seed for reproducible fits.
pub const DEFAULT_SEED: u64 = 42;

/// Run the topic stage: one document per record, missing keyword text
/// becomes an empty document.
pub fn analyze(
    dataset: &Dataset,
    model: &dyn TopicModel,
    top_terms: usize,
) -> Result<Vec<TopicSummary>> {
    let documents: Vec<&str> = dataset
        .records()
        .iter()
        .map(|r| r.keywords.as_text().unwrap_or(""))
        .collect();

    let matrix = CountVectorizer::default().fit_transform(&documents);
    let fitted = model.fit(&matrix)?;
    Ok(summary::summarize(&fitted, top_terms))
}
