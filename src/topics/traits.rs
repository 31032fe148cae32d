// Topic model trait: swap-ready abstraction.
//
// The default implementation is a collapsed Gibbs sampler; anything that
// turns a document-term count matrix into topic-term weights fits here.

use anyhow::Result;

use super::lda::FittedTopics;
use super::vectorizer::CountMatrix;

/// Trait for fitting a topic model over a count matrix.
pub trait TopicModel {
    /// Fit the model. Must be deterministic for a given configuration and input.
    fn fit(&self, matrix: &CountMatrix) -> Result<FittedTopics>;
}
