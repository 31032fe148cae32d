// Latent Dirichlet Allocation via collapsed Gibbs sampling.
//
// Every token in the count matrix gets a topic assignment. Each sweep
// resamples every assignment from its conditional given all the others:
//
//   p(topic = t) ∝ (n_dt + α) · (n_wt + β) / (n_t + V·β)
//
// where n_dt counts tokens of document d in topic t, n_wt counts term w in
// topic t, and n_t is the topic's total token count. The sampler draws from
// a `StdRng` seeded from the configuration, so identical input and seed
// always produce identical topics.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::traits::TopicModel;
use super::vectorizer::CountMatrix;
use super::{DEFAULT_SEED, NUM_TOPICS};

/// Gibbs-sampled LDA with symmetric priors.
#[derive(Debug, Clone)]
pub struct GibbsLda {
    pub num_topics: usize,
    /// Full sweeps over every token
    pub iterations: usize,
    pub seed: u64,
    /// Document-topic prior; `None` means 1/k
    pub alpha: Option<f64>,
    /// Topic-term prior; `None` means 1/k
    pub beta: Option<f64>,
    /// Draw a progress bar on stderr while sampling
    pub show_progress: bool,
}

impl Default for GibbsLda {
    fn default() -> Self {
        Self {
            num_topics: NUM_TOPICS,
            iterations: 200,
            seed: DEFAULT_SEED,
            alpha: None,
            beta: None,
            show_progress: false,
        }
    }
}

/// A fitted model: topic-term weights and per-document topic mixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedTopics {
    pub vocabulary: Vec<String>,
    /// k rows of V weights: assignment counts plus the topic-term prior
    pub topic_term: Vec<Vec<f64>>,
    /// One topic distribution per document (uniform for empty documents)
    pub doc_topic: Vec<Vec<f64>>,
    /// Tokens per document
    pub doc_lengths: Vec<usize>,
}

impl FittedTopics {
    pub fn num_topics(&self) -> usize {
        self.topic_term.len()
    }

    /// The `n` highest-weighted terms of `topic`, descending.
    /// Equal weights keep vocabulary order.
    pub fn top_terms(&self, topic: usize, n: usize) -> Vec<(String, f64)> {
        let Some(weights) = self.topic_term.get(topic) else {
            return Vec::new();
        };
        let mut ranked: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(i, w)| (self.vocabulary[i].clone(), w))
            .collect()
    }

    /// Most probable topic of a document; `None` for documents with no tokens.
    pub fn dominant_topic(&self, doc: usize) -> Option<usize> {
        if self.doc_lengths.get(doc).copied().unwrap_or(0) == 0 {
            return None;
        }
        self.doc_topic[doc]
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(t, _)| t)
    }
}

impl TopicModel for GibbsLda {
    fn fit(&self, matrix: &CountMatrix) -> Result<FittedTopics> {
        let k = self.num_topics;
        let v = matrix.num_terms();

        if k == 0 {
            anyhow::bail!("Topic count must be at least 1");
        }
        if v == 0 {
            anyhow::bail!(
                "Empty vocabulary: none of the {} documents contain a token of two or more word characters",
                matrix.num_documents()
            );
        }

        let alpha = self.alpha.unwrap_or(1.0 / k as f64);
        let beta = self.beta.unwrap_or(1.0 / k as f64);
        if alpha <= 0.0 || beta <= 0.0 {
            anyhow::bail!("Dirichlet priors must be positive (alpha = {alpha}, beta = {beta})");
        }
        let mut rng = StdRng::seed_from_u64(self.seed);

        // Expand sparse counts into one term id per token
        let docs: Vec<Vec<usize>> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|&(term, count)| std::iter::repeat(term).take(count as usize))
                    .collect()
            })
            .collect();

        let mut n_dt = vec![vec![0u32; k]; docs.len()];
        let mut n_wt = vec![vec![0u32; k]; v];
        let mut n_t = vec![0u32; k];

        let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(docs.len());
        for (d, tokens) in docs.iter().enumerate() {
            let mut doc_assignments = Vec::with_capacity(tokens.len());
            for &w in tokens {
                let t = rng.random_range(0..k);
                n_dt[d][t] += 1;
                n_wt[w][t] += 1;
                n_t[t] += 1;
                doc_assignments.push(t);
            }
            assignments.push(doc_assignments);
        }

        let token_count: usize = docs.iter().map(Vec::len).sum();
        info!(
            documents = docs.len(),
            terms = v,
            tokens = token_count,
            topics = k,
            iterations = self.iterations,
            seed = self.seed,
            "Fitting LDA topic model"
        );

        let pb = if self.show_progress {
            let pb = ProgressBar::new(self.iterations as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Sampling [{bar:30}] {pos}/{len} ({eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let v_beta = v as f64 * beta;
        let mut weights = vec![0.0f64; k];

        for sweep in 0..self.iterations {
            for (d, tokens) in docs.iter().enumerate() {
                for (pos, &w) in tokens.iter().enumerate() {
                    let old = assignments[d][pos];
                    n_dt[d][old] -= 1;
                    n_wt[w][old] -= 1;
                    n_t[old] -= 1;

                    let mut total = 0.0;
                    for t in 0..k {
                        let p = (n_dt[d][t] as f64 + alpha) * (n_wt[w][t] as f64 + beta)
                            / (n_t[t] as f64 + v_beta);
                        total += p;
                        weights[t] = total;
                    }

                    let u = rng.random::<f64>() * total;
                    let new = weights.iter().position(|&c| u < c).unwrap_or(k - 1);

                    assignments[d][pos] = new;
                    n_dt[d][new] += 1;
                    n_wt[w][new] += 1;
                    n_t[new] += 1;
                }
            }
            pb.inc(1);
            if sweep % 50 == 0 {
                debug!(sweep, "LDA sweep complete");
            }
        }
        pb.finish_and_clear();

        let topic_term: Vec<Vec<f64>> = (0..k)
            .map(|t| (0..v).map(|w| n_wt[w][t] as f64 + beta).collect())
            .collect();

        let doc_topic: Vec<Vec<f64>> = n_dt
            .iter()
            .zip(&docs)
            .map(|(counts, tokens)| {
                let denom = tokens.len() as f64 + k as f64 * alpha;
                counts.iter().map(|&c| (c as f64 + alpha) / denom).collect()
            })
            .collect();

        Ok(FittedTopics {
            vocabulary: matrix.vocabulary().to_vec(),
            topic_term,
            doc_topic,
            doc_lengths: docs.iter().map(Vec::len).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::vectorizer::CountVectorizer;

    fn corpus() -> CountMatrix {
        CountVectorizer::default().fit_transform(&[
            "순찰, 보안, 경비",
            "순찰, 경비, 주차",
            "청소, 미화, 정리",
            "청소, 정리, 분리수거",
            "상담, 안내, 사무",
            "상담, 사무, 전화",
        ])
    }

    #[test]
    fn test_fit_is_deterministic() {
        let model = GibbsLda {
            num_topics: 3,
            iterations: 50,
            ..GibbsLda::default()
        };
        let a = model.fit(&corpus()).unwrap();
        let b = model.fit(&corpus()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_topic_term_mass_matches_tokens() {
        let matrix = corpus();
        let model = GibbsLda {
            num_topics: 3,
            iterations: 20,
            ..GibbsLda::default()
        };
        let fitted = model.fit(&matrix).unwrap();
        // 18 tokens plus a prior of 1/3 on each of 3 x 12 cells
        let mass: f64 = fitted.topic_term.iter().flatten().sum();
        assert_eq!(matrix.num_terms(), 12);
        assert!((mass - 30.0).abs() < 1e-9, "mass was {mass}");
    }

    #[test]
    fn test_non_positive_prior_rejected() {
        let model = GibbsLda {
            beta: Some(0.0),
            ..GibbsLda::default()
        };
        assert!(model.fit(&corpus()).is_err());
    }

    #[test]
    fn test_doc_topic_rows_sum_to_one() {
        let fitted = GibbsLda::default().fit(&corpus()).unwrap();
        for row in &fitted.doc_topic {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_vocabulary_fails() {
        let matrix = CountVectorizer::default().fit_transform(&["", "a"]);
        assert!(GibbsLda::default().fit(&matrix).is_err());
    }

    #[test]
    fn test_top_terms_bounded() {
        let fitted = GibbsLda::default().fit(&corpus()).unwrap();
        assert_eq!(fitted.num_topics(), 5);
        let top = fitted.top_terms(0, 7);
        assert_eq!(top.len(), 7);
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(fitted.top_terms(9, 7).is_empty());
    }
}
