// Analysis pipeline: load once, then run each stage over the same dataset.
//
// Every stage sits behind its own failure boundary. A stage that errors is
// logged and reported, and the stages after it still run. An empty dataset
// (missing file, undecodable file, no usable rows) skips every stage.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::dataset::{load_or_empty, Dataset, DatasetSummary, LoadOptions};
use crate::keywords::frequency::{self, KeywordReport, TOP_KEYWORDS, TOP_TITLE_WORDS};
use crate::network::cooccurrence::{self, PairReport, GRAPH_PAIRS, TOP_PAIRS};
use crate::network::render;
use crate::output::terminal;
use crate::tagging::rules::RuleSet;
use crate::tagging::tagger::{self, TagReport};
use crate::topics::lda::GibbsLda;
use crate::topics::summary::TopicSummary;
use crate::topics::{self, TOP_TERMS};

/// Tagged postings shown in the tagging sample.
pub const TAG_SAMPLE: usize = 5;

/// The analysis stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Keywords,
    Tags,
    Topics,
    Pairs,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Keywords, Stage::Tags, Stage::Topics, Stage::Pairs];

    pub fn number(&self) -> usize {
        match self {
            Stage::Keywords => 1,
            Stage::Tags => 2,
            Stage::Topics => 3,
            Stage::Pairs => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Keywords => "Keyword and job title frequency",
            Stage::Tags => "Job characteristic tagging",
            Stage::Topics => "Job clustering by topic modeling",
            Stage::Pairs => "Keyword co-occurrence network",
        }
    }
}

/// Knobs for a pipeline run. Defaults are the fixed analysis constants.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub stages: Vec<Stage>,
    pub keyword_top: usize,
    pub title_top: usize,
    pub rules: RuleSet,
    pub tag_sample: usize,
    pub topic_model: GibbsLda,
    pub topic_terms: usize,
    pub pair_top: usize,
    pub graph_pairs: usize,
    /// Where to render the network image; `None` skips rendering
    pub graph_path: Option<PathBuf>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            stages: Stage::ALL.to_vec(),
            keyword_top: TOP_KEYWORDS,
            title_top: TOP_TITLE_WORDS,
            rules: RuleSet::default(),
            tag_sample: TAG_SAMPLE,
            topic_model: GibbsLda::default(),
            topic_terms: TOP_TERMS,
            pair_top: TOP_PAIRS,
            graph_pairs: GRAPH_PAIRS,
            graph_path: None,
        }
    }
}

/// A stage that failed, with its error rendered as text.
#[derive(Debug, Clone, Serialize)]
pub struct StageFailure {
    pub stage: Stage,
    pub message: String,
}

/// Everything a pipeline run produced. Stages that were skipped or failed
/// leave their slot empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResults {
    pub dataset: DatasetSummary,
    pub records: usize,
    pub keywords: Option<KeywordReport>,
    pub tags: Option<TagReport>,
    pub topics: Option<Vec<TopicSummary>>,
    pub pairs: Option<PairReport>,
    /// Path of the rendered network image, when one was written
    pub graph_path: Option<PathBuf>,
    pub failures: Vec<StageFailure>,
}

/// Load the configured input, printing the summary or the failure.
///
/// Never fails: any load error degrades to an empty dataset.
pub fn load(config: &Config) -> Dataset {
    let options = LoadOptions {
        keyword_column: &config.keyword_column,
        title_column: &config.title_column,
    };
    let (dataset, error) = load_or_empty(&config.input_path, options);
    match error {
        Some(e) => terminal::display_load_error(&e),
        None => terminal::display_dataset(&dataset),
    }
    dataset
}

/// Run the selected stages over `dataset`, printing each stage's results.
pub fn run(dataset: &Dataset, options: &PipelineOptions) -> AnalysisResults {
    let mut results = AnalysisResults {
        dataset: dataset.summary().clone(),
        records: dataset.len(),
        ..AnalysisResults::default()
    };

    if dataset.is_empty() {
        warn!("Dataset is empty, skipping all analysis stages");
        println!("\nNo usable job postings loaded; skipping analysis.");
        return results;
    }

    for &stage in &options.stages {
        terminal::display_stage_header(stage.number(), stage.title());

        let outcome = match stage {
            Stage::Keywords => {
                let report = frequency::analyze(dataset, options.keyword_top, options.title_top);
                terminal::display_keyword_report(&report);
                results.keywords = Some(report);
                Ok(())
            }
            Stage::Tags => {
                let report = tagger::tag_dataset(dataset, &options.rules);
                terminal::display_tag_report(&report, options.tag_sample);
                results.tags = Some(report);
                Ok(())
            }
            Stage::Topics => {
                let fitted = topics::analyze(dataset, &options.topic_model, options.topic_terms);
                fitted.map(|summaries| {
                    terminal::display_topics(&summaries);
                    results.topics = Some(summaries);
                })
            }
            Stage::Pairs => run_pairs(dataset, options, &mut results),
        };

        if let Err(e) = outcome {
            warn!(stage = stage.number(), error = %e, "Analysis stage failed");
            terminal::display_stage_error(stage.number(), &e);
            results.failures.push(StageFailure {
                stage,
                message: format!("{e:#}"),
            });
        }
    }

    info!(
        records = results.records,
        failures = results.failures.len(),
        "Analysis complete"
    );
    results
}

fn run_pairs(
    dataset: &Dataset,
    options: &PipelineOptions,
    results: &mut AnalysisResults,
) -> Result<()> {
    let report = cooccurrence::analyze(dataset, options.pair_top, options.graph_pairs);
    terminal::display_pair_report(&report);

    let rendered = match &options.graph_path {
        Some(path) if !report.is_empty() => render::render_network(&report.graph_pairs, path)
            .map(|written| written.then(|| path.clone())),
        _ => Ok(None),
    };
    results.pairs = Some(report);

    if let Some(path) = rendered? {
        println!("\nNetwork graph saved to '{}'.", path.display());
        results.graph_path = Some(path);
    }
    Ok(())
}
