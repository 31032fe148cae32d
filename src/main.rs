use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use jobscope::config::Config;
use jobscope::keywords::frequency::{TOP_KEYWORDS, TOP_TITLE_WORDS};
use jobscope::network::cooccurrence::TOP_PAIRS;
use jobscope::pipeline::{self, PipelineOptions, Stage, TAG_SAMPLE};
use jobscope::tagging::rules::RuleSet;
use jobscope::topics::lda::GibbsLda;
use jobscope::topics::{DEFAULT_SEED, NUM_TOPICS, TOP_TERMS};

/// Jobscope: keyword analysis for job posting datasets.
///
/// Loads a CSV of job postings and reports keyword frequencies, rule-based
/// job characteristic tags, topic clusters and keyword co-occurrence.
#[derive(Parser)]
#[command(name = "jobscope", version, about)]
struct Cli {
    /// Input CSV file (overrides JOBSCOPE_INPUT)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every analysis stage in order
    Analyze {
        /// Render the keyword co-occurrence network image
        #[arg(long)]
        graph: bool,

        /// Where to write the network image (overrides JOBSCOPE_GRAPH_PATH)
        #[arg(long)]
        graph_path: Option<PathBuf>,

        /// JSON rule file replacing the built-in tagging rules
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Show the dataset summary and a sample of rows
    Info,

    /// Most frequent keywords and job title words
    Keywords {
        /// Keywords to list (default: 20)
        #[arg(long, default_value_t = TOP_KEYWORDS)]
        top: usize,

        /// Title words to list (default: 10)
        #[arg(long, default_value_t = TOP_TITLE_WORDS)]
        title_top: usize,
    },

    /// Tag postings with job characteristic rules
    Tags {
        /// JSON rule file replacing the built-in tagging rules
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Tagged postings to show (default: 5)
        #[arg(long, default_value_t = TAG_SAMPLE)]
        sample: usize,
    },

    /// Cluster postings into topics with LDA
    Topics {
        /// Number of topics (default: 5)
        #[arg(long, default_value_t = NUM_TOPICS)]
        topics: usize,

        /// Terms listed per topic (default: 7)
        #[arg(long, default_value_t = TOP_TERMS)]
        terms: usize,

        /// Gibbs sampling sweeps (default: 200)
        #[arg(long, default_value = "200")]
        iterations: usize,

        /// Random seed (default: 42)
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Count keyword pairs and optionally render the network
    Pairs {
        /// Pairs to list (default: 10)
        #[arg(long, default_value_t = TOP_PAIRS)]
        top: usize,

        /// Render the keyword co-occurrence network image
        #[arg(long)]
        graph: bool,

        /// Where to write the network image (overrides JOBSCOPE_GRAPH_PATH)
        #[arg(long)]
        graph_path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jobscope=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    config.require_columns()?;

    match cli.command {
        Commands::Analyze {
            graph,
            graph_path,
            rules,
            report,
        } => {
            let rules = RuleSet::load(rules.as_deref().or(config.rules_path.as_deref()))?;
            let dataset = pipeline::load(&config);

            let options = PipelineOptions {
                rules,
                topic_model: GibbsLda {
                    show_progress: true,
                    ..GibbsLda::default()
                },
                graph_path: graph.then(|| graph_path.unwrap_or_else(|| config.graph_path.clone())),
                ..PipelineOptions::default()
            };

            let results = pipeline::run(&dataset, &options);

            if let Some(path) = report {
                let written = jobscope::output::markdown::generate_report(&results, &path)?;
                println!("\n{}", format!("Markdown report saved to: {written}").bold());
            }

            println!("\n{}", "All analyses complete.".bold());
        }

        Commands::Info => {
            info!(path = %config.input_path.display(), "Inspecting dataset");
            pipeline::load(&config);
        }

        Commands::Keywords { top, title_top } => {
            let dataset = pipeline::load(&config);
            let options = PipelineOptions {
                stages: vec![Stage::Keywords],
                keyword_top: top,
                title_top,
                ..PipelineOptions::default()
            };
            pipeline::run(&dataset, &options);
        }

        Commands::Tags { rules, sample } => {
            let rules = RuleSet::load(rules.as_deref().or(config.rules_path.as_deref()))?;
            let dataset = pipeline::load(&config);
            let options = PipelineOptions {
                stages: vec![Stage::Tags],
                rules,
                tag_sample: sample,
                ..PipelineOptions::default()
            };
            pipeline::run(&dataset, &options);
        }

        Commands::Topics {
            topics,
            terms,
            iterations,
            seed,
        } => {
            let dataset = pipeline::load(&config);
            let options = PipelineOptions {
                stages: vec![Stage::Topics],
                topic_model: GibbsLda {
                    num_topics: topics,
                    iterations,
                    seed,
                    show_progress: true,
                    ..GibbsLda::default()
                },
                topic_terms: terms,
                ..PipelineOptions::default()
            };
            pipeline::run(&dataset, &options);
        }

        Commands::Pairs {
            top,
            graph,
            graph_path,
        } => {
            let dataset = pipeline::load(&config);
            let options = PipelineOptions {
                stages: vec![Stage::Pairs],
                pair_top: top,
                graph_path: graph.then(|| graph_path.unwrap_or_else(|| config.graph_path.clone())),
                ..PipelineOptions::default()
            };
            pipeline::run(&dataset, &options);
        }
    }

    Ok(())
}
