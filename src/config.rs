use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "job_code.csv";
/// Column holding the comma-space separated keyword list.
pub const DEFAULT_KEYWORD_COLUMN: &str = "keywords_bert";
/// Column holding the posting's job title.
pub const DEFAULT_TITLE_COLUMN: &str = "Title_ko";
/// Where the co-occurrence network image is written.
pub const DEFAULT_GRAPH_PATH: &str = "task_network.svg";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default, so an empty environment reproduces the fixed
/// constants of the analysis. CLI flags override individual fields.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub keyword_column: String,
    pub title_column: String,
    pub graph_path: PathBuf,
    /// Optional JSON rule file replacing the built-in tagging rules
    pub rules_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            keyword_column: DEFAULT_KEYWORD_COLUMN.to_string(),
            title_column: DEFAULT_TITLE_COLUMN.to_string(),
            graph_path: PathBuf::from(DEFAULT_GRAPH_PATH),
            rules_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let rules_path = env::var("JOBSCOPE_RULES")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            input_path: env::var("JOBSCOPE_INPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_path),
            keyword_column: env::var("JOBSCOPE_KEYWORD_COLUMN")
                .unwrap_or(defaults.keyword_column),
            title_column: env::var("JOBSCOPE_TITLE_COLUMN").unwrap_or(defaults.title_column),
            graph_path: env::var("JOBSCOPE_GRAPH_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.graph_path),
            rules_path,
        })
    }

    /// Check that the column names are usable.
    /// Call this before loading so a typo surfaces as a config error
    /// instead of an empty dataset.
    pub fn require_columns(&self) -> Result<()> {
        if self.keyword_column.trim().is_empty() {
            anyhow::bail!(
                "JOBSCOPE_KEYWORD_COLUMN is empty. Unset it to use the default ({DEFAULT_KEYWORD_COLUMN})."
            );
        }
        if self.title_column.trim().is_empty() {
            anyhow::bail!(
                "JOBSCOPE_TITLE_COLUMN is empty. Unset it to use the default ({DEFAULT_TITLE_COLUMN})."
            );
        }
        Ok(())
    }
}
