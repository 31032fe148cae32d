// Data models for the loaded job posting table.
//
// Records are rows of an in-memory table with no identity beyond their
// position. The dataset is built once by the loader and then only read:
// every analysis stage takes `&Dataset` and returns its own result type.

use serde::{Deserialize, Serialize};

/// Separator between keywords in the raw keyword field.
pub const KEYWORD_SEPARATOR: &str = ", ";

/// The raw keyword cell of a posting, resolved once at load time.
///
/// CSV has no null, so an empty cell is the only way a keyword field can be
/// absent. Stages match on this instead of re-checking the cell type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordField {
    Missing,
    Text(String),
}

impl KeywordField {
    /// Resolve a raw CSV cell. Empty cells become `Missing`.
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell {
            Some(text) if !text.is_empty() => Self::Text(text.to_string()),
            _ => Self::Missing,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Split the field into its ordered keyword list.
    ///
    /// Splits on the literal ", " separator only. Tokens are not trimmed,
    /// so "a,b" stays a single keyword.
    pub fn split(&self) -> Vec<String> {
        match self {
            Self::Text(text) => text.split(KEYWORD_SEPARATOR).map(str::to_string).collect(),
            Self::Missing => Vec::new(),
        }
    }
}

/// One job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Raw title text, if the row had one
    pub title: Option<String>,
    /// Raw keyword field
    pub keywords: KeywordField,
    /// Keywords split from the raw field, in their original order
    pub keyword_list: Vec<String>,
}

impl Record {
    pub fn new(title: Option<String>, keywords: KeywordField) -> Self {
        let keyword_list = keywords.split();
        Self {
            title,
            keywords,
            keyword_list,
        }
    }

    /// Convenience constructor for a posting with keyword text.
    pub fn with_keywords(title: &str, keywords: &str) -> Self {
        let title = if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        };
        Self::new(title, KeywordField::from_cell(Some(keywords)))
    }

    /// Whitespace-separated words of the title (empty when there is no title).
    pub fn title_words(&self) -> impl Iterator<Item = &str> {
        self.title.as_deref().unwrap_or("").split_whitespace()
    }
}

/// Per-column statistics reported after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Non-empty cells among the kept rows
    pub non_null: usize,
}

/// What the loader saw: where the data came from and how much survived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Display form of the source path
    pub source: String,
    /// Name of the encoding that decoded the file
    pub encoding: String,
    /// Data rows read from the file (header excluded)
    pub rows_read: usize,
    /// Rows dropped because their keyword field was missing
    pub rows_dropped: usize,
    pub columns: Vec<ColumnSummary>,
}

/// The immutable table of postings threaded through every stage.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    summary: DatasetSummary,
}

impl Dataset {
    pub fn new(records: Vec<Record>, summary: DatasetSummary) -> Self {
        Self { records, summary }
    }

    /// Build a dataset directly from records (no file behind it).
    ///
    /// Records with a missing keyword field are dropped, same as the loader.
    pub fn from_records(records: Vec<Record>) -> Self {
        let rows_read = records.len();
        let records: Vec<Record> = records
            .into_iter()
            .filter(|r| !r.keywords.is_missing())
            .collect();
        let summary = DatasetSummary {
            source: "<memory>".to_string(),
            encoding: "utf-8".to_string(),
            rows_read,
            rows_dropped: rows_read - records.len(),
            columns: Vec::new(),
        };
        Self { records, summary }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
