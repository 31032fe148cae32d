// CSV loader for job posting exports.
//
// The exports come out of Korean spreadsheet tools, so the primary encoding
// is CP949 (Windows Korean, a superset of EUC-KR). Files saved as UTF-8 fall
// back to a strict UTF-8 decode. A UTF-8 byte order mark skips the CP949
// attempt entirely, since a BOM is itself a valid CP949 byte pair.
//
// Failures never abort the run: the caller degrades to an empty dataset and
// every later stage becomes a no-op.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use encoding_rs::{EUC_KR, UTF_8};
use thiserror::Error;
use tracing::{info, warn};

use super::models::{ColumnSummary, Dataset, DatasetSummary, KeywordField, Record};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// The failure kinds the loader distinguishes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} could not be decoded as CP949 or UTF-8", .0.display())]
    Decode(PathBuf),

    #[error("malformed CSV in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("column '{column}' not found in {source_name}")]
    MissingColumn { column: String, source_name: String },
}

/// Which decoder produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Cp949,
    Utf8,
}

impl SourceEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cp949 => "cp949",
            Self::Utf8 => "utf-8",
        }
    }
}

/// Column names the loader looks up in the header row.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions<'a> {
    pub keyword_column: &'a str,
    pub title_column: &'a str,
}

impl Default for LoadOptions<'static> {
    fn default() -> Self {
        Self {
            keyword_column: crate::config::DEFAULT_KEYWORD_COLUMN,
            title_column: crate::config::DEFAULT_TITLE_COLUMN,
        }
    }
}

/// Decode raw file bytes, trying CP949 first and strict UTF-8 second.
///
/// Both decoders run without replacement: a single malformed sequence
/// fails that decoder instead of producing U+FFFD.
pub fn decode(bytes: &[u8]) -> Option<(Cow<'_, str>, SourceEncoding)> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return UTF_8
            .decode_without_bom_handling_and_without_replacement(rest)
            .map(|text| (text, SourceEncoding::Utf8));
    }

    if let Some(text) = EUC_KR.decode_without_bom_handling_and_without_replacement(bytes) {
        return Some((text, SourceEncoding::Cp949));
    }

    warn!("CP949 decode failed, retrying as UTF-8");
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| (text, SourceEncoding::Utf8))
}

/// Read, decode and parse a job posting CSV file.
pub fn load_dataset(path: &Path, options: LoadOptions<'_>) -> Result<Dataset, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let (text, encoding) = decode(&bytes).ok_or_else(|| LoadError::Decode(path.to_path_buf()))?;

    let dataset = parse_csv(&text, options, &path.display().to_string(), encoding)?;

    info!(
        path = %path.display(),
        encoding = encoding.label(),
        rows = dataset.len(),
        dropped = dataset.summary().rows_dropped,
        "Loaded job postings"
    );

    Ok(dataset)
}

/// Load a dataset, degrading any failure to an empty dataset.
///
/// The error is logged and handed back alongside so callers can print
/// their own diagnostic.
pub fn load_or_empty(path: &Path, options: LoadOptions<'_>) -> (Dataset, Option<LoadError>) {
    match load_dataset(path, options) {
        Ok(dataset) => (dataset, None),
        Err(e) => {
            warn!(error = %e, "Load failed, continuing with an empty dataset");
            (Dataset::empty(), Some(e))
        }
    }
}

/// Parse decoded CSV text into a dataset.
///
/// Rows whose keyword cell is empty are dropped. The title column is
/// optional: when absent every record simply has no title.
pub fn parse_csv(
    text: &str,
    options: LoadOptions<'_>,
    source_name: &str,
    encoding: SourceEncoding,
) -> Result<Dataset, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let keyword_idx = headers
        .iter()
        .position(|h| h == options.keyword_column)
        .ok_or_else(|| LoadError::MissingColumn {
            column: options.keyword_column.to_string(),
            source_name: source_name.to_string(),
        })?;

    let title_idx = headers.iter().position(|h| h == options.title_column);
    if title_idx.is_none() {
        warn!(
            column = options.title_column,
            "Title column not found, title words will be empty"
        );
    }

    let mut non_null = vec![0usize; headers.len()];
    let mut records = Vec::new();
    let mut rows_read = 0;

    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        rows_read += 1;

        let keywords = KeywordField::from_cell(row.get(keyword_idx));
        if keywords.is_missing() {
            continue;
        }

        for (i, count) in non_null.iter_mut().enumerate() {
            if row.get(i).is_some_and(|cell| !cell.is_empty()) {
                *count += 1;
            }
        }

        let title = title_idx
            .and_then(|i| row.get(i))
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        records.push(Record::new(title, keywords));
    }

    let columns = headers
        .into_iter()
        .zip(non_null)
        .map(|(name, non_null)| ColumnSummary { name, non_null })
        .collect();

    let summary = DatasetSummary {
        source: source_name.to_string(),
        encoding: encoding.label().to_string(),
        rows_read,
        rows_dropped: rows_read - records.len(),
        columns,
    };

    Ok(Dataset::new(records, summary))
}
