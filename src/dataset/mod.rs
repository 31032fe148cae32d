// Dataset loading: CSV decoding, keyword field resolution, and the
// immutable record table every analysis stage reads from.

pub mod loader;
pub mod models;

pub use loader::{load_dataset, load_or_empty, LoadError, LoadOptions, SourceEncoding};
pub use models::{ColumnSummary, Dataset, DatasetSummary, KeywordField, Record};
