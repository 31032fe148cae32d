// Jobscope: keyword analysis for job posting datasets
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline, plus the shared dataset and output layers.

pub mod config;
pub mod dataset;
pub mod keywords;
pub mod network;
pub mod output;
pub mod pipeline;
pub mod tagging;
pub mod topics;
