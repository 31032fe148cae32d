// Keyword frequency analysis: stable counting and top-N reports.

pub mod counter;
pub mod frequency;
