// Rule-based job characteristic tagging.

pub mod rules;
pub mod tagger;
