// Colored terminal output for every analysis stage.
//
// This module handles all terminal-specific formatting: colors and aligned
// tables. The pipeline and main.rs delegate here.

use colored::Colorize;

use crate::dataset::{Dataset, LoadError};
use crate::keywords::frequency::KeywordReport;
use crate::network::cooccurrence::PairReport;
use crate::tagging::tagger::TagReport;
use crate::topics::summary::TopicSummary;

/// Rows shown in the dataset sample.
pub const SAMPLE_ROWS: usize = 5;

/// Print a numbered stage banner.
pub fn display_stage_header(number: usize, title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{}", format!(" Analysis {number}: {title}").bold());
    println!("{}", "=".repeat(50));
}

/// Display what was loaded: source, encoding, columns and a short sample.
pub fn display_dataset(dataset: &Dataset) {
    let summary = dataset.summary();

    println!(
        "\n{}",
        format!(
            "Loaded '{}' ({}): {} rows, {} kept, {} dropped without keywords",
            summary.source,
            summary.encoding,
            summary.rows_read,
            dataset.len(),
            summary.rows_dropped
        )
        .bold()
    );

    if !summary.columns.is_empty() {
        println!("\n---------- [ Columns ] ----------");
        println!("  {:>3}  {:<30} {:>10}", "#".dimmed(), "Column".dimmed(), "Non-null".dimmed());
        for (i, column) in summary.columns.iter().enumerate() {
            println!("  {:>3}  {:<30} {:>10}", i, column.name, column.non_null);
        }
    }

    println!("\n---------- [ Sample ] ----------");
    if dataset.is_empty() {
        println!("  (no rows)");
        return;
    }
    for (i, record) in dataset.records().iter().take(SAMPLE_ROWS).enumerate() {
        let title = record.title.as_deref().unwrap_or("-");
        let keywords = record.keywords.as_text().unwrap_or("");
        println!(
            "  {:>3}  {:<24} {}",
            i,
            super::truncate_chars(title, 24),
            super::truncate_chars(keywords, 60).dimmed()
        );
    }
}

/// Display a loader failure. The run continues with an empty dataset.
pub fn display_load_error(error: &LoadError) {
    let hint = match error {
        LoadError::NotFound(_) => "Check the file location or set JOBSCOPE_INPUT.",
        LoadError::Decode(_) => "Save the file as CP949 or UTF-8 and try again.",
        LoadError::MissingColumn { .. } => {
            "Set JOBSCOPE_KEYWORD_COLUMN to the column holding the keyword list."
        }
        LoadError::Io { .. } | LoadError::Csv { .. } => "The file could not be read as CSV.",
    };
    println!("{} {}", "Error:".red().bold(), error);
    println!("  {}", hint.dimmed());
}

/// Display a failed stage. Later stages still run.
pub fn display_stage_error(number: usize, error: &anyhow::Error) {
    println!("{} {:#}", format!("Analysis {number} failed:").red(), error);
}

/// Display keyword and title word frequencies.
pub fn display_keyword_report(report: &KeywordReport) {
    println!(
        "\n{}",
        format!(
            "Most frequent keywords (top {}, {} distinct of {} total):",
            report.top_keywords.len(),
            report.distinct_keywords,
            report.total_keywords
        )
        .bold()
    );
    display_count_table("Keyword", &report.top_keywords);

    println!(
        "\n{}",
        format!(
            "Most frequent job title words (top {}):",
            report.top_title_words.len()
        )
        .bold()
    );
    display_count_table("Title word", &report.top_title_words);
}

fn display_count_table(label: &str, rows: &[(String, usize)]) {
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    println!("  {:>4}  {:<24} {:>6}", "Rank".dimmed(), label.dimmed(), "Count".dimmed());
    for (i, (item, count)) in rows.iter().enumerate() {
        println!("  {:>4}. {:<24} {:>6}", i + 1, item, count);
    }
}

/// Display tag counts and a sample of tagged postings.
pub fn display_tag_report(report: &TagReport, sample: usize) {
    println!("\n{}", "Tagged postings (sample):".bold());
    for (i, record) in report.records.iter().take(sample).enumerate() {
        let title = record.title.as_deref().unwrap_or("-");
        let tags = if record.tags.is_empty() {
            "(no tags)".dimmed()
        } else {
            record.tags.cyan()
        };
        println!("  {:>3}  {:<24} {}", i, super::truncate_chars(title, 24), tags);
    }

    println!("\n{}", "Postings per tag:".bold());
    for (tag, count) in &report.tag_counts {
        println!("  {:<20} {:>6}", tag, count);
    }
    if report.untagged > 0 {
        println!("  {:<20} {:>6}", "(untagged)".dimmed(), report.untagged);
    }
}

/// Display discovered topics with their top terms.
pub fn display_topics(topics: &[TopicSummary]) {
    println!("\n{}", "Discovered job clusters (topics):".bold());
    for topic in topics {
        println!(
            "  {} {}  {}",
            format!("Cluster #{}:", topic.number).bold(),
            topic.label(),
            format!("({} postings)", topic.documents).dimmed()
        );
    }
}

/// Display the most frequent keyword pairs.
pub fn display_pair_report(report: &PairReport) {
    if report.is_empty() {
        println!("\n{}", "No keyword pairs found; skipping network analysis.".yellow());
        return;
    }

    println!(
        "\n{}",
        format!(
            "Most common keyword pairs (top {}, {} distinct of {} total):",
            report.top_pairs.len(),
            report.distinct_pairs,
            report.total_pairs
        )
        .bold()
    );
    for (i, (pair, count)) in report.top_pairs.iter().enumerate() {
        println!("  {:>4}. {:<40} {:>6}", i + 1, super::format_pair(pair), count);
    }
}
