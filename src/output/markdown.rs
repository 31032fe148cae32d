// Markdown report generation.
//
// Writes every stage result of a pipeline run to a single markdown file so
// the analysis can be shared without re-running it.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::pipeline::{AnalysisResults, Stage};

/// Render the report as markdown text.
pub fn render_report(results: &AnalysisResults) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Job Posting Keyword Analysis\n");
    let _ = writeln!(
        md,
        "Generated {} from `{}` ({}): {} postings analyzed, {} dropped without keywords.\n",
        Local::now().format("%Y-%m-%d %H:%M"),
        results.dataset.source,
        results.dataset.encoding,
        results.records,
        results.dataset.rows_dropped
    );

    if let Some(report) = &results.keywords {
        let _ = writeln!(md, "## {}\n", Stage::Keywords.title());
        let _ = writeln!(
            md,
            "{} distinct keywords, {} occurrences.\n",
            report.distinct_keywords, report.total_keywords
        );
        write_count_table(&mut md, "Keyword", &report.top_keywords);
        write_count_table(&mut md, "Title word", &report.top_title_words);
    }

    if let Some(report) = &results.tags {
        let _ = writeln!(md, "## {}\n", Stage::Tags.title());
        write_count_table(&mut md, "Tag", &report.tag_counts);
        let _ = writeln!(md, "Untagged postings: {}\n", report.untagged);
    }

    if let Some(topics) = &results.topics {
        let _ = writeln!(md, "## {}\n", Stage::Topics.title());
        let _ = writeln!(md, "| Cluster | Top terms | Postings |");
        let _ = writeln!(md, "|---:|---|---:|");
        for topic in topics {
            let _ = writeln!(
                md,
                "| {} | {} | {} |",
                topic.number,
                escape_cell(&topic.label()),
                topic.documents
            );
        }
        md.push('\n');
    }

    if let Some(report) = &results.pairs {
        let _ = writeln!(md, "## {}\n", Stage::Pairs.title());
        let rows: Vec<(String, usize)> = report
            .top_pairs
            .iter()
            .map(|(pair, count)| (super::format_pair(pair), *count))
            .collect();
        write_count_table(&mut md, "Pair", &rows);
        if let Some(path) = &results.graph_path {
            let _ = writeln!(md, "Network graph: `{}`\n", path.display());
        }
    }

    if !results.failures.is_empty() {
        let _ = writeln!(md, "## Failed stages\n");
        for failure in &results.failures {
            let _ = writeln!(
                md,
                "- Analysis {} ({}): {}",
                failure.stage.number(),
                failure.stage.title(),
                failure.message
            );
        }
        md.push('\n');
    }

    md
}

/// Write the report to `path`, creating parent directories as needed.
/// Returns the path as written.
pub fn generate_report(results: &AnalysisResults, path: &str) -> Result<String> {
    let target = Path::new(path);
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }
    fs::write(target, render_report(results))
        .with_context(|| format!("Failed to write report to {path}"))?;
    Ok(path.to_string())
}

fn write_count_table(md: &mut String, label: &str, rows: &[(String, usize)]) {
    if rows.is_empty() {
        return;
    }
    let _ = writeln!(md, "| Rank | {label} | Count |");
    let _ = writeln!(md, "|---:|---|---:|");
    for (i, (item, count)) in rows.iter().enumerate() {
        let _ = writeln!(md, "| {} | {} | {} |", i + 1, escape_cell(item), count);
    }
    md.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
