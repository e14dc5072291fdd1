//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! an article is its headline and date, with the source file shown as an
//! indented `Source:` context line.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::articles::Article;
use crate::build::BuildSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format `check` output: the discovered article collection, newest first.
pub fn format_check_output(articles: &[Article]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Articles".to_string());
    for (i, article) in articles.iter().enumerate() {
        let draft = if article.draft { " [draft]" } else { "" };
        lines.push(format!(
            "{} {} ({}){draft}",
            format_index(i + 1),
            article.headline,
            article.formatted_date
        ));
        lines.push(format!("    Source: {}.md", article.slug));
    }
    lines.push(String::new());
    lines.push(format!("{} articles", articles.len()));
    lines
}

pub fn print_check_output(articles: &[Article]) {
    for line in format_check_output(articles) {
        println!("{line}");
    }
}

/// Format `build` output: generated files, asset warnings, totals.
pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for rel in &summary.generated {
        lines.push(format!("Generated: {rel}"));
    }
    for asset in &summary.missing_assets {
        lines.push(format!("Warning: asset not found: {asset}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {} articles, {} listing pages",
        summary.articles, summary.listing_pages
    ));
    lines
}

pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{line}");
    }
}
