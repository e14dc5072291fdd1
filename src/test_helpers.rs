//! Shared test utilities for the inkpress test suite.
//!
//! Two families of helpers:
//!
//! - **Source fixtures** ([`article_md`], [`write_article`]) produce markdown
//!   files with valid frontmatter for loader and build tests.
//! - **In-memory articles** ([`test_article`]) construct fully derived
//!   [`Article`] values so partitioner/feed/PWA tests can exercise pure
//!   pipeline logic without touching the filesystem.

use crate::articles::Article;
use crate::dates;
use chrono::NaiveDate;
use std::path::Path;

/// A minimal valid article source file.
///
/// The closing fence is followed by a blank line, so tests can splice extra
/// frontmatter fields with `.replace("---\n\n", "extra: value\n---\n\n")`.
pub fn article_md(slug: &str, date: &str, body: &str) -> String {
    format!(
        "---\n\
         slug: \"{slug}\"\n\
         title: \"Example Blog | {slug} | Blog Post\"\n\
         headline: \"{slug}\"\n\
         description: \"Description of {slug}\"\n\
         date: \"{date}\"\n\
         ---\n\n\
         {body}\n"
    )
}

/// Write `{slug}.md` into `dir` with a minimal valid frontmatter block.
pub fn write_article(dir: &Path, slug: &str, date: &str, body: &str) {
    std::fs::write(dir.join(format!("{slug}.md")), article_md(slug, date, body)).unwrap();
}

/// Construct a fully derived in-memory article for pure-function tests.
///
/// All derived fields are consistent with a site at `https://blog.test`.
/// Tests tweak public fields directly (`has_media`, `title`, ...) after
/// construction.
pub fn test_article(slug: &str, date: &str) -> Article {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Article {
        slug: slug.to_string(),
        title: format!("Example Blog | {slug} | Blog Post"),
        headline: slug.to_string(),
        description: format!("Description of {slug}"),
        date,
        keywords: vec![],
        image: None,
        sections: vec![],
        excerpt: None,
        has_media: false,
        draft: false,
        content: format!("<p>Content of {slug}</p>"),
        formatted_date: dates::format_long(date),
        canonical_url: format!("https://blog.test/articles/{slug}.html"),
        date_published: date,
        date_modified: date,
        toc_link: format!("./articles/{slug}.html"),
    }
}

/// A run of `n` articles, newest first, one day apart starting 2023-06-30.
pub fn test_articles(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| {
            let day = 30 - i as u32;
            test_article(&format!("article-{}", i + 1), &format!("2023-06-{day:02}"))
        })
        .collect()
}
