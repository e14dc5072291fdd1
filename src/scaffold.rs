//! Article scaffolding for the `new` subcommand.
//!
//! `inkpress new "My Article Title"` writes `content/my-article-title.md`
//! with a filled-in frontmatter template: today's date, `draft: true`, and
//! the title wrapped in the site's SEO decorations. Creating over an
//! existing file is an error and leaves it untouched.

use crate::config::SiteConfig;
use crate::dates;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("article already exists at {0}")]
    AlreadyExists(PathBuf),
    #[error("title '{0}' produces an empty slug")]
    EmptySlug(String),
}

/// Convert a free-text title to a URL-safe slug.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single dash, and trims leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// The frontmatter + body template for a freshly scaffolded article.
pub fn article_template(
    slug: &str,
    title: &str,
    today: NaiveDate,
    config: &SiteConfig,
) -> String {
    let date = today.format("%Y-%m-%d");
    let decorated = format!("{}{}{}", config.title_prefix, title, config.title_suffix);
    format!(
        r#"---
slug: "{slug}"
title: "{decorated}"
headline: "{title}"
description: "{decorated}"
date: "{date}"
modified: "{date}"
keywords:
  - blog
sections:
  - Introduction
  - Conclusion
excerpt: "Add a brief excerpt here that summarizes the article..."
has_media: false
draft: true
---

## Introduction

Start writing your article here...

## Conclusion

Wrap up your article here...
"#
    )
}

/// Create a new article file under `content_dir`. Returns the path written.
pub fn create_article(
    content_dir: &Path,
    title: &str,
    config: &SiteConfig,
) -> Result<PathBuf, ScaffoldError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ScaffoldError::EmptySlug(title.to_string()));
    }
    let path = content_dir.join(format!("{slug}.md"));
    if path.exists() {
        return Err(ScaffoldError::AlreadyExists(path));
    }
    fs::create_dir_all(content_dir)?;
    fs::write(&path, article_template(&slug, title, dates::today(), config))?;
    Ok(path)
}
