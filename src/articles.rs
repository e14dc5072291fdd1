//! Article loading and processing.
//!
//! Reads every `.md` file in the content directory, splits YAML frontmatter
//! from the markdown body, renders the body to HTML, and computes the derived
//! fields the rest of the pipeline consumes. The result is an immutable,
//! newest-first collection: downstream stages derive new views from it (see
//! [`crate::pages`]) and never mutate it.
//!
//! ## Source format
//!
//! ```text
//! ---
//! slug: "my-article"
//! title: "Example Blog | My Article | Blog Post"
//! headline: "My Article"
//! description: "What the article is about"
//! date: "2023-06-15"
//! modified: "2023-06-20"      # optional, defaults to date
//! keywords: [rust, blogging]  # optional
//! has_media: true             # optional — page embeds video/rich media
//! draft: true                 # optional — excluded from production builds
//! ---
//!
//! ## Markdown body...
//! ```
//!
//! ## Failure policy
//!
//! A file that does not parse — missing frontmatter fence, malformed YAML,
//! missing required field — fails the whole build naming the offending file.
//! A partial site is worse than no site: every generated document (sitemap,
//! RSS, service worker cache list) enumerates the full article set, so a
//! silently dropped article would leave them inconsistent.
//!
//! Duplicate slugs are rejected for the same reason: two articles colliding
//! on `articles/{slug}.html` would silently overwrite each other.

use crate::config::SiteConfig;
use crate::dates;
use chrono::NaiveDate;
use pulldown_cmark::{Options, Parser, html};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: missing frontmatter block (expected leading `---` fence)")]
    MissingFrontmatter { path: PathBuf },
    #[error("{path}: invalid frontmatter: {source}")]
    Frontmatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("duplicate slug '{slug}' in {path} (already used by {first})")]
    DuplicateSlug {
        slug: String,
        path: PathBuf,
        first: PathBuf,
    },
}

/// Whether draft-flagged articles are included in the build.
///
/// Threaded explicitly into [`load`] rather than read from the environment,
/// so library callers and tests control it per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Drafts excluded.
    Production,
    /// Drafts included.
    Development,
}

impl BuildMode {
    pub fn includes_drafts(self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

/// Raw article metadata as written in the frontmatter block.
#[derive(Debug, Clone, Deserialize)]
pub struct Frontmatter {
    pub slug: String,
    pub title: String,
    pub headline: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub modified: Option<NaiveDate>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub has_media: bool,
    #[serde(default)]
    pub draft: bool,
}

/// A fully loaded article: frontmatter plus fields derived once at load time.
#[derive(Debug, Clone)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub headline: String,
    pub description: String,
    pub date: NaiveDate,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    pub sections: Vec<String>,
    pub excerpt: Option<String>,
    pub has_media: bool,
    pub draft: bool,
    /// Markdown body rendered to HTML.
    pub content: String,
    /// Long-form display date, e.g. "15th June 2023".
    pub formatted_date: String,
    /// Absolute URL: `{site_url}/articles/{slug}.html`.
    pub canonical_url: String,
    pub date_published: NaiveDate,
    /// Explicit `modified` frontmatter value, or the publish date.
    pub date_modified: NaiveDate,
    /// Relative link used in tables of contents. Defaults to the root-level
    /// form; listing pages carry records with this field rewritten (see
    /// [`crate::pages::toc_in_listing`]).
    pub toc_link: String,
}

/// Site-root-relative URL path for an article page.
pub fn article_url_path(slug: &str) -> String {
    format!("/articles/{slug}.html")
}

/// Render a markdown body to HTML.
fn render_markdown(body: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(body.trim(), options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Split a source file into its frontmatter block and markdown body.
///
/// The file must start with a `---` fence line; the frontmatter runs until
/// the next `---` fence. Returns `(yaml, body)`.
fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    let end = rest.find("\n---").map(|pos| {
        let after = &rest[pos + 4..];
        let after = after
            .strip_prefix("\r\n")
            .or_else(|| after.strip_prefix('\n'))
            .unwrap_or(after);
        (&rest[..pos + 1], after)
    })?;
    Some(end)
}

fn article_from_file(path: &Path, config: &SiteConfig) -> Result<Article, LoadError> {
    let raw = fs::read_to_string(path)?;
    let (yaml, body) = split_frontmatter(&raw).ok_or_else(|| LoadError::MissingFrontmatter {
        path: path.to_path_buf(),
    })?;
    let fm: Frontmatter = serde_yaml::from_str(yaml).map_err(|source| LoadError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;

    let date_modified = fm.modified.unwrap_or(fm.date);

    Ok(Article {
        content: render_markdown(body),
        formatted_date: dates::format_long(fm.date),
        canonical_url: format!("{}{}", config.site_url, article_url_path(&fm.slug)),
        date_published: fm.date,
        date_modified,
        toc_link: format!("./articles/{}.html", fm.slug),
        slug: fm.slug,
        title: fm.title,
        headline: fm.headline,
        description: fm.description,
        date: fm.date,
        keywords: fm.keywords,
        image: fm.image,
        sections: fm.sections,
        excerpt: fm.excerpt,
        has_media: fm.has_media,
        draft: fm.draft,
    })
}

/// Load every article in `content_dir`, newest first.
///
/// Drafts are filtered out unless `mode` is [`BuildMode::Development`]. The
/// sort is stable and files are visited in filename order, so articles
/// sharing a publish date keep a deterministic relative order.
pub fn load(
    content_dir: &Path,
    config: &SiteConfig,
    mode: BuildMode,
) -> Result<Vec<Article>, LoadError> {
    let mut files: Vec<PathBuf> = fs::read_dir(content_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();

    let mut articles = Vec::with_capacity(files.len());
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    for path in &files {
        let article = article_from_file(path, config)?;
        if let Some(first) = seen.get(&article.slug) {
            return Err(LoadError::DuplicateSlug {
                slug: article.slug,
                path: path.clone(),
                first: first.clone(),
            });
        }
        seen.insert(article.slug.clone(), path.clone());
        if article.draft && !mode.includes_drafts() {
            continue;
        }
        articles.push(article);
    }

    articles.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(articles)
}
