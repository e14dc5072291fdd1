//! Build orchestration.
//!
//! Runs the whole pipeline for one invocation:
//!
//! ```text
//! load articles ─→ partition ─→ render pages     (index, articles, listing, 404)
//!              └─→ feeds                          (sitemap.xml, rss.xml)
//!              └─→ pwa                            (manifest.webmanifest, sw.js)
//!              └─→ copy static assets
//! ```
//!
//! All generators consume the same immutable sorted collection; the page
//! partition is computed once and shared between the renderer and the
//! service worker cache list, which is what keeps the generated HTML, the
//! feeds, and the pre-cache list enumerating the same set of URLs.
//!
//! The output directory is cleaned first. Any individual file failure aborts
//! the build — a partially written static site is not a meaningful artifact.

use crate::articles::{self, Article, BuildMode};
use crate::assets;
use crate::config::SiteConfig;
use crate::pages::{self, listing_url_path};
use crate::{feeds, pwa, render};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Load(#[from] articles::LoadError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What one build produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildSummary {
    /// Number of articles in the built collection.
    pub articles: usize,
    /// Number of numbered listing pages.
    pub listing_pages: usize,
    /// Output-relative paths of every generated file, in generation order.
    pub generated: Vec<String>,
    /// Configured assets that were not found (warned, not fatal).
    pub missing_assets: Vec<String>,
}

/// Run a full build: `root` is the project root (config + static assets),
/// `content_dir` holds the article sources, `output_dir` receives the site.
pub fn build(
    root: &Path,
    content_dir: &Path,
    output_dir: &Path,
    config: &SiteConfig,
    mode: BuildMode,
) -> Result<BuildSummary, BuildError> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;

    let collection = articles::load(content_dir, config, mode)?;
    let set = pages::partition(
        &collection,
        config.listing.articles_per_index,
        config.listing.articles_per_page,
    );

    let mut generated = Vec::new();
    let mut emit = |rel: &str, content: String| -> std::io::Result<()> {
        let path = output_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        generated.push(rel.to_string());
        Ok(())
    };

    // Article pages
    for article in &collection {
        emit(
            &format!("articles/{}.html", article.slug),
            render::render_article(article, config).into_string(),
        )?;
    }

    // Homepage: index subset + full TOC with root-level links
    let toc_root = pages::toc_at_root(&collection);
    emit(
        "index.html",
        render::render_index(set.index, &toc_root, config).into_string(),
    )?;

    // Listing pages: both display entries and TOC climb one level
    let toc_listing = pages::toc_in_listing(&collection);
    for page in &set.listing {
        let display = pages::toc_in_listing(page.articles);
        emit(
            listing_url_path(page.number).trim_start_matches('/'),
            render::render_listing(
                page.number,
                &display,
                &toc_listing,
                page.has_next,
                page.has_media,
                config,
            )
            .into_string(),
        )?;
    }

    emit("404.html", render::render_not_found(config).into_string())?;

    // Feeds
    emit("sitemap.xml", feeds::render_sitemap(&collection, config))?;
    emit("rss.xml", feeds::render_rss(&collection, config))?;

    // PWA artifacts
    emit(
        "manifest.webmanifest",
        pwa::render_manifest(&collection, config)?,
    )?;
    let version = pwa::version_token();
    let cache_urls = pwa::cache_urls(&collection, &set, config);
    emit("sw.js", pwa::render_service_worker(&version, &cache_urls))?;

    let listing_pages = set.listing.len();
    let missing_assets = assets::copy_assets(&config.static_assets, root, output_dir)?;

    Ok(BuildSummary {
        articles: collection.len(),
        listing_pages,
        generated,
        missing_assets,
    })
}

/// Validate the content directory without writing anything.
pub fn check(
    content_dir: &Path,
    config: &SiteConfig,
    mode: BuildMode,
) -> Result<Vec<Article>, BuildError> {
    Ok(articles::load(content_dir, config, mode)?)
}
