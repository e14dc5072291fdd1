//! Site configuration module.
//!
//! Handles loading and validating `site.toml` from the project root. All
//! options have stock defaults, so a config file is optional and sparse —
//! override just the values you want:
//!
//! ```toml
//! site_url = "https://example.dev"
//! title = "Example Blog | Technology and Engineering"
//! short_title = "Example Blog"
//!
//! [listing]
//! articles_per_index = 3    # Articles shown on the homepage
//! articles_per_page = 2     # Articles per numbered listing page
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Why the homepage lastmod is configurable
//!
//! The sitemap gives the homepage its own `<lastmod>`, tracked independently
//! of any article (the homepage layout changes on redesigns, not on posts).
//! It lives in config rather than being derived from build time so that
//! rebuilding an unchanged site does not churn the sitemap.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site URL, no trailing slash (e.g. `https://example.dev`).
    pub site_url: String,
    /// Full site title — RSS channel title and manifest name.
    pub title: String,
    /// Short site title — manifest `short_name` and the home shortcut label.
    pub short_title: String,
    /// Site description — meta description, RSS channel, manifest.
    pub description: String,
    /// BCP 47 language tag (e.g. `en-GB`).
    pub language: String,
    /// RSS channel `<category>`.
    pub feed_category: String,
    /// Web app manifest categories.
    pub categories: Vec<String>,
    /// SEO decoration prepended to article titles (e.g. `"My Blog | "`).
    /// Stripped when deriving manifest shortcut short names.
    pub title_prefix: String,
    /// SEO decoration appended to article titles (e.g. `" | Blog Post"`).
    pub title_suffix: String,
    /// Listing/pagination settings.
    pub listing: ListingConfig,
    /// PWA theme settings.
    pub theme: ThemeConfig,
    /// Date shown as the homepage `<lastmod>` in the sitemap.
    pub homepage_lastmod: NaiveDate,
    /// Stylesheet URL paths pre-cached by the service worker.
    pub stylesheets: Vec<String>,
    /// Files and directories copied verbatim from the project root to the
    /// output root. Missing entries warn, they never fail the build.
    pub static_assets: Vec<String>,
}

/// Listing/pagination settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Number of articles shown on the homepage (page 1).
    pub articles_per_index: usize,
    /// Number of articles per numbered listing page.
    pub articles_per_page: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            articles_per_index: 3,
            articles_per_page: 2,
        }
    }
}

/// PWA theme settings, emitted into the web app manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Manifest `theme_color`.
    pub theme_color: String,
    /// Manifest `background_color`.
    pub background_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme_color: "#fafafa".to_string(),
            background_color: "#fafafa".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://example.dev".to_string(),
            title: "Example Blog | Technology, DevOps and Developer Blog".to_string(),
            short_title: "Example Blog".to_string(),
            description:
                "Example Blog | Focusing on DevOps, Developer Experience and all aspects of Technology"
                    .to_string(),
            language: "en-GB".to_string(),
            feed_category: "Web Development".to_string(),
            categories: vec!["education".to_string(), "technology".to_string()],
            title_prefix: "Example Blog | ".to_string(),
            title_suffix: " | Blog Post".to_string(),
            listing: ListingConfig::default(),
            theme: ThemeConfig::default(),
            // Stock value mirrors a site relaunch date; override per site.
            homepage_lastmod: NaiveDate::from_ymd_opt(2021, 1, 31).expect("valid date"),
            stylesheets: vec!["/css/hyde.css".to_string(), "/css/poole.css".to_string()],
            static_assets: vec![
                "css".to_string(),
                "img".to_string(),
                "favicon.ico".to_string(),
                "icon.png".to_string(),
                "tile.png".to_string(),
                "robots.txt".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_url.is_empty() {
            return Err(ConfigError::Validation("site_url must not be empty".into()));
        }
        if self.site_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site_url must not end with a trailing slash".into(),
            ));
        }
        if self.listing.articles_per_index == 0 {
            return Err(ConfigError::Validation(
                "listing.articles_per_index must be at least 1".into(),
            ));
        }
        if self.listing.articles_per_page == 0 {
            return Err(ConfigError::Validation(
                "listing.articles_per_page must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Load `site.toml` from the project root.
///
/// A missing file yields stock defaults; a present but malformed or invalid
/// file is an error.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("site.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `site.toml`, printed by the `gen-config` subcommand.
///
/// Kept as a literal so the comments survive; the round-trip test pins it to
/// the in-code defaults.
pub fn stock_config_toml() -> &'static str {
    r##"# inkpress site configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.

# Absolute site URL, no trailing slash.
site_url = "https://example.dev"

# Full and short site titles: RSS channel / manifest name, and the
# manifest short_name / home shortcut label.
title = "Example Blog | Technology, DevOps and Developer Blog"
short_title = "Example Blog"

description = "Example Blog | Focusing on DevOps, Developer Experience and all aspects of Technology"

# BCP 47 language tag.
language = "en-GB"

# RSS channel <category> and web app manifest categories.
feed_category = "Web Development"
categories = ["education", "technology"]

# SEO decorations around article titles; stripped when deriving manifest
# shortcut labels.
title_prefix = "Example Blog | "
title_suffix = " | Blog Post"

# Date shown as the homepage <lastmod> in the sitemap. Bump on redesigns;
# article entries track their own modified dates.
homepage_lastmod = "2021-01-31"

# Stylesheet URL paths, linked from every page and pre-cached by the
# service worker.
stylesheets = ["/css/hyde.css", "/css/poole.css"]

# Files and directories copied verbatim from the project root to the
# output root. Missing entries warn, they never fail the build.
static_assets = ["css", "img", "favicon.ico", "icon.png", "tile.png", "robots.txt"]

[listing]
# Articles shown on the homepage.
articles_per_index = 3
# Articles per numbered listing page (pages start at 2).
articles_per_page = 2

[theme]
# Web app manifest colors.
theme_color = "#fafafa"
background_color = "#fafafa"
"##
}
