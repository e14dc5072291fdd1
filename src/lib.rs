//! # inkpress
//!
//! A minimal static blog generator with offline-first PWA output. Markdown
//! articles with YAML frontmatter go in; a deployable tree of HTML pages,
//! XML feeds, a web app manifest, and a versioned service worker comes out.
//!
//! # Architecture: One Collection, Many Views
//!
//! Every build loads the article sources once into a sorted, immutable
//! collection, then derives independent views from it:
//!
//! ```text
//! content/*.md ─→ articles (load, sort)
//!                    ├─→ pages     → index.html, articles/*.html, articles/page/N.html
//!                    ├─→ feeds     → sitemap.xml, rss.xml
//!                    └─→ pwa       → manifest.webmanifest, sw.js
//! ```
//!
//! The derivations must stay mutually consistent: the same article set
//! appears exactly once in the sitemap, the RSS feed, the pagination pages,
//! and the service worker's pre-cache list. That consistency falls out of
//! the structure — each generator is a pure function of the one collection
//! (and of the one shared page partition), so there is no second source of
//! truth to drift.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, validation, stock config generation |
//! | [`dates`] | Long-form, sitemap ISO 8601, and RSS RFC 822 date renderings |
//! | [`articles`] | Loads frontmatter + markdown, derives URLs/dates, filters drafts, sorts |
//! | [`pages`] | Partitions the collection into index subset and numbered listing pages |
//! | [`render`] | Maud templates for article, index, listing, and 404 pages |
//! | [`feeds`] | Sitemap and RSS built from typed records with XML escaping |
//! | [`pwa`] | Web app manifest and versioned stale-while-revalidate service worker |
//! | [`assets`] | Copies configured static files/directories to the output root |
//! | [`scaffold`] | `new` subcommand: frontmatter template with slugified filename |
//! | [`build`] | Orchestrates a full build, returns a summary for reporting |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template engine:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship, go missing, or get out of sync.
//!
//! The original class of "missing template file aborts the build" errors is
//! eliminated by construction.
//!
//! ## Structured Builders for Generated Documents
//!
//! Feeds and the manifest are assembled from typed records (`SitemapUrl`,
//! `RssItem`, serde-serialized `Manifest`) rather than string templating.
//! Article titles and descriptions are user-supplied text; routing them
//! through an escaping serializer keeps injection bugs out of the generated
//! markup.
//!
//! ## Explicit Draft Mode
//!
//! Whether drafts are included is a [`articles::BuildMode`] value threaded
//! into the loader call — a CLI flag, not an ambient environment variable.
//! Library callers and tests control it per invocation.
//!
//! ## Stale-While-Revalidate Service Worker
//!
//! Every generated site is a PWA with a service worker using a
//! stale-while-revalidate caching strategy: visitors get instant loads from
//! cache while fresh content is fetched in the background. The cache is
//! named by a per-build version token, so deploying a new build invalidates
//! old caches wholesale at activation.

pub mod articles;
pub mod assets;
pub mod build;
pub mod config;
pub mod dates;
pub mod feeds;
pub mod output;
pub mod pages;
pub mod pwa;
pub mod render;
pub mod scaffold;

#[cfg(test)]
pub(crate) mod test_helpers;
