//! PWA artifact generation: `manifest.webmanifest` and `sw.js`.
//!
//! ## Web app manifest
//!
//! Serialized from typed records via serde_json, never string-assembled.
//! The shortcuts list is one fixed "home" entry followed by up to six of the
//! most recent articles; shortcut labels are derived from article titles by
//! [`shorten_title`].
//!
//! ## Service worker
//!
//! The generated `sw.js` is the one piece of runtime logic this crate ships:
//! a stale-while-revalidate cache with wholesale generation eviction.
//!
//! - The cache name is a version token unique per build (build-time millis in
//!   base 36), so deploying a new build invalidates every older cache.
//! - Install pre-caches every URL the build produced: root, the worker
//!   itself, the 404 page, the configured stylesheets, every article page,
//!   every listing page. This list must agree with what the renderer wrote;
//!   both derive from the same partition (see [`crate::pages`]).
//! - Fetch: non-GET requests pass through; navigations fall back to the
//!   cached homepage when the network fails; every other GET is answered
//!   from cache when possible, with a background re-fetch refreshing the
//!   entry. Cache misses go to the network and populate the cache.
//!   Cross-origin responses are never cached.
//! - Activate deletes every cache whose name is not the current version.
//!
//! Fetch events overlap in the browser; the worker relies on the Cache
//! Storage API's atomic `put` for concurrent writes to the same cache name
//! and takes no locks of its own.

use crate::articles::{Article, article_url_path};
use crate::config::SiteConfig;
use crate::pages::PageSet;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of article shortcuts in the manifest.
const MAX_SHORTCUTS: usize = 6;
/// Character budget for a shortcut short name.
const SHORT_NAME_MAX: usize = 40;
/// Truncation point when the budget is exceeded; an ellipsis is appended.
const SHORT_NAME_TRUNCATED: usize = 37;

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub short_name: String,
    pub name: String,
    pub icons: Vec<ManifestIcon>,
    pub start_url: String,
    pub scope: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: String,
    pub categories: Vec<String>,
    pub description: String,
    pub dir: String,
    pub lang: String,
    pub shortcuts: Vec<ManifestShortcut>,
}

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    #[serde(rename = "type")]
    pub icon_type: String,
    pub sizes: String,
    pub purpose: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ManifestShortcut {
    pub name: String,
    pub url: String,
    pub short_name: String,
}

/// Derive a shortcut display name from a decorated article title.
///
/// Strips the site's SEO decorations (leading prefix, trailing suffix) and
/// truncates to the OS shortcut budget: titles over 40 characters become the
/// first 37 plus `...`.
pub fn shorten_title(title: &str, prefix: &str, suffix: &str) -> String {
    let stripped = title.strip_prefix(prefix).unwrap_or(title);
    let stripped = stripped.strip_suffix(suffix).unwrap_or(stripped);
    if stripped.chars().count() > SHORT_NAME_MAX {
        let mut short: String = stripped.chars().take(SHORT_NAME_TRUNCATED).collect();
        short.push_str("...");
        short
    } else {
        stripped.to_string()
    }
}

/// Shortcut entries: the fixed home entry plus the most recent articles.
pub fn manifest_shortcuts(articles: &[Article], config: &SiteConfig) -> Vec<ManifestShortcut> {
    let mut shortcuts = Vec::with_capacity(MAX_SHORTCUTS + 1);
    shortcuts.push(ManifestShortcut {
        name: config.title.clone(),
        url: "/".to_string(),
        short_name: format!("{} Home Page", config.short_title),
    });
    shortcuts.extend(articles.iter().take(MAX_SHORTCUTS).map(|a| ManifestShortcut {
        name: a.title.clone(),
        url: article_url_path(&a.slug),
        short_name: shorten_title(&a.title, &config.title_prefix, &config.title_suffix),
    }));
    shortcuts
}

/// Build the manifest record for the current article collection.
pub fn manifest(articles: &[Article], config: &SiteConfig) -> Manifest {
    Manifest {
        short_name: config.short_title.clone(),
        name: config.title.clone(),
        icons: vec![
            ManifestIcon {
                src: "icon.png".to_string(),
                icon_type: "image/png".to_string(),
                sizes: "192x192".to_string(),
                purpose: "any maskable".to_string(),
            },
            ManifestIcon {
                src: "tile.png".to_string(),
                icon_type: "image/png".to_string(),
                sizes: "512x512".to_string(),
                purpose: "any maskable".to_string(),
            },
        ],
        start_url: "./".to_string(),
        scope: ".".to_string(),
        background_color: config.theme.background_color.clone(),
        theme_color: config.theme.theme_color.clone(),
        display: "standalone".to_string(),
        categories: config.categories.clone(),
        description: config.description.clone(),
        dir: "auto".to_string(),
        lang: config.language.clone(),
        shortcuts: manifest_shortcuts(articles, config),
    }
}

/// Render the manifest as pretty-printed JSON.
pub fn render_manifest(articles: &[Article], config: &SiteConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&manifest(articles, config))
}

/// Encode a number in lowercase base 36.
fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ASCII")
}

/// An opaque cache-generation token unique to this build.
pub fn version_token() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    to_base36(millis)
}

/// Every URL the build produced, in pre-cache order.
pub fn cache_urls(articles: &[Article], pages: &PageSet<'_>, config: &SiteConfig) -> Vec<String> {
    let mut urls = vec![
        "/".to_string(),
        "/sw.js".to_string(),
        "/index.html".to_string(),
        "/404.html".to_string(),
    ];
    urls.extend(config.stylesheets.iter().cloned());
    urls.extend(articles.iter().map(|a| article_url_path(&a.slug)));
    urls.extend(pages.listing_urls());
    urls
}

/// Render `sw.js` for one build generation.
pub fn render_service_worker(version: &str, cache_urls: &[String]) -> String {
    let quoted: Vec<String> = cache_urls.iter().map(|u| format!("      '{u}'")).collect();
    let url_list = quoted.join(",\n");
    format!(
        r#"var VERSION = '{version}';

this.addEventListener('install', function(e) {{
  e.waitUntil(caches.open(VERSION).then(cache => {{
    return cache.addAll([
{url_list}
    ]);
  }}))
}});

this.addEventListener('fetch', function(e) {{
  if (e.request.method !== 'GET') return;

  if (e.request.mode === 'navigate') {{
    e.respondWith(
      fetch(e.request).catch(() => caches.match('/index.html'))
    );
    return;
  }}

  var tryInCachesFirst = caches.open(VERSION).then(cache => {{
    return cache.match(e.request).then(response => {{
      if (!response) {{
        return handleNoCacheMatch(e);
      }}
      fetchFromNetworkAndCache(e);
      return response;
    }});
  }});
  e.respondWith(tryInCachesFirst);
}});

this.addEventListener('activate', function(e) {{
  e.waitUntil(caches.keys().then(keys => {{
    return Promise.all(keys.map(key => {{
      if (key !== VERSION)
        return caches.delete(key);
    }}));
  }}));
}});

function fetchFromNetworkAndCache(e) {{
  if (e.request.cache === 'only-if-cached' && e.request.mode !== 'same-origin') return;

  return fetch(e.request).then(res => {{
    if (!res.url) return res;
    if (new URL(res.url).origin !== location.origin) return res;

    return caches.open(VERSION).then(cache => {{
      cache.put(e.request, res.clone());
      return res;
    }});
  }}).catch(err => console.error(e.request.url, err));
}}

function handleNoCacheMatch(e) {{
  return fetchFromNetworkAndCache(e);
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::partition;
    use crate::test_helpers::test_articles;

    fn config() -> SiteConfig {
        SiteConfig {
            site_url: "https://blog.test".to_string(),
            short_title: "Example Blog".to_string(),
            title_prefix: "Nick Liffen's Blog | ".to_string(),
            title_suffix: " | Blog Post".to_string(),
            ..SiteConfig::default()
        }
    }

    // =========================================================================
    // shorten_title
    // =========================================================================

    #[test]
    fn shorten_title_strips_decorations() {
        assert_eq!(
            shorten_title(
                "Nick Liffen's Blog | Article One | Blog Post",
                "Nick Liffen's Blog | ",
                " | Blog Post"
            ),
            "Article One"
        );
    }

    #[test]
    fn shorten_title_passes_through_undecorated_titles() {
        assert_eq!(shorten_title("Plain Title", "Prefix | ", " | Suffix"), "Plain Title");
    }

    #[test]
    fn shorten_title_truncates_over_forty_chars() {
        let title = "Nick Liffen's Blog | This Is A Very Long Article Title That Exceeds Forty Characters | Blog Post";
        let short = shorten_title(title, "Nick Liffen's Blog | ", " | Blog Post");
        assert_eq!(short, "This Is A Very Long Article Title Tha...");
        assert_eq!(short.chars().count(), 40);
    }

    #[test]
    fn shorten_title_keeps_exactly_forty_chars() {
        let stripped = "a".repeat(40);
        assert_eq!(shorten_title(&stripped, "P", "S"), stripped);
    }

    // =========================================================================
    // manifest
    // =========================================================================

    #[test]
    fn shortcuts_lead_with_home_entry() {
        let shortcuts = manifest_shortcuts(&test_articles(2), &config());
        assert_eq!(shortcuts[0].url, "/");
        assert_eq!(shortcuts[0].short_name, "Example Blog Home Page");
        assert_eq!(shortcuts.len(), 3);
    }

    #[test]
    fn shortcuts_capped_at_six_articles() {
        let shortcuts = manifest_shortcuts(&test_articles(10), &config());
        assert_eq!(shortcuts.len(), 7);
        assert_eq!(shortcuts[1].url, "/articles/article-1.html");
        assert_eq!(shortcuts[6].url, "/articles/article-6.html");
    }

    #[test]
    fn manifest_renders_as_valid_json() {
        let json = render_manifest(&test_articles(3), &config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["icons"][0]["sizes"], "192x192");
        assert_eq!(value["icons"][1]["sizes"], "512x512");
        assert_eq!(value["icons"][0]["type"], "image/png");
        assert_eq!(value["start_url"], "./");
    }

    // =========================================================================
    // version token
    // =========================================================================

    #[test]
    fn base36_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_672_531_200_000), "lcclw5c0");
    }

    #[test]
    fn version_tokens_differ_across_builds() {
        let first = version_token();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = version_token();
        assert_ne!(first, second);
    }

    // =========================================================================
    // cache list and worker script
    // =========================================================================

    #[test]
    fn cache_urls_cover_every_generated_page() {
        let articles = test_articles(6);
        let pages = partition(&articles, 3, 2);
        let urls = cache_urls(&articles, &pages, &config());

        assert!(urls.contains(&"/".to_string()));
        assert!(urls.contains(&"/sw.js".to_string()));
        assert!(urls.contains(&"/index.html".to_string()));
        assert!(urls.contains(&"/404.html".to_string()));
        assert!(urls.contains(&"/css/hyde.css".to_string()));
        assert!(urls.contains(&"/css/poole.css".to_string()));
        for i in 1..=6 {
            assert!(urls.contains(&format!("/articles/article-{i}.html")));
        }
        assert!(urls.contains(&"/articles/page/2.html".to_string()));
        assert!(urls.contains(&"/articles/page/3.html".to_string()));
        assert!(!urls.contains(&"/articles/page/4.html".to_string()));
    }

    #[test]
    fn worker_script_embeds_version_and_urls() {
        let urls = vec!["/".to_string(), "/sw.js".to_string()];
        let sw = render_service_worker("abc123", &urls);
        assert!(sw.contains("var VERSION = 'abc123';"));
        assert!(sw.contains("      '/',\n      '/sw.js'"));
    }

    #[test]
    fn worker_script_states_the_fetch_policy() {
        let sw = render_service_worker("v1", &[]);
        assert!(sw.contains("if (e.request.method !== 'GET') return;"));
        assert!(sw.contains("e.request.mode === 'navigate'"));
        assert!(sw.contains("caches.match('/index.html')"));
        assert!(sw.contains("new URL(res.url).origin !== location.origin"));
        assert!(sw.contains("caches.delete(key)"));
    }
}
