//! HTML page rendering.
//!
//! Produces the four document kinds the build writes: article pages, the
//! homepage, numbered listing pages, and the 404 page.
//!
//! ## Output structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Homepage: first K articles + full TOC
//! ├── 404.html
//! ├── articles/
//! │   ├── my-article.html        # One page per article
//! │   └── page/
//! │       ├── 2.html             # Listing pages (page 1 is the index)
//! │       └── 3.html
//! ├── sitemap.xml  rss.xml       # See crate::feeds
//! └── manifest.webmanifest  sw.js  # See crate::pwa
//! ```
//!
//! ## HTML generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! templates are type-checked Rust, interpolation is auto-escaped, and there
//! is no template directory to go missing at runtime — the "missing template
//! file" failure mode does not exist in this design.
//!
//! Every document links the web app manifest and registers the service
//! worker, so any entry page makes the site installable and offline-capable.

use crate::articles::Article;
use crate::config::SiteConfig;
use crate::pages::listing_url_path;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline bootstrap that registers the service worker.
const SW_REGISTER: &str = "\
if ('serviceWorker' in navigator) {
  window.addEventListener('load', function() {
    navigator.serviceWorker.register('/sw.js');
  });
}";

/// Shared document shell: head metadata, stylesheets, manifest link,
/// service worker registration.
fn base_document(
    title: &str,
    description: &str,
    canonical: Option<&str>,
    config: &SiteConfig,
    extra_head: Markup,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.language) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                @if let Some(url) = canonical {
                    link rel="canonical" href=(url);
                }
                link rel="manifest" href="/manifest.webmanifest";
                link rel="alternate" type="application/rss+xml" title=(config.short_title) href="/rss.xml";
                meta name="theme-color" content=(config.theme.theme_color);
                @for stylesheet in &config.stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                (extra_head)
            }
            body {
                (content)
                script { (PreEscaped(SW_REGISTER)) }
            }
        }
    }
}

/// JSON-LD `BlogPosting` structured data for an article page.
///
/// Built through serde_json like the other generated documents — the
/// headline, description, and excerpt are user text and must arrive in the
/// script block correctly quoted.
fn structured_data(article: &Article) -> String {
    let mut doc = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": article.headline,
        "description": article.description,
        "mainEntityOfPage": article.canonical_url,
        "datePublished": article.date_published.to_string(),
        "dateModified": article.date_modified.to_string(),
    });
    if let Some(image) = &article.image {
        doc["image"] = serde_json::json!(image);
    }
    if let Some(excerpt) = &article.excerpt {
        doc["articleBody"] = serde_json::json!(excerpt);
    }
    // A literal `<` inside a script element can terminate it early
    // (`</script>` in user text); the JSON unicode escape is equivalent.
    doc.to_string().replace('<', "\\u003c")
}

/// Preconnect hints for pages that embed rich media.
fn media_head() -> Markup {
    html! {
        link rel="preconnect" href="https://www.youtube.com";
        link rel="preconnect" href="https://i.ytimg.com";
    }
}

/// Site banner with the blog title linking home.
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (config.short_title) }
        }
    }
}

/// Table of contents over the full collection.
///
/// The caller supplies records whose `toc_link` is already rewritten for the
/// consuming page's directory depth (see [`crate::pages::toc_at_root`] and
/// [`crate::pages::toc_in_listing`]).
fn toc_section(toc: &[Article]) -> Markup {
    html! {
        aside.toc {
            h2 { "All Articles" }
            ul {
                @for article in toc {
                    li {
                        a href=(article.toc_link) { (article.headline) }
                        " "
                        span.toc-date { (article.formatted_date) }
                    }
                }
            }
        }
    }
}

/// One article blurb in an index/listing stream.
fn article_entry(article: &Article) -> Markup {
    html! {
        article.entry {
            h2 { a href=(article.toc_link) { (article.headline) } }
            p.entry-date { (article.formatted_date) }
            p.entry-description { (article.description) }
        }
    }
}

/// Render a full article page.
pub fn render_article(article: &Article, config: &SiteConfig) -> Markup {
    let extra_head = html! {
        @if !article.keywords.is_empty() {
            meta name="keywords" content=(article.keywords.join(", "));
        }
        @if let Some(image) = &article.image {
            meta property="og:image" content=(image);
        }
        @if article.has_media { (media_head()) }
        script type="application/ld+json" { (PreEscaped(structured_data(article))) }
    };

    let content = html! {
        (site_header(config))
        main.article-page {
            article {
                header {
                    h1 { (article.headline) }
                    p.article-date { (article.formatted_date) }
                }
                @if !article.sections.is_empty() {
                    nav.article-sections {
                        ul {
                            @for section in &article.sections {
                                li { (section) }
                            }
                        }
                    }
                }
                div.article-body {
                    (PreEscaped(article.content.as_str()))
                }
            }
        }
    };

    base_document(
        &article.title,
        &article.description,
        Some(&article.canonical_url),
        config,
        extra_head,
        content,
    )
}

/// Render the homepage: the index subset plus the full TOC.
pub fn render_index(display: &[Article], toc: &[Article], config: &SiteConfig) -> Markup {
    let has_media = display.iter().any(|a| a.has_media);
    let extra_head = html! {
        @if has_media { (media_head()) }
    };

    let content = html! {
        (site_header(config))
        main.index-page {
            @for article in display {
                (article_entry(article))
            }
            @if !toc.is_empty() {
                nav.pagination {
                    @if toc.len() > display.len() {
                        a.next href=(listing_url_path(2)) { "Older articles" }
                    }
                }
            }
            (toc_section(toc))
        }
    };

    base_document(
        &config.title,
        &config.description,
        Some(&format!("{}/", config.site_url)),
        config,
        extra_head,
        content,
    )
}

/// Render one numbered listing page.
///
/// `display` and `toc` must carry listing-depth links (`../{slug}.html`).
pub fn render_listing(
    number: usize,
    display: &[Article],
    toc: &[Article],
    has_next: bool,
    has_media: bool,
    config: &SiteConfig,
) -> Markup {
    let extra_head = html! {
        @if has_media { (media_head()) }
    };

    let content = html! {
        (site_header(config))
        main.listing-page {
            h1 { "Articles — Page " (number) }
            @for article in display {
                (article_entry(article))
            }
            nav.pagination {
                @if number == 2 {
                    a.prev href="/" { "Newer articles" }
                } @else {
                    a.prev href=(listing_url_path(number - 1)) { "Newer articles" }
                }
                @if has_next {
                    a.next href=(listing_url_path(number + 1)) { "Older articles" }
                }
            }
            (toc_section(toc))
        }
    };

    let title = format!("{} | Page {}", config.short_title, number);
    base_document(&title, &config.description, None, config, extra_head, content)
}

/// Render the 404 page.
pub fn render_not_found(config: &SiteConfig) -> Markup {
    let content = html! {
        (site_header(config))
        main.error-page {
            h1 { "Page not found" }
            p { "The page you were looking for doesn't exist." }
            p { a href="/" { "Back to the homepage" } }
        }
    };
    let title = format!("{} | Not Found", config.short_title);
    base_document(&title, &config.description, None, config, html! {}, content)
}
