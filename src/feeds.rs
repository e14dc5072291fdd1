//! Feed generation: `sitemap.xml` and `rss.xml`.
//!
//! Both documents are derived from the same sorted article collection as the
//! HTML pages, so every non-draft article appears in each exactly once. They
//! are assembled from typed records ([`SitemapUrl`], [`RssItem`]) through an
//! escaping writer rather than string templating — article titles and
//! descriptions are user-supplied text and must never land unescaped in
//! markup.
//!
//! ## Sitemap
//!
//! One synthetic entry for the homepage (weekly/1.00, lastmod from config —
//! see [`crate::config`] on why that date is independent of articles), then
//! one entry per article (monthly/0.80, lastmod = the article's modified
//! date). Timestamps use the ISO 8601 `+00:00` profile.
//!
//! ## RSS
//!
//! RSS 2.0 with the Atom self-link extension. One `<item>` per article in
//! collection order (newest first); the guid is the canonical link.

use crate::articles::Article;
use crate::config::SiteConfig;
use crate::dates;

/// One `<url>` entry in the sitemap.
#[derive(Debug, PartialEq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

/// One `<item>` in the RSS channel.
#[derive(Debug, PartialEq)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub guid: String,
    pub pub_date: String,
}

/// Escape text for placement inside an XML element.
fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Derive the sitemap entries: homepage first, then one per article.
pub fn sitemap_entries(articles: &[Article], config: &SiteConfig) -> Vec<SitemapUrl> {
    let mut urls = Vec::with_capacity(articles.len() + 1);
    urls.push(SitemapUrl {
        loc: format!("{}/", config.site_url),
        lastmod: dates::format_sitemap(config.homepage_lastmod),
        changefreq: "weekly",
        priority: "1.00",
    });
    urls.extend(articles.iter().map(|a| SitemapUrl {
        loc: a.canonical_url.clone(),
        lastmod: dates::format_sitemap(a.date_modified),
        changefreq: "monthly",
        priority: "0.80",
    }));
    urls
}

/// Derive the RSS items, one per article in collection order.
pub fn rss_items(articles: &[Article]) -> Vec<RssItem> {
    articles
        .iter()
        .map(|a| RssItem {
            title: a.title.clone(),
            link: a.canonical_url.clone(),
            description: a.description.clone(),
            guid: a.canonical_url.clone(),
            pub_date: dates::format_rfc822(a.date_published),
        })
        .collect()
}

/// Render the full sitemap document.
pub fn render_sitemap(articles: &[Article], config: &SiteConfig) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(
        "<urlset\n      \
         xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n      \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n      \
         xsi:schemaLocation=\"http://www.sitemaps.org/schemas/sitemap/0.9\n            \
         http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd\">\n\n",
    );
    for url in sitemap_entries(articles, config) {
        out.push_str("<url>\n");
        out.push_str(&format!("  <loc>{}</loc>\n", xml_escape(&url.loc)));
        out.push_str(&format!("  <lastmod>{}</lastmod>\n", url.lastmod));
        out.push_str(&format!("  <changefreq>{}</changefreq>\n", url.changefreq));
        out.push_str(&format!("  <priority>{}</priority>\n", url.priority));
        out.push_str("</url>\n");
    }
    out.push_str("\n</urlset>\n");
    out
}

/// Render the full RSS document.
pub fn render_rss(articles: &[Article], config: &SiteConfig) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
    out.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n\n");
    out.push_str("<channel>\n");
    out.push_str(&format!(
        "  <atom:link href=\"{}/rss.xml\" rel=\"self\" type=\"application/rss+xml\" />\n",
        xml_escape(&config.site_url)
    ));
    out.push_str(&format!("  <title>{}</title>\n", xml_escape(&config.title)));
    out.push_str(&format!("  <link>{}</link>\n", xml_escape(&config.site_url)));
    out.push_str(&format!(
        "  <description>{}</description>\n",
        xml_escape(&config.description)
    ));
    out.push_str(&format!(
        "  <category>{}</category>\n",
        xml_escape(&config.feed_category)
    ));
    out.push_str(&format!(
        "  <language>{}</language>\n",
        xml_escape(&config.language)
    ));
    for item in rss_items(articles) {
        out.push_str("  <item>\n");
        out.push_str(&format!("    <title>{}</title>\n", xml_escape(&item.title)));
        out.push_str(&format!("    <link>{}</link>\n", xml_escape(&item.link)));
        out.push_str(&format!(
            "    <description>{}</description>\n",
            xml_escape(&item.description)
        ));
        out.push_str(&format!("    <guid>{}</guid>\n", xml_escape(&item.guid)));
        out.push_str(&format!("    <pubDate>{}</pubDate>\n", item.pub_date));
        out.push_str("  </item>\n");
    }
    out.push_str("</channel>\n\n</rss>\n");
    out
}
