//! End-to-end build tests: run a full build into a temp dir and check that
//! the generated artifacts agree with each other — the same article set must
//! show up in the pages, the sitemap, the RSS feed, and the service worker
//! pre-cache list.

use inkpress::articles::BuildMode;
use inkpress::build;
use inkpress::config::SiteConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_article(content_dir: &Path, slug: &str, date: &str, draft: bool) {
    let md = format!(
        "---\n\
         slug: \"{slug}\"\n\
         title: \"Example Blog | {slug} | Blog Post\"\n\
         headline: \"{slug}\"\n\
         description: \"About {slug}\"\n\
         date: \"{date}\"\n\
         draft: {draft}\n\
         ---\n\n\
         Body of {slug}.\n"
    );
    fs::write(content_dir.join(format!("{slug}.md")), md).unwrap();
}

fn site_with_articles(count: usize) -> (TempDir, SiteConfig) {
    let root = TempDir::new().unwrap();
    let content = root.path().join("content");
    fs::create_dir_all(&content).unwrap();
    for i in 1..=count {
        write_article(&content, &format!("article-{i}"), &format!("2023-06-{:02}", 30 - i), false);
    }
    let config = SiteConfig {
        site_url: "https://blog.test".to_string(),
        static_assets: vec![],
        ..SiteConfig::default()
    };
    (root, config)
}

fn run_build(root: &TempDir, config: &SiteConfig) -> build::BuildSummary {
    build::build(
        root.path(),
        &root.path().join("content"),
        &root.path().join("dist"),
        config,
        BuildMode::Production,
    )
    .unwrap()
}

fn read(root: &TempDir, rel: &str) -> String {
    fs::read_to_string(root.path().join("dist").join(rel)).unwrap()
}

#[test]
fn sitemap_and_rss_enumerate_every_article_exactly_once() {
    let (root, config) = site_with_articles(6);
    run_build(&root, &config);

    let sitemap = read(&root, "sitemap.xml");
    let rss = read(&root, "rss.xml");

    // Homepage entry first, with the pinned lastmod
    assert_eq!(sitemap.matches("<url>").count(), 7);
    assert!(sitemap.contains("<loc>https://blog.test/</loc>"));
    assert!(sitemap.contains("<lastmod>2021-01-31T00:00:00+00:00</lastmod>"));
    assert!(sitemap.contains("<changefreq>weekly</changefreq>"));

    assert_eq!(rss.matches("<item>").count(), 6);
    for i in 1..=6 {
        let loc = format!("https://blog.test/articles/article-{i}.html");
        assert_eq!(sitemap.matches(&loc).count(), 1, "sitemap: {loc}");
        // RSS uses the URL as both <link> and <guid>
        assert_eq!(rss.matches(&loc).count(), 2, "rss: {loc}");
    }
}

#[test]
fn pagination_and_precache_list_agree() {
    // 6 articles, 3 on the index, 2 per page: pages 2 and 3, never 4
    let (root, config) = site_with_articles(6);
    let summary = run_build(&root, &config);
    assert_eq!(summary.listing_pages, 2);

    let dist = root.path().join("dist");
    assert!(dist.join("articles/page/2.html").is_file());
    assert!(dist.join("articles/page/3.html").is_file());
    assert!(!dist.join("articles/page/4.html").exists());

    let sw = read(&root, "sw.js");
    for i in 1..=6 {
        assert!(sw.contains(&format!("'/articles/article-{i}.html'")));
    }
    assert!(sw.contains("'/articles/page/2.html'"));
    assert!(sw.contains("'/articles/page/3.html'"));
    assert!(!sw.contains("'/articles/page/4.html'"));
    assert!(sw.contains("'/'"));
    assert!(sw.contains("'/index.html'"));
    assert!(sw.contains("'/404.html'"));
    assert!(sw.contains("'/sw.js'"));
}

#[test]
fn index_links_down_and_listing_pages_link_up() {
    let (root, config) = site_with_articles(6);
    run_build(&root, &config);

    let index = read(&root, "index.html");
    assert!(index.contains("./articles/article-1.html"));
    assert!(index.contains("/articles/page/2.html"), "index should link to older articles");

    let page2 = read(&root, "articles/page/2.html");
    assert!(page2.contains("../article-1.html"));
}

#[test]
fn manifest_shortcuts_cap_at_home_plus_six() {
    let (root, config) = site_with_articles(9);
    run_build(&root, &config);

    let manifest: serde_json::Value =
        serde_json::from_str(&read(&root, "manifest.webmanifest")).unwrap();
    let shortcuts = manifest["shortcuts"].as_array().unwrap();
    assert_eq!(shortcuts.len(), 7);
    assert_eq!(shortcuts[0]["url"], "/");
    assert_eq!(shortcuts[1]["url"], "/articles/article-1.html");
}

#[test]
fn drafts_are_invisible_in_a_production_build() {
    let (root, config) = site_with_articles(2);
    write_article(&root.path().join("content"), "unfinished", "2023-06-01", true);
    let summary = run_build(&root, &config);
    assert_eq!(summary.articles, 2);

    assert!(!root.path().join("dist/articles/unfinished.html").exists());
    assert!(!read(&root, "sitemap.xml").contains("unfinished"));
    assert!(!read(&root, "rss.xml").contains("unfinished"));
    assert!(!read(&root, "sw.js").contains("unfinished"));
}

#[test]
fn check_validates_without_writing_output() {
    let (root, config) = site_with_articles(3);
    let articles = build::check(
        &root.path().join("content"),
        &config,
        BuildMode::Production,
    )
    .unwrap();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].slug, "article-1");
    assert!(!root.path().join("dist").exists());
}
