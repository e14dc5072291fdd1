//! Page-set partitioning.
//!
//! Splits the sorted article collection into the homepage subset and the
//! numbered listing pages. This derivation is shared by three consumers that
//! must stay mutually consistent:
//!
//! - the page renderer (which pages exist, what each displays),
//! - the service worker cache list (every listing page URL is pre-cached),
//! - the pagination links themselves (`has_next`).
//!
//! ## Numbering
//!
//! The homepage is page 1 in spirit but is never numbered — listing pages
//! start at 2 and are contiguous. A site with 6 articles at the default
//! K=3/P=2 settings produces `articles/page/2.html` and `articles/page/3.html`
//! (3 on the index, then 2 + 1).
//!
//! ## Relative TOC links
//!
//! Every page carries a table of contents over the *full* collection. The
//! homepage lives at the site root, so its links point forward into
//! `./articles/{slug}.html`; listing pages live under `/articles/page/`, one
//! level beside the article files, so their links must be `../{slug}.html`.
//! Reusing the index's links from a listing page produces broken hrefs, so
//! the rewrite happens on derived copies of the records — the loaded
//! collection is never mutated.

use crate::articles::Article;

/// One numbered listing page (page 2 onward).
#[derive(Debug)]
pub struct ListingPage<'a> {
    /// Page number; the first listing page is 2.
    pub number: usize,
    /// Articles displayed on this page, in collection order.
    pub articles: &'a [Article],
    /// True iff a listing page with `number + 1` exists.
    pub has_next: bool,
    /// True iff any displayed article embeds rich media.
    pub has_media: bool,
}

/// The partition of the full collection into homepage + listing pages.
#[derive(Debug)]
pub struct PageSet<'a> {
    /// Articles shown on the homepage: the first `min(K, total)`.
    pub index: &'a [Article],
    /// Numbered listing pages for everything past the index subset.
    pub listing: Vec<ListingPage<'a>>,
}

impl PageSet<'_> {
    /// Site-root-relative URL paths of all listing pages, in page order.
    pub fn listing_urls(&self) -> Vec<String> {
        self.listing.iter().map(|p| listing_url_path(p.number)).collect()
    }
}

/// Site-root-relative URL path for a numbered listing page.
pub fn listing_url_path(number: usize) -> String {
    format!("/articles/page/{number}.html")
}

/// Partition `articles` into the index subset and listing pages.
///
/// `per_index` is K (homepage size), `per_page` is P (listing page size).
/// Zero articles past the index subset means zero listing pages.
///
/// # Panics
///
/// Panics if `per_page` is zero. Config validation rejects that value
/// before any build reaches this point; library callers own the check.
pub fn partition(articles: &[Article], per_index: usize, per_page: usize) -> PageSet<'_> {
    assert!(per_page >= 1, "per_page must be at least 1");
    let split = per_index.min(articles.len());
    let (index, rest) = articles.split_at(split);

    let chunks: Vec<&[Article]> = rest.chunks(per_page).collect();
    let total = chunks.len();
    let listing = chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| ListingPage {
            number: i + 2,
            articles: chunk,
            has_next: i + 1 < total,
            has_media: chunk.iter().any(|a| a.has_media),
        })
        .collect();

    PageSet { index, listing }
}

/// Derive a copy of the collection with every table-of-contents link
/// rewritten by `rewrite`. The input records are left untouched.
fn with_toc_links(articles: &[Article], rewrite: impl Fn(&Article) -> String) -> Vec<Article> {
    articles
        .iter()
        .map(|a| {
            let mut copy = a.clone();
            copy.toc_link = rewrite(a);
            copy
        })
        .collect()
}

/// TOC records for pages at the site root: `./articles/{slug}.html`.
pub fn toc_at_root(articles: &[Article]) -> Vec<Article> {
    with_toc_links(articles, |a| format!("./articles/{}.html", a.slug))
}

/// TOC records for pages under `/articles/page/`: `../{slug}.html`.
pub fn toc_in_listing(articles: &[Article]) -> Vec<Article> {
    with_toc_links(articles, |a| format!("../{}.html", a.slug))
}
