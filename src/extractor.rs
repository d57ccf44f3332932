//! # Result Extractor
//!
//! Turns one Google result page into ranked [`ResultRecord`]s.

use scraper::{ ElementRef, Html, Selector };
use tracing::debug;

use crate::models::ResultRecord;
use crate::ScrapeError;

/// One organic result block.
const RESULT_SELECTOR: &str = "div.g";
const LINK_SELECTOR: &str = "a";
/// `h3.r` on the legacy layout, a bare `h3` on the current one.
const TITLE_SELECTOR: &str = "h3";
/// Legacy `span.st` first, then the snippet containers of the current layout.
const SNIPPET_SELECTOR: &str =
    "span.st, div.VwiC3b, div[data-sncf], div[style='-webkit-line-clamp:2']";

/// Records found on a single page plus the rank counter to hand to the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExtraction {
    pub records: Vec<ResultRecord>,
    /// Rank of the last record on this page, or the starting rank if none were kept.
    pub next_rank: u32,
}

struct Selectors {
    result: Selector,
    link: Selector,
    title: Selector,
    snippet: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ScrapeError> {
        let parse = |css: &str| {
            Selector::parse(css).map_err(|e| {
                ScrapeError::Parse(format!("invalid selector {:?}: {:?}", css, e))
            })
        };

        Ok(Selectors {
            result: parse(RESULT_SELECTOR)?,
            link: parse(LINK_SELECTOR)?,
            title: parse(TITLE_SELECTOR)?,
            snippet: parse(SNIPPET_SELECTOR)?,
        })
    }
}

/// Extracts the organic results from `body`.
///
/// Ranks continue from `starting_rank`: the first kept record gets
/// `starting_rank + 1`. Blocks whose first link is empty, `#`, or
/// root-relative (ads, Google-internal links) are skipped without consuming a
/// rank.
///
/// A body with no markup at all is a [`ScrapeError::Parse`], not an empty page.
pub fn extract(body: &str, starting_rank: u32) -> Result<PageExtraction, ScrapeError> {
    if body.trim().is_empty() {
        return Err(ScrapeError::Parse("response body is empty".to_string()));
    }

    let selectors = Selectors::new()?;
    let document = Html::parse_document(body);

    if !has_markup(body, &document) {
        return Err(ScrapeError::Parse("response body contains no HTML elements".to_string()));
    }

    let mut rank = starting_rank;
    let mut records = Vec::new();

    for block in document.select(&selectors.result) {
        let url = block
            .select(&selectors.link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .unwrap_or("")
            .trim();

        if !is_organic_link(url) {
            continue;
        }

        rank += 1;
        records.push(ResultRecord {
            rank,
            url: url.to_string(),
            title: first_text(block, &selectors.title),
            description: first_text(block, &selectors.snippet),
        });
    }

    debug!(kept = records.len(), starting_rank, next_rank = rank, "extracted page");

    Ok(PageExtraction {
        records,
        next_rank: rank,
    })
}

fn is_organic_link(href: &str) -> bool {
    !href.is_empty() && href != "#" && !href.starts_with('/')
}

fn first_text(block: ElementRef<'_>, selector: &Selector) -> String {
    block
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// The HTML parser wraps anything in html/head/body, so the input counts as
/// markup only if it spelled out one of those itself or produced some other element.
fn has_markup(body: &str, document: &Html) -> bool {
    let source = body.to_ascii_lowercase();
    if ["<!doctype", "<html", "<head", "<body"].iter().any(|tag| source.contains(tag)) {
        return true;
    }

    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .any(|el| !matches!(el.value().name(), "html" | "head" | "body"))
}
