//! # Scrape Orchestrator
//!
//! Build URLs, then for each page in order: fetch, extract, append, back off.
//! The first failing page aborts the whole scrape; nothing partial is returned.
//! Retrying a blocked page or returning the pages gathered so far would be
//! reasonable extensions, but callers currently rely on all-or-nothing.

use std::time::Duration;
use tokio::time::Instant;
use tracing::{ debug, info };

use crate::extractor::extract;
use crate::fetcher::{ Fetcher, PageFetcher };
use crate::models::{ ScrapeResult, SearchRequest };
use crate::url_builder::build_request_urls;
use crate::ScrapeError;

/// Per-request HTTP timeout used by [`scrape`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runs scrapes against a [`PageFetcher`].
///
/// Holds no per-scrape state, so one `Scraper` can serve concurrent scrapes.
pub struct Scraper<F = Fetcher> {
    fetcher: F,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F) -> Self {
        Scraper { fetcher }
    }

    /// Fetches and extracts every page of `request`, one page at a time.
    ///
    /// Waits `request.backoff` seconds between pages (not after the last one).
    /// Dropping the returned future cancels the scrape, including a pending backoff.
    pub async fn scrape(&self, request: &SearchRequest) -> Result<ScrapeResult, ScrapeError> {
        let urls = build_request_urls(
            &request.term,
            &request.country_code,
            &request.language_code,
            request.pages,
            request.per_page
        )?;

        info!(
            term = %request.term,
            country = %request.country_code,
            language = %request.language_code,
            pages = urls.len(),
            "starting scrape"
        );

        let backoff = Duration::from_secs(request.backoff);
        let mut results = ScrapeResult::new();
        let mut rank = 0;

        for (page, url) in urls.iter().enumerate() {
            if page > 0 && !backoff.is_zero() {
                debug!(seconds = request.backoff, "backing off before next page");
                tokio::time::sleep(backoff).await;
            }

            let body = self.fetcher.fetch(url, request.proxy.as_deref()).await?;
            let extracted = extract(&body, rank)?;

            debug!(page, results = extracted.records.len(), "page scraped");
            rank = extracted.next_rank;
            results.extend(extracted.records);
        }

        info!(results = results.len(), "scrape finished");
        Ok(results)
    }

    /// Like [`Scraper::scrape`], but gives up with [`ScrapeError::DeadlineExceeded`]
    /// once `deadline` passes, whether it is fetching or backing off at the time.
    pub async fn scrape_with_deadline(
        &self,
        request: &SearchRequest,
        deadline: Instant
    ) -> Result<ScrapeResult, ScrapeError> {
        tokio::time::timeout_at(deadline, self.scrape(request)).await
            .map_err(|_| ScrapeError::DeadlineExceeded)?
    }
}

/// Scrapes `request` over a direct or proxied HTTP connection with default settings.
///
/// An unsupported country fails before any client is built or request sent.
pub async fn scrape(request: &SearchRequest) -> Result<ScrapeResult, ScrapeError> {
    let urls = build_request_urls(
        &request.term,
        &request.country_code,
        &request.language_code,
        request.pages,
        request.per_page
    )?;
    let Some(first_url) = urls.first() else {
        return Ok(ScrapeResult::new());
    };

    let fetcher = Fetcher::new(DEFAULT_TIMEOUT_SECS, true).map_err(|source| ScrapeError::Transport {
        url: first_url.clone(),
        source,
    })?;

    Scraper::new(fetcher).scrape(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::ScriptedFetcher;

    fn page(links: &[&str]) -> String {
        let blocks: String = links
            .iter()
            .map(|href| format!("<div class=\"g\"><a href=\"{}\"><h3>{}</h3></a></div>", href, href))
            .collect();
        format!("<html><body><div id=\"search\">{}</div></body></html>", blocks)
    }

    #[tokio::test]
    async fn test_ranks_continue_across_pages() {
        let fetcher = ScriptedFetcher::new(
            vec![
                Ok(page(&["https://a.example", "/search?q=x", "https://b.example"])),
                Ok(page(&[])),
                Ok(page(&["#", "https://c.example"]))
            ]
        );
        let scraper = Scraper::new(fetcher);
        let request = SearchRequest::new("rust lang", "uk", "en").pages(3).per_page(10);

        let results = scraper.scrape(&request).await.unwrap();

        let ranked: Vec<(u32, &str)> = results
            .iter()
            .map(|r| (r.rank, r.url.as_str()))
            .collect();
        assert_eq!(
            ranked,
            vec![(1, "https://a.example"), (2, "https://b.example"), (3, "https://c.example")]
        );

        let urls: Vec<String> = scraper.fetcher
            .calls()
            .into_iter()
            .map(|(url, _)| url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://www.google.co.uk/search?q=rust+lang&num=10&hl=en&start=0&filter=0",
                "https://www.google.co.uk/search?q=rust+lang&num=10&hl=en&start=10&filter=0",
                "https://www.google.co.uk/search?q=rust+lang&num=10&hl=en&start=20&filter=0"
            ]
        );
    }

    #[tokio::test]
    async fn test_proxy_is_passed_to_every_fetch() {
        let fetcher = ScriptedFetcher::new(vec![Ok(page(&[])), Ok(page(&[]))]);
        let scraper = Scraper::new(fetcher);
        let request = SearchRequest::new("rust", "us", "en")
            .pages(2)
            .proxy(Some("http://10.0.0.1:3128".to_string()));

        scraper.scrape(&request).await.unwrap();

        let calls = scraper.fetcher.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, proxy)| proxy.as_deref() == Some("http://10.0.0.1:3128")));
    }

    #[tokio::test]
    async fn test_parse_failure_aborts_scrape() {
        let fetcher = ScriptedFetcher::new(
            vec![Ok(page(&["https://a.example"])), Ok(String::new()), Ok(page(&["https://b.example"]))]
        );
        let scraper = Scraper::new(fetcher);
        let request = SearchRequest::new("rust", "us", "en").pages(3);

        let err = scraper.scrape(&request).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)));
        assert_eq!(scraper.fetcher.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_between_pages_only() {
        let fetcher = ScriptedFetcher::new(vec![Ok(page(&[])), Ok(page(&[])), Ok(page(&[]))]);
        let scraper = Scraper::new(fetcher);
        let request = SearchRequest::new("rust", "us", "en").pages(3).backoff(10);

        let started = Instant::now();
        scraper.scrape(&request).await.unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(20), "{:?}", elapsed);
        assert!(elapsed < Duration::from_secs(21), "{:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_interrupts_backoff() {
        let fetcher = ScriptedFetcher::new(vec![Ok(page(&["https://a.example"])), Ok(page(&[]))]);
        let scraper = Scraper::new(fetcher);
        let request = SearchRequest::new("rust", "us", "en").pages(2).backoff(60);

        let deadline = Instant::now() + Duration::from_secs(30);
        let err = scraper.scrape_with_deadline(&request, deadline).await.unwrap_err();

        assert!(matches!(err, ScrapeError::DeadlineExceeded));
        assert_eq!(scraper.fetcher.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_convenience_scrape_rejects_country_without_network() {
        let request = SearchRequest::new("ronaldo", "xx", "en");
        let err = scrape(&request).await.unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedCountry(_)));
    }

    #[tokio::test]
    async fn test_convenience_scrape_zero_pages_is_empty() {
        let request = SearchRequest::new("ronaldo", "in", "en").pages(0);
        assert!(scrape(&request).await.unwrap().is_empty());
    }
}
