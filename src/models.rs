use serde::{ Deserialize, Serialize };

/// One organic search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// 1-based position across every page of the scrape.
    pub rank: u32,
    pub url: String,
    pub title: String,
    pub description: String,
}

/// Every kept record of a scrape, in page-then-position order.
pub type ScrapeResult = Vec<ResultRecord>;

/// Parameters for a single scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub country_code: String,
    pub language_code: String,
    pub pages: usize,
    pub per_page: usize,
    /// Seconds to wait between page fetches.
    pub backoff: u64,
    pub proxy: Option<String>,
}

impl SearchRequest {
    /// A one-page, ten-result request with no backoff and a direct connection.
    pub fn new(
        term: impl Into<String>,
        country_code: impl Into<String>,
        language_code: impl Into<String>
    ) -> Self {
        SearchRequest {
            term: term.into(),
            country_code: country_code.into(),
            language_code: language_code.into(),
            pages: 1,
            per_page: 10,
            backoff: 0,
            proxy: None,
        }
    }

    pub fn pages(mut self, pages: usize) -> Self {
        self.pages = pages;
        self
    }

    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn backoff(mut self, seconds: u64) -> Self {
        self.backoff = seconds;
        self
    }

    /// Routes every page fetch through `proxy`. An empty string means no proxy.
    pub fn proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy.filter(|p| !p.trim().is_empty());
        self
    }
}
