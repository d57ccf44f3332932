pub mod config;
pub mod domains;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod server;
pub mod url_builder;
pub mod user_agents;

use thiserror::Error;

pub use extractor::{ extract, PageExtraction };
pub use fetcher::{ Fetcher, PageFetcher };
pub use models::{ ResultRecord, ScrapeResult, SearchRequest };
pub use pipeline::{ scrape, Scraper };
pub use url_builder::build_request_urls;

/// Everything that can abort a scrape.
///
/// None of these are recovered from inside the crate: the first failure ends
/// the scrape and is handed back to the caller untouched.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The country code has no entry in the domain table.
    #[error("country ({0}) is currently not supported")]
    UnsupportedCountry(String),

    /// Page count or page size outside what a single scrape may ask for.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// DNS, connect, TLS, timeout or body read failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with something other than 200, which we read as a ban.
    #[error("scraper received a non-200 status code ({status}) from {url} suggesting a ban")]
    Blocked {
        url: String,
        status: u16,
    },

    /// The page body was not a result page we know how to read.
    #[error("could not parse result page: {0}")]
    Parse(String),

    /// The caller's deadline ran out before the last page was fetched.
    #[error("scrape did not finish before its deadline")]
    DeadlineExceeded,
}

impl ScrapeError {
    /// Stable short code for API payloads and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::UnsupportedCountry(_) => "unsupported_country",
            ScrapeError::InvalidRequest(_) => "invalid_request",
            ScrapeError::Transport { .. } => "transport",
            ScrapeError::Blocked { .. } => "blocked",
            ScrapeError::Parse(_) => "parse",
            ScrapeError::DeadlineExceeded => "deadline_exceeded",
        }
    }
}
