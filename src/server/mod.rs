//! HTTP front end: a JSON endpoint and a browser form, both thin wrappers over [`Scraper`].

pub mod api;
pub mod form;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::Config;
use crate::fetcher::PageFetcher;
use crate::models::{ ScrapeResult, SearchRequest };
use crate::pipeline::Scraper;
use crate::ScrapeError;

pub struct AppState {
    pub scraper: Scraper<Arc<dyn PageFetcher>>,
    pub config: Config,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: Config) -> Self {
        AppState {
            scraper: Scraper::new(fetcher),
            config,
        }
    }

    /// Runs one scrape bounded by the configured request deadline.
    pub async fn run(&self, request: &SearchRequest) -> Result<ScrapeResult, ScrapeError> {
        let deadline = Instant::now() + Duration::from_secs(self.config.request_deadline);
        self.scraper.scrape_with_deadline(request, deadline).await
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(api::search))
        .route("/form", axum::routing::get(form::show_form).post(form::submit_form))
        .with_state(state)
}

/// HTTP status a failed scrape is reported with.
pub fn status_for(err: &ScrapeError) -> StatusCode {
    match err {
        ScrapeError::UnsupportedCountry(_) | ScrapeError::InvalidRequest(_) =>
            StatusCode::BAD_REQUEST,
        ScrapeError::Blocked { .. } => StatusCode::SERVICE_UNAVAILABLE,
        ScrapeError::Transport { .. } | ScrapeError::Parse(_) => StatusCode::BAD_GATEWAY,
        ScrapeError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
    }
}
