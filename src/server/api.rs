use axum::extract::State;
use axum::response::{ IntoResponse, Response };
use axum::Json;
use serde::{ Deserialize, Serialize };
use std::sync::Arc;
use tracing::{ info, warn };

use super::{ status_for, AppState };
use crate::models::{ ScrapeResult, SearchRequest };
use crate::ScrapeError;

#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub search_term: String,
    pub country_code: String,
    pub language_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// A failed scrape, answered with a non-success status and an [`ErrorBody`].
pub struct ApiError(pub ScrapeError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (status_for(&self.0), Json(body)).into_response()
    }
}

/// `POST /`: scrapes with the server's page count, page size, backoff and proxy.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(input): Json<SearchInput>
) -> Result<Json<ScrapeResult>, ApiError> {
    info!(
        search_term = %input.search_term,
        country_code = %input.country_code,
        language_code = %input.language_code,
        "api search"
    );

    let request = SearchRequest::new(input.search_term, input.country_code, input.language_code)
        .pages(state.config.api_pages)
        .per_page(state.config.api_per_page)
        .backoff(state.config.api_backoff)
        .proxy(state.config.proxy.clone());

    match state.run(&request).await {
        Ok(results) => Ok(Json(results)),
        Err(err) => {
            warn!(error = %err, "api search failed");
            Err(ApiError(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::ScriptedFetcher;
    use crate::models::ResultRecord;
    use crate::server::testing::{ client, spawn_app };
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;

    const PAGE: &str =
        r#"<html><body><div id="search">
        <div class="g"><a href="https://www.cristianoronaldo.com/"><h3>Cristiano Ronaldo</h3></a><span class="st">Official site.</span></div>
        <div class="g"><a href="/search?q=ronaldo&amp;tbm=nws"><h3>Top stories</h3></a></div>
        </div></body></html>"#;

    #[tokio::test]
    async fn test_search_returns_ranked_records() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![Ok(PAGE.to_string())]));
        let base = spawn_app(fetcher.clone()).await;

        let response = client()
            .post(&base)
            .json(&serde_json::json!({
                "search_term": "ronaldo",
                "country_code": "in",
                "language_code": "en"
            }))
            .send().await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let records: Vec<ResultRecord> = response.json().await.unwrap();
        assert_eq!(
            records,
            vec![ResultRecord {
                rank: 1,
                url: "https://www.cristianoronaldo.com/".to_string(),
                title: "Cristiano Ronaldo".to_string(),
                description: "Official site.".to_string(),
            }]
        );
        assert_eq!(
            fetcher.calls(),
            vec![(
                "https://www.google.co.in/search?q=ronaldo&num=10&hl=en&start=0&filter=0".to_string(),
                None,
            )]
        );
    }

    #[tokio::test]
    async fn test_unsupported_country_is_bad_request() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![]));
        let base = spawn_app(fetcher.clone()).await;

        let response = client()
            .post(&base)
            .json(&serde_json::json!({
                "search_term": "ronaldo",
                "country_code": "xx",
                "language_code": "en"
            }))
            .send().await
            .unwrap();

        assert_eq!(response.status().as_u16(), StatusCode::BAD_REQUEST.as_u16());
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, "unsupported_country");
        assert!(fetcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_is_service_unavailable() {
        let fetcher = Arc::new(
            ScriptedFetcher::new(
                vec![Err(ScrapeError::Blocked { url: "https://www.google.com/".into(), status: 503 })]
            )
        );
        let base = spawn_app(fetcher).await;

        let response = client()
            .post(&base)
            .json(&serde_json::json!({
                "search_term": "ronaldo",
                "country_code": "us",
                "language_code": "en"
            }))
            .send().await
            .unwrap();

        assert_eq!(response.status().as_u16(), 503);
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, "blocked");
    }
}
