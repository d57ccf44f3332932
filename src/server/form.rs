use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{ error, info, warn };

use super::{ status_for, AppState };
use crate::models::{ ResultRecord, SearchRequest };
use crate::ScrapeError;

/// Raw form fields; every value arrives as text and may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct FormInput {
    #[serde(rename = "Search Term", default)]
    pub search_term: String,
    #[serde(rename = "Country Code", default)]
    pub country_code: String,
    #[serde(rename = "Language Code", default)]
    pub language_code: String,
    #[serde(rename = "Pages", default)]
    pub pages: String,
    #[serde(rename = "Count", default)]
    pub count: String,
    #[serde(rename = "Backoff", default)]
    pub backoff: String,
    #[serde(rename = "Proxy", default)]
    pub proxy: String,
}

impl FormInput {
    /// Numbers that do not parse become 0; a blank proxy falls back to `default_proxy`.
    pub fn into_request(self, default_proxy: Option<String>) -> SearchRequest {
        let proxy = if self.proxy.trim().is_empty() { default_proxy } else { Some(self.proxy) };

        SearchRequest::new(self.search_term, self.country_code, self.language_code)
            .pages(self.pages.trim().parse().unwrap_or(0))
            .per_page(self.count.trim().parse().unwrap_or(0))
            .backoff(self.backoff.trim().parse().unwrap_or(0))
            .proxy(proxy)
    }
}

pub struct FormField {
    pub name: &'static str,
    pub placeholder: &'static str,
}

const FORM_FIELDS: &[FormField] = &[
    FormField { name: "Search Term", placeholder: "ronaldo" },
    FormField { name: "Country Code", placeholder: "in" },
    FormField { name: "Language Code", placeholder: "en" },
    FormField { name: "Pages", placeholder: "1" },
    FormField { name: "Count", placeholder: "10" },
    FormField { name: "Backoff", placeholder: "10" },
    FormField { name: "Proxy", placeholder: "" },
];

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    fields: &'static [FormField],
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate<'a> {
    term: &'a str,
    results: &'a [ResultRecord],
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: String,
    hint: &'static str,
}

impl ErrorTemplate {
    fn new(err: &ScrapeError) -> Self {
        let hint = match err {
            ScrapeError::UnsupportedCountry(_) => "Check the country code and try again.",
            ScrapeError::InvalidRequest(_) => "Ask for fewer pages or fewer results per page.",
            ScrapeError::Blocked { .. } =>
                "The search engine refused the request. Wait longer between pages or use a proxy.",
            ScrapeError::Transport { .. } => "The search engine could not be reached. Try again later.",
            ScrapeError::Parse(_) => "The search engine returned a page that could not be read.",
            ScrapeError::DeadlineExceeded =>
                "The search took too long. Ask for fewer pages or a shorter backoff.",
        };
        ErrorTemplate { message: err.to_string(), hint }
    }
}

/// `GET /form`
pub async fn show_form() -> (StatusCode, Html<String>) {
    render(StatusCode::OK, &(FormTemplate { fields: FORM_FIELDS }))
}

/// `POST /form`
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(input): Form<FormInput>
) -> (StatusCode, Html<String>) {
    let request = input.into_request(state.config.proxy.clone());
    info!(
        search_term = %request.term,
        country_code = %request.country_code,
        language_code = %request.language_code,
        pages = request.pages,
        per_page = request.per_page,
        backoff = request.backoff,
        "form search"
    );

    match state.run(&request).await {
        Ok(results) =>
            render(StatusCode::OK, &(ResultsTemplate { term: &request.term, results: &results })),
        Err(err) => {
            warn!(error = %err, "form search failed");
            render(status_for(&err), &ErrorTemplate::new(&err))
        }
    }
}

fn render<T: Template>(status: StatusCode, page: &T) -> (StatusCode, Html<String>) {
    match page.render() {
        Ok(html) => (status, Html(html)),
        Err(err) => {
            error!(error = %err, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, Html("Internal Server Error".to_string()))
        }
    }
}
