use async_trait::async_trait;
use reqwest::{ Client, ClientBuilder, StatusCode };
use std::sync::Arc;
use std::time::Duration;
use tracing::{ debug, warn };

use crate::user_agents::get_useragent;
use crate::ScrapeError;

/// Something that can retrieve one result page.
///
/// The pipeline only ever talks to this trait, so tests can hand it a scripted
/// fetcher and count the calls it receives.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GETs `url`, through `proxy` when one is given, and returns the body of a 200 response.
    async fn fetch(&self, url: &str, proxy: Option<&str>) -> Result<String, ScrapeError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, url: &str, proxy: Option<&str>) -> Result<String, ScrapeError> {
        (**self).fetch(url, proxy).await
    }
}

/// A struct responsible for fetching HTTP content.
pub struct Fetcher {
    timeout: Duration,
    ssl_verify: bool,
    direct: Client,
}

impl Fetcher {
    /// Creates a new `Fetcher` with the given configurations.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Per-request timeout in seconds.
    /// * `ssl_verify` - Whether to reject invalid TLS certificates.
    pub fn new(timeout: u64, ssl_verify: bool) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(timeout);
        let direct = client_builder(timeout, ssl_verify).build()?;

        Ok(Fetcher {
            timeout,
            ssl_verify,
            direct,
        })
    }

    fn proxied_client(&self, proxy_url: &str) -> Result<Client, reqwest::Error> {
        client_builder(self.timeout, self.ssl_verify).proxy(reqwest::Proxy::all(proxy_url)?).build()
    }
}

fn client_builder(timeout: Duration, ssl_verify: bool) -> ClientBuilder {
    Client::builder()
        .timeout(timeout)
        .cookie_store(true)
        .danger_accept_invalid_certs(!ssl_verify)
}

#[async_trait]
impl PageFetcher for Fetcher {
    /// Fetches the content from the given URL.
    ///
    /// # Returns
    ///
    /// The response body as a `String`, [`ScrapeError::Blocked`] for any status
    /// other than 200, or [`ScrapeError::Transport`] when the request itself fails.
    async fn fetch(&self, url: &str, proxy: Option<&str>) -> Result<String, ScrapeError> {
        let transport = |source: reqwest::Error| ScrapeError::Transport {
            url: url.to_string(),
            source,
        };

        let client = match proxy {
            Some(proxy_url) => self.proxied_client(proxy_url).map_err(transport)?,
            None => self.direct.clone(),
        };

        let user_agent = get_useragent();
        debug!(url, proxied = proxy.is_some(), user_agent, "fetching result page");

        let response = client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send().await
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url, status = status.as_u16(), "non-200 response, treating as blocked");
            return Err(ScrapeError::Blocked {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}
