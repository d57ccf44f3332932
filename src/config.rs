//! Service configuration, read from the environment (and `.env` when present).

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid {
        key: &'static str,
        value: String,
    },
}

/// Settings the transport layer needs to run scrapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `GOOGRANK_BIND`
    pub bind: SocketAddr,
    /// `GOOGRANK_API_PAGES`; the JSON API does not let callers pick this.
    pub api_pages: usize,
    /// `GOOGRANK_API_PER_PAGE`
    pub api_per_page: usize,
    /// `GOOGRANK_API_BACKOFF_SECS`
    pub api_backoff: u64,
    /// `GOOGRANK_PROXY`, used for API scrapes and for form scrapes that leave the proxy blank.
    pub proxy: Option<String>,
    /// `GOOGRANK_HTTP_TIMEOUT_SECS`
    pub http_timeout: u64,
    /// `GOOGRANK_SSL_VERIFY`
    pub ssl_verify: bool,
    /// `GOOGRANK_REQUEST_DEADLINE_SECS`, the most one served scrape may take overall.
    pub request_deadline: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            api_pages: 1,
            api_per_page: 10,
            api_backoff: 10,
            proxy: None,
            http_timeout: 30,
            ssl_verify: true,
            request_deadline: 300,
        }
    }
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Config::default();

        Ok(Config {
            bind: parse_or(&lookup, "GOOGRANK_BIND", defaults.bind)?,
            api_pages: parse_or(&lookup, "GOOGRANK_API_PAGES", defaults.api_pages)?,
            api_per_page: parse_or(&lookup, "GOOGRANK_API_PER_PAGE", defaults.api_per_page)?,
            api_backoff: parse_or(&lookup, "GOOGRANK_API_BACKOFF_SECS", defaults.api_backoff)?,
            proxy: lookup("GOOGRANK_PROXY").filter(|p| !p.trim().is_empty()),
            http_timeout: parse_or(&lookup, "GOOGRANK_HTTP_TIMEOUT_SECS", defaults.http_timeout)?,
            ssl_verify: parse_or(&lookup, "GOOGRANK_SSL_VERIFY", defaults.ssl_verify)?,
            request_deadline: parse_or(
                &lookup,
                "GOOGRANK_REQUEST_DEADLINE_SECS",
                defaults.request_deadline
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
    where F: Fn(&str) -> Option<String>, T: FromStr
{
    match lookup(key) {
        None => Ok(default),
        Some(value) =>
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
