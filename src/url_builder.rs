use tracing::debug;

use crate::domains::google_base;
use crate::ScrapeError;

/// Most pages one scrape may request.
pub const MAX_PAGES: usize = 100;
/// Largest `num` Google honours.
pub const MAX_PER_PAGE: usize = 100;

/// Builds one search URL per requested page.
///
/// The term is trimmed and its spaces become `+`; nothing else is escaped.
/// Page `i` asks for results starting at `i * per_page`. Fails with
/// [`ScrapeError::UnsupportedCountry`] before building anything when the
/// country code is unknown, and with [`ScrapeError::InvalidRequest`] when
/// `pages` exceeds [`MAX_PAGES`] or `per_page` exceeds [`MAX_PER_PAGE`].
pub fn build_request_urls(
    term: &str,
    country_code: &str,
    language_code: &str,
    pages: usize,
    per_page: usize
) -> Result<Vec<String>, ScrapeError> {
    let base = google_base(country_code).ok_or_else(||
        ScrapeError::UnsupportedCountry(country_code.to_string())
    )?;

    if pages > MAX_PAGES {
        return Err(
            ScrapeError::InvalidRequest(format!("pages must be at most {}, got {}", MAX_PAGES, pages))
        );
    }
    if per_page > MAX_PER_PAGE {
        return Err(
            ScrapeError::InvalidRequest(
                format!("results per page must be at most {}, got {}", MAX_PER_PAGE, per_page)
            )
        );
    }

    let term = term.trim().replace(' ', "+");

    let urls = (0..pages)
        .map(|page| {
            let start = page.checked_mul(per_page).ok_or_else(||
                ScrapeError::InvalidRequest(format!("start offset for page {} overflows", page))
            )?;
            Ok(
                format!(
                    "{}{}&num={}&hl={}&start={}&filter=0",
                    base,
                    term,
                    per_page,
                    language_code,
                    start
                )
            )
        })
        .collect::<Result<Vec<String>, ScrapeError>>()?;

    debug!(count = urls.len(), ?urls, "built search urls");
    Ok(urls)
}
