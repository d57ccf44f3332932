//! # User Agents Module
//!
//! Picks a browser User-Agent string at random for each outgoing search request.

use rand::seq::SliceRandom;

/// Returns a randomly selected User-Agent string from the predefined list.
///
/// Selection draws from the thread-local generator, which is seeded once per
/// thread and never reseeded between picks.
///
/// # Examples
///
/// ```rust
/// use googrank::user_agents::get_useragent;
/// let ua = get_useragent();
/// assert!(ua.starts_with("Mozilla/5.0"));
/// ```
pub fn get_useragent() -> &'static str {
    USER_AGENT_LIST.choose(&mut rand::thread_rng()).copied().unwrap_or(USER_AGENT_LIST[0])
}

const USER_AGENT_LIST: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:56.0) Gecko/20100101 Firefox/56.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/111.0",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_get_useragent() {
        let ua = get_useragent();
        assert!(USER_AGENT_LIST.contains(&ua));
    }

    #[test]
    fn test_useragent_varies_across_calls() {
        let seen: HashSet<&str> = (0..200).map(|_| get_useragent()).collect();
        assert!(seen.len() > 1);
    }
}
