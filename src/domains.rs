//! # Domain Table
//!
//! Maps a country code to the Google search base URL for that market. Each base
//! ends in `q=` so the query term can be appended directly. Supporting another
//! country means adding a row here.

/// Country code to search base URL, sorted by code.
pub static GOOGLE_DOMAINS: &[(&str, &str)] = &[
    ("ae", "https://www.google.ae/search?q="),
    ("ar", "https://www.google.com.ar/search?q="),
    ("at", "https://www.google.at/search?q="),
    ("au", "https://www.google.com.au/search?q="),
    ("bd", "https://www.google.com.bd/search?q="),
    ("be", "https://www.google.be/search?q="),
    ("bg", "https://www.google.bg/search?q="),
    ("br", "https://www.google.com.br/search?q="),
    ("ca", "https://www.google.ca/search?q="),
    ("ch", "https://www.google.ch/search?q="),
    ("cl", "https://www.google.cl/search?q="),
    ("cn", "https://www.google.com.hk/search?q="),
    ("co", "https://www.google.com.co/search?q="),
    ("com", "https://www.google.com/search?q="),
    ("cz", "https://www.google.cz/search?q="),
    ("de", "https://www.google.de/search?q="),
    ("dk", "https://www.google.dk/search?q="),
    ("eg", "https://www.google.com.eg/search?q="),
    ("es", "https://www.google.es/search?q="),
    ("fi", "https://www.google.fi/search?q="),
    ("fr", "https://www.google.fr/search?q="),
    ("gr", "https://www.google.gr/search?q="),
    ("hk", "https://www.google.com.hk/search?q="),
    ("hu", "https://www.google.hu/search?q="),
    ("id", "https://www.google.co.id/search?q="),
    ("ie", "https://www.google.ie/search?q="),
    ("il", "https://www.google.co.il/search?q="),
    ("in", "https://www.google.co.in/search?q="),
    ("it", "https://www.google.it/search?q="),
    ("jp", "https://www.google.co.jp/search?q="),
    ("ke", "https://www.google.co.ke/search?q="),
    ("kr", "https://www.google.co.kr/search?q="),
    ("mx", "https://www.google.com.mx/search?q="),
    ("my", "https://www.google.com.my/search?q="),
    ("ng", "https://www.google.com.ng/search?q="),
    ("nl", "https://www.google.nl/search?q="),
    ("no", "https://www.google.no/search?q="),
    ("np", "https://www.google.com.np/search?q="),
    ("nz", "https://www.google.co.nz/search?q="),
    ("pe", "https://www.google.com.pe/search?q="),
    ("ph", "https://www.google.com.ph/search?q="),
    ("pk", "https://www.google.com.pk/search?q="),
    ("pl", "https://www.google.pl/search?q="),
    ("pt", "https://www.google.pt/search?q="),
    ("ro", "https://www.google.ro/search?q="),
    ("ru", "https://www.google.ru/search?q="),
    ("sa", "https://www.google.com.sa/search?q="),
    ("se", "https://www.google.se/search?q="),
    ("sg", "https://www.google.com.sg/search?q="),
    ("th", "https://www.google.co.th/search?q="),
    ("tr", "https://www.google.com.tr/search?q="),
    ("tw", "https://www.google.com.tw/search?q="),
    ("ua", "https://www.google.com.ua/search?q="),
    ("uk", "https://www.google.co.uk/search?q="),
    ("us", "https://www.google.com/search?q="),
    ("vn", "https://www.google.com.vn/search?q="),
    ("za", "https://www.google.co.za/search?q="),
];

/// Returns the base URL for `country_code`, or `None` if the country is not supported.
///
/// Codes are matched exactly; callers normalise case before lookup if they need to.
pub fn google_base(country_code: &str) -> Option<&'static str> {
    GOOGLE_DOMAINS
        .binary_search_by(|(code, _)| (*code).cmp(country_code))
        .ok()
        .map(|idx| GOOGLE_DOMAINS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(GOOGLE_DOMAINS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_every_base_takes_a_query_term() {
        for (code, base) in GOOGLE_DOMAINS {
            assert!(base.starts_with("https://www.google."), "bad base for {}", code);
            assert!(base.ends_with("/search?q="), "bad base for {}", code);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(google_base("in"), Some("https://www.google.co.in/search?q="));
        assert_eq!(google_base("uk"), Some("https://www.google.co.uk/search?q="));
        assert_eq!(google_base("xx"), None);
        assert_eq!(google_base(""), None);
        assert_eq!(google_base("IN"), None);
    }
}
