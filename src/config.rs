use std::time::Duration;

pub const BASE_URL: &str = "https://vegetablemarketprice.com";

/// The site serves its price table to browser user agents only.
pub const USER_AGENT: &str = "Mozilla/5.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the market page URL for a normalized city string.
pub fn market_url(base: &str, city: &str) -> String {
    format!("{}/market/{}/today", base.trim_end_matches('/'), city)
}

/// Cache key and URL segment: lowercased, surrounding whitespace trimmed.
pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}
