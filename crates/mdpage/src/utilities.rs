//! Utility functions for file naming and URL screening.

use once_cell::sync::Lazy;
use regex::Regex;

static HTTP_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)https?://[^\s/?#]+[^\s]*$").expect("valid URL pattern")
});

/// Join the whitespace-separated words of `name` with hyphens
pub fn hyphenate(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Check if `url` is an absolute http(s) URL
pub fn is_http_url(url: &str) -> bool {
    HTTP_URL.is_match(url)
}
