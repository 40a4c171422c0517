use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::Query;

/// Characters escaped in the free-text term. Matches JavaScript's
/// `encodeURIComponent`: everything except alphanumerics and `-_.!~*'()`.
const TERM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Fixed per-process request configuration merged under every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineConfig {
    pub base_url: String,
    pub api_key: String,
    pub per_page: u32,
    pub safesearch: bool,
    pub editors_choice: bool,
}

impl BaselineConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://pixabay.com/api/".to_string(),
            api_key: api_key.into(),
            per_page: 25,
            safesearch: true,
            editors_choice: true,
        }
    }
}

/// Builds the request URL for one query. Pure and total: the same baseline
/// and query always yield the identical string, and no input fails.
///
/// Only the free-text term is percent-encoded; category and filter values
/// are passed through as-is. Filter keys present with empty values are
/// still appended.
pub fn build_request(base: &BaselineConfig, query: &Query) -> String {
    let mut url = format!(
        "{}?key={}&per_page={}&safesearch={}&editors_choice={}",
        base.base_url, base.api_key, base.per_page, base.safesearch, base.editors_choice
    );

    push_param(&mut url, "page", &query.page.to_string());

    if let Some(term) = query.identity.term.as_deref() {
        let encoded = utf8_percent_encode(term, TERM_ENCODE_SET).to_string();
        push_param(&mut url, "q", &encoded);
    }
    if let Some(category) = query.identity.category.as_deref() {
        push_param(&mut url, "category", category);
    }
    for (key, value) in &query.identity.filters {
        push_param(&mut url, key.as_param(), value);
    }

    url
}

fn push_param(url: &mut String, name: &str, value: &str) {
    url.push('&');
    url.push_str(name);
    url.push('=');
    url.push_str(value);
}
