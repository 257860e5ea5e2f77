//! Query-string helpers shared by the iframe builders.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value the way embed providers expect query components.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// First segment of a link's path, empty when the path is `/`.
pub fn first_path_segment(url: &Url) -> &str {
    url.path().split('/').nth(1).unwrap_or_default()
}

/// Join `key=value` pairs with `&`, encoding each value.
pub fn join_params(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_uri_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}
