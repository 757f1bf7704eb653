//! Leading scheme removal.

/// Strips a leading `scheme://` or a bare leading `//` from `url`.
///
/// A scheme is one or more ASCII letters, digits or underscores followed by
/// `:`. Anything else is returned unchanged.
pub fn strip_scheme(url: &str) -> &str {
    if let Some(rest) = url.strip_prefix("//") {
        return rest;
    }
    let Some(colon) = url.find(':') else {
        return url;
    };
    let scheme = &url[..colon];
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    if scheme.is_empty() || !scheme.chars().all(is_word) {
        return url;
    }
    url[colon + 1..].strip_prefix("//").unwrap_or(url)
}
