use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a date (`2021-01-01`) optionally followed by a time with an
/// optional fractional-seconds part and an optional `Z` or numeric offset.
static ISO8601_DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:?\d{2})?)?$")
        .expect("ISO-8601 pattern is valid")
});

/// Returns `true` when `value` is a well-formed ISO-8601 date or date/time
/// string.
///
/// The same check serves both the date-only filters (transaction history)
/// and the full date/time filters (order history); a bare date is a valid
/// date/time with the time part omitted.
pub fn is_valid_iso8601_datetime(value: &str) -> bool {
    ISO8601_DATETIME.is_match(value)
}

/// Percent-encodes a string for use inside a URL path segment or query value
pub fn url_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Assembles a query string from ordered key/value pairs.
///
/// Keys are fixed API identifiers and pass through untouched; values are
/// percent-encoded. Pair order is preserved.
pub fn build_encoded_query_str(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
