use super::error::{Error, ProtocolError, Result as PexelsResult};
use reqwest::header::HeaderMap;
use serde_json::Value as JsonValue;

/// Name of the header carrying the number of requests left in the current period.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

pub fn get_remaining_quota(headers: &HeaderMap) -> PexelsResult<u64> {
    let value = headers
        .get(RATE_LIMIT_REMAINING)
        .ok_or(ProtocolError::MissingRateLimit)?;

    let raw = String::from_utf8_lossy(value.as_bytes());
    let parsed = raw.trim().parse::<u64>();

    match parsed {
        Ok(quota) => Ok(quota),
        Err(_) => Err(Error::from(ProtocolError::InvalidRateLimit(raw.into_owned()))),
    }
}

/// Pulls the message out of an API error object such as `{"error": "Not found"}`.
pub fn get_error_reason(body: &JsonValue) -> Option<String> {
    body.get("error")
        .or_else(|| body.get("code"))
        .and_then(JsonValue::as_str)
        .map(String::from)
}

/// Percent-encodes a search term so it can be passed to [`Client::search_photos`] or
/// [`Client::search_videos`], which insert their query into the URL as-is.
///
/// ```
/// assert_eq!(pexels::encode_query("black & white"), "black%20%26%20white");
/// ```
///
/// [`Client::search_photos`]: crate::client::Client::search_photos
/// [`Client::search_videos`]: crate::client::Client::search_videos
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query)
}
