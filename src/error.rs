use std::fmt;

use reqwest::header::InvalidHeaderValue;

use thiserror::Error;

/// Result type for `pexels`, using [`pexels::error::Error`].
///
/// [`pexels::error::Error`]: enum.Error.html
pub type Result<T> = ::std::result::Result<T, Error>;

/// Enum for `pexels` errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The client couldn't be created. Contains a description of the error.
    #[error("Couldn't create client: {0}")]
    Configuration(String),

    /// The request couldn't be sent, or its response couldn't be read.
    #[error("Couldn't send request: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with something the client can't make sense of.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A random pick landed on a page without any item.
    #[error("the randomly selected page contains no {0}")]
    EmptyResult(MediaKind),
}

/// Ways a response can violate what the client expects from the API.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The response didn't carry an `X-Ratelimit-Remaining` header.
    #[error("missing X-Ratelimit-Remaining header")]
    MissingRateLimit,

    /// The `X-Ratelimit-Remaining` header isn't an integer. Contains the raw value.
    #[error("invalid X-Ratelimit-Remaining header: {0:?}")]
    InvalidRateLimit(String),

    /// An HTTP error has occurred. `reason` is the message given by the API, if available.
    #[error("HTTP error {code}{}", reason_suffix(.code, .reason))]
    Status { code: u16, reason: Option<String> },

    /// The API answered with an error object instead of the requested record. Contains the
    /// message it gave.
    #[error("API error: {0}")]
    ErrorBody(String),

    /// The response body doesn't have the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kind of media a request was looking for.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MediaKind {
    Photo,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Photo => f.write_str("photo"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

fn reason_suffix(code: &u16, reason: &Option<String>) -> String {
    if let Some(reason) = reason {
        return format!(": {}", reason);
    }

    // Give em a generic reason
    match *code {
        400 => String::from(" Bad Request: The given parameters were invalid"),
        401 => String::from(" Unauthorized: The API key is missing or invalid"),
        403 => String::from(" Forbidden: Access denied"),
        404 => String::from(" Not Found"),
        429 => String::from(" Too Many Requests: The rate limit has been exceeded"),
        500 => String::from(" Internal Server Error: Some unknown error occurred on the server"),
        502 => String::from(" Bad Gateway"),
        503 => String::from(" Service Unavailable: Try again later"),
        _ => String::new(),
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Network(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Protocol(ProtocolError::Json(e))
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        Error::Configuration(format!("Invalid header value: {}", e))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Configuration(format!("Invalid base URL: {}", e))
    }
}
