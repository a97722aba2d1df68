use super::{
    error::{Error, ProtocolError, Result},
    random::{self, PageSelector},
    utils,
};

use derivative::Derivative;

use log::{debug, trace, warn};

use reqwest::{
    blocking::Response,
    header::{self, HeaderMap, HeaderValue},
    Method,
};

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, PoisonError,
};
use std::time::Duration;

use url::Url;

/// Root of the photo endpoints.
pub const PHOTO_API: &str = "https://api.pexels.com/v1/";

/// Root of the video endpoints.
pub const VIDEO_API: &str = "https://api.pexels.com/videos/";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client struct.
///
/// Every method performing a request blocks until the response has been received and decoded.
/// The remaining quota is shared by all threads using the same client: it only reflects the last
/// response received, whichever thread it came from.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Client {
    #[derivative(Debug = "ignore")]
    token: HeaderValue,
    client: reqwest::blocking::Client,
    photo_api: Url,
    video_api: Url,
    remaining_quota: AtomicU64,
    #[derivative(Debug = "ignore")]
    page_selector: Mutex<Box<dyn PageSelector>>,
}

impl Client {
    /// Create a new client authenticating with the given API token, with default settings.
    /// The token mustn't be empty.
    ///
    /// ```no_run
    /// # use pexels::client::Client;
    /// # fn main() -> pexels::error::Result<()> {
    /// let client = Client::new("my-api-key")?;
    /// # Ok(()) }
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Start configuring a client authenticating with the given API token.
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    /// Number of requests left in the current period, as reported by the last successful
    /// response. `0` until a request has been made.
    pub fn remaining_quota(&self) -> u64 {
        self.remaining_quota.load(Ordering::Relaxed)
    }

    pub(crate) fn photo_endpoint(&self, endpoint: &str) -> String {
        format!("{}{}", self.photo_api, endpoint)
    }

    pub(crate) fn video_endpoint(&self, endpoint: &str) -> String {
        format!("{}{}", self.video_api, endpoint)
    }

    /// Draws the page index used by the random helpers.
    pub(crate) fn select_random_page(&self) -> u32 {
        let mut selector = self
            .page_selector
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        selector.select_page(random::RANDOM_PAGE_BOUND)
    }

    pub(crate) fn request_with_auth(&self, method: Method, url: &str) -> Result<Response> {
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, self.token.clone())
            .send()?;

        let status = response.status();
        debug!("{} responded with {}", url, status);

        if !status.is_success() {
            // status errors take precedence over quota header errors
            if let Ok(quota) = utils::get_remaining_quota(response.headers()) {
                self.store_quota(quota);
            }

            let code = status.as_u16();
            let reason = response
                .text()
                .ok()
                .and_then(|body| serde_json::from_str::<JsonValue>(&body).ok())
                .and_then(|body| utils::get_error_reason(&body));

            warn!("{} failed with HTTP {} ({:?})", url, code, reason);
            return Err(ProtocolError::Status { code, reason }.into());
        }

        match utils::get_remaining_quota(response.headers()) {
            Ok(quota) => self.store_quota(quota),
            Err(e) => {
                warn!("{}: {}", url, e);
                return Err(e);
            }
        }

        Ok(response)
    }

    pub(crate) fn get_json_endpoint<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let text = self.request_with_auth(Method::GET, url)?.text()?;
        let body: JsonValue = serde_json::from_str(&text)?;

        // some failures come back as a 2xx with an error object instead of the record
        if let Some(reason) = utils::get_error_reason(&body) {
            warn!("{} answered with an error body: {}", url, reason);
            return Err(ProtocolError::ErrorBody(reason).into());
        }

        Ok(serde_json::from_value(body)?)
    }

    fn store_quota(&self, quota: u64) {
        trace!("remaining quota: {}", quota);
        self.remaining_quota.store(quota, Ordering::Relaxed);
    }
}

/// Configuration for a [`Client`].
///
/// ```no_run
/// # use pexels::client::Client;
/// # use std::time::Duration;
/// # fn main() -> pexels::error::Result<()> {
/// let client = Client::builder("my-api-key")
///     .timeout(Duration::from_secs(10))
///     .user_agent("MyProject/1.0")
///     .build()?;
/// # Ok(()) }
/// ```
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ClientBuilder {
    #[derivative(Debug = "ignore")]
    token: String,
    photo_api: String,
    video_api: String,
    timeout: Option<Duration>,
    user_agent: String,
    #[derivative(Debug = "ignore")]
    page_selector: Option<Box<dyn PageSelector>>,
}

impl ClientBuilder {
    fn new(token: impl Into<String>) -> Self {
        ClientBuilder {
            token: token.into(),
            photo_api: String::from(PHOTO_API),
            video_api: String::from(VIDEO_API),
            timeout: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
            page_selector: None,
        }
    }

    /// Root URL of the photo endpoints. Defaults to [`PHOTO_API`].
    pub fn photo_api(mut self, url: impl Into<String>) -> Self {
        self.photo_api = url.into();
        self
    }

    /// Root URL of the video endpoints. Defaults to [`VIDEO_API`].
    pub fn video_api(mut self, url: impl Into<String>) -> Self {
        self.video_api = url.into();
        self
    }

    /// Total time allowed for each request. No timeout by default.
    pub fn timeout<T: Into<Option<Duration>>>(mut self, timeout: T) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// Value of the User-Agent header. Defaults to `pexels/<version>`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Source of the page indices used by [`Client::random_photo`] and
    /// [`Client::random_video`]. Defaults to a generator seeded once from the OS.
    pub fn page_selector(mut self, selector: impl PageSelector + 'static) -> Self {
        self.page_selector = Some(Box::new(selector));
        self
    }

    /// Creates the client, validating the token, user agent and base URLs.
    pub fn build(self) -> Result<Client> {
        if self.token.is_empty() {
            return Err(Error::Configuration(String::from(
                "API token mustn't be empty",
            )));
        }

        if self.user_agent.is_empty() {
            return Err(Error::Configuration(String::from(
                "User Agent mustn't be empty",
            )));
        }

        let mut token = HeaderValue::from_str(&self.token)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(&self.user_agent)?);

        let client = match reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
        {
            Ok(c) => c,
            Err(e) => return Err(Error::Configuration(format!("{:?}", e))),
        };

        Ok(Client {
            token,
            client,
            photo_api: parse_base_url(&self.photo_api)?,
            video_api: parse_base_url(&self.video_api)?,
            remaining_quota: AtomicU64::new(0),
            page_selector: Mutex::new(
                self.page_selector
                    .unwrap_or_else(random::default_selector),
            ),
        })
    }
}

/// Endpoint names are appended to the base, so it has to end with a slash.
fn parse_base_url(url: &str) -> Result<Url> {
    let mut url = Url::parse(url)?;

    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "{} can't be used as a base URL",
            url
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
