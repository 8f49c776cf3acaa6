// crates/steam-compare-source/src/http.rs
// ============================================================================
// Module: Steam Compare HTTP Source
// Description: HTTP-backed library source.
// Purpose: Fetch library documents via blocking HTTP GET.
// Dependencies: steam-compare-core, reqwest, url
// ============================================================================

//! ## Overview
//! [`HttpLibrarySource`] instantiates a locator's URL against its base URL and
//! issues one GET per call. Non-success status codes fail closed.
//! Invariants:
//! - Only `http` and `https` base URLs are accepted.
//! - Redirects are followed up to [`MAX_REDIRECTS`]; vanity URLs redirect.
//! - Document bytes are capped at the configured maximum.
//! - Locator ids are percent-encoded as one path segment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use steam_compare_core::DEFAULT_MAX_DOCUMENT_BYTES;
use steam_compare_core::FetchError;
use steam_compare_core::LibrarySource;
use steam_compare_core::Locator;
use url::Url;

use crate::enforce_max_bytes;
use crate::read_document;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum redirects followed per request.
pub const MAX_REDIRECTS: usize = 5;
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("steam-compare/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// SECTION: Options
// ============================================================================

/// Construction options for [`HttpLibrarySource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSourceOptions {
    /// Base URL that locator paths are appended to.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent header value.
    pub user_agent: String,
    /// Maximum accepted document size in bytes.
    pub max_document_bytes: usize,
}

impl Default for HttpSourceOptions {
    fn default() -> Self {
        Self {
            base_url: Locator::DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

// ============================================================================
// SECTION: HTTP Source
// ============================================================================

/// HTTP-backed library source.
#[derive(Debug, Clone)]
pub struct HttpLibrarySource {
    /// HTTP client used for fetch requests.
    client: Client,
    /// Validated base URL without a trailing slash.
    base_url: String,
    /// Maximum accepted document size in bytes.
    max_document_bytes: usize,
}

impl HttpLibrarySource {
    /// Builds a source for the public community host with default options.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_options(HttpSourceOptions::default())
    }

    /// Builds a source from explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidLocator`] for an unusable base URL and
    /// [`FetchError::Transport`] when the client cannot be constructed.
    pub fn with_options(options: HttpSourceOptions) -> Result<Self, FetchError> {
        let base_url = validate_base_url(&options.base_url)?;
        let client = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(options.timeout)
            .user_agent(options.user_agent)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url,
            max_document_bytes: options.max_document_bytes,
        })
    }

    /// Creates a source with a preconfigured client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidLocator`] for an unusable base URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            base_url: validate_base_url(base_url)?,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        })
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full request URL for `locator`.
    ///
    /// The locator id is percent-encoded as a single path segment, so `/`,
    /// `?`, and `#` in a handle never change the requested path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidLocator`] when the base URL cannot carry a path.
    pub fn request_url(&self, locator: &Locator) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|err| FetchError::InvalidLocator(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidLocator(format!("base url cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(locator.path_segments());
        url.set_query(Some(Locator::QUERY));
        Ok(url)
    }
}

impl LibrarySource for HttpLibrarySource {
    fn fetch(&self, locator: &Locator) -> Result<String, FetchError> {
        let url = self.request_url(locator)?;
        let response =
            self.client.get(url.as_str()).send().map_err(|err| FetchError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        if let Some(length) = response.content_length() {
            let actual_bytes = usize::try_from(length).unwrap_or(usize::MAX);
            enforce_max_bytes(actual_bytes, self.max_document_bytes)?;
        }
        read_document(response, self.max_document_bytes, |err| FetchError::Transport(err.to_string()))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates a base URL and strips trailing slashes.
fn validate_base_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|err| FetchError::InvalidLocator(format!("{trimmed}: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(FetchError::InvalidLocator(format!("unsupported scheme: {scheme}"))),
    }
}
