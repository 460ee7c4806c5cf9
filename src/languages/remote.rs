//! The remote language list.

use std::time::Duration;

use http::HeaderValue;
use serde::Deserialize;
use url::Url;

use super::{FetchError, HttpClient, HttpError, HttpRequest};

/// Endpoint serving the list of valid language codes.
pub const LANGUAGES_URL: &str = "https://data.jw-api.org/mediator/v1/languages/E/web?clientType=www";

/// Default upper bound on one language list request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One entry of the language list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// Language code, e.g. `E`
    pub code: String,
    /// Human-readable name, e.g. `English`
    pub name: String,
}

impl Language {
    /// Creates a language entry.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Source of the ordered list of valid language codes.
///
/// The parser calls this synchronously while coercing `--lang` and
/// `--languages`. Implementations may block.
pub trait LanguageSource: Send + Sync {
    /// Fetches the full list, in the order the source provides it.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the list cannot be obtained.
    fn fetch(&self) -> Result<Vec<Language>, FetchError>;
}

#[derive(Deserialize)]
struct LanguagesDocument {
    languages: Vec<Language>,
}

/// Decodes the JSON body served at [`LANGUAGES_URL`].
///
/// Only `code` and `name` are read from each entry; other keys are ignored.
///
/// # Errors
///
/// Returns the `serde_json` error if the body does not contain a
/// `languages` array of `{code, name}` objects.
pub fn decode_languages(body: &[u8]) -> Result<Vec<Language>, serde_json::Error> {
    serde_json::from_slice::<LanguagesDocument>(body).map(|doc| doc.languages)
}

/// [`LanguageSource`] backed by an HTTP endpoint.
///
/// Each [`fetch`](LanguageSource::fetch) drives the async client on the
/// source's own current-thread runtime and gives up after `timeout`. It must
/// not be called from inside another Tokio runtime.
#[derive(Debug)]
pub struct RemoteLanguages<C> {
    client: C,
    url: Url,
    timeout: Duration,
    runtime: tokio::runtime::Runtime,
}

impl<C: HttpClient> RemoteLanguages<C> {
    /// Creates a source for the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the endpoint does not parse and
    /// [`FetchError::Runtime`] if the runtime cannot be started.
    pub fn new(client: C) -> Result<Self, FetchError> {
        let url = Url::parse(LANGUAGES_URL).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
        Self::with_url(client, url)
    }

    /// Creates a source for a custom endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Runtime`] if the runtime cannot be started.
    pub fn with_url(client: C, url: Url) -> Result<Self, FetchError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        Ok(Self {
            client,
            url,
            timeout: DEFAULT_TIMEOUT,
            runtime,
        })
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<C: HttpClient> LanguageSource for RemoteLanguages<C> {
    fn fetch(&self) -> Result<Vec<Language>, FetchError> {
        let request = HttpRequest::get(self.url.clone()).with_header(
            http::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );

        tracing::debug!(url = %self.url, "Fetching language list");

        // The timer must be created inside the runtime, which owns the time driver.
        let response = self
            .runtime
            .block_on(async {
                tokio::time::timeout(self.timeout, self.client.request(request)).await
            })
            .map_err(|_| FetchError::Timeout {
                after: self.timeout,
            })??;

        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }

        let languages = decode_languages(&response.body)?;
        tracing::debug!(count = languages.len(), "Fetched language list");
        Ok(languages)
    }
}
