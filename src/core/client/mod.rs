//! Public client surface + builder.
//! Internals are split into `auth` (bearer token/session) and `constants` (UA + defaults).

mod auth;
pub(crate) mod constants;

pub use auth::{FileTokenStore, MemoryTokenStore, SessionHook, TokenStore};

use crate::core::ReportError;
use constants::{
    DASHBOARD_STATS_PATH, DEFAULT_BASE_URL, DEFAULT_FALLBACK_DELAY_MS, DEFAULT_TIMEOUT_SECS,
    REPORTS_PATH, USER_AGENT,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// HTTP client for the loan back-office report API.
///
/// Cheap to clone: the connection pool, token store and session hook are shared.
#[derive(Clone)]
pub struct ReportClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
    session_hook: Option<Arc<dyn SessionHook>>,
    fallback: bool,
    fallback_delay: Duration,
}

impl fmt::Debug for ReportClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportClient")
            .field("base_url", &self.base_url.as_str())
            .field("tokens", &self.tokens)
            .field("fallback", &self.fallback)
            .field("fallback_delay", &self.fallback_delay)
            .finish_non_exhaustive()
    }
}

impl Default for ReportClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl ReportClient {
    /// Create a new builder.
    pub fn builder() -> ReportClientBuilder {
        ReportClientBuilder::default()
    }

    /// The API host every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether failed report calls are answered with mock data.
    pub const fn fallback_enabled(&self) -> bool {
        self.fallback
    }

    /// The store holding the bearer token attached to each request.
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn session_hook(&self) -> Option<&dyn SessionHook> {
        self.session_hook.as_deref()
    }

    /// `{base}/api/reports/{path}`
    pub(crate) fn report_url(&self, path: &str) -> Result<Url, ReportError> {
        Ok(self.base_url.join(REPORTS_PATH)?.join(path)?)
    }

    pub(crate) fn stats_url(&self) -> Result<Url, ReportError> {
        Ok(self.base_url.join(DASHBOARD_STATS_PATH)?)
    }

    /// Send a request with the bearer token attached and map the status.
    ///
    /// A 401 ends the session before returning [`ReportError::Unauthorized`].
    pub(crate) async fn send(&self, req: RequestBuilder) -> Result<Response, ReportError> {
        let resp = self.authorize(req).send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            self.end_session();
            return Err(ReportError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ReportError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }
        Ok(resp)
    }

    /// Replace a failed call's error with `fallback()` after the simulated delay.
    ///
    /// Session expiry is never masked, and nothing is substituted when the
    /// fallback is switched off.
    pub(crate) async fn degrade<T>(
        &self,
        what: &str,
        result: Result<T, ReportError>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T, ReportError> {
        match result {
            Ok(v) => Ok(v),
            Err(ReportError::Unauthorized) => Err(ReportError::Unauthorized),
            Err(e) if self.fallback => {
                tracing::warn!(report = what, error = %e, "report API unavailable, using mock data");
                if !self.fallback_delay.is_zero() {
                    tokio::time::sleep(self.fallback_delay).await;
                }
                Ok(fallback())
            }
            Err(e) => Err(e),
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ReportClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    tokens: Option<Arc<dyn TokenStore>>,
    session_hook: Option<Arc<dyn SessionHook>>,
    fallback: Option<bool>,
    fallback_delay: Option<Duration>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ReportClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API host (e.g., `https://backoffice.example.com/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Where the bearer token is read from. Default: an empty [`MemoryTokenStore`].
    #[must_use]
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(store);
        self
    }

    /// Called when the API answers 401, after the token was cleared.
    #[must_use]
    pub fn session_hook(mut self, hook: Arc<dyn SessionHook>) -> Self {
        self.session_hook = Some(hook);
        self
    }

    /// Answer failed report calls with mock data. Default: `true`.
    #[must_use]
    pub const fn fallback(mut self, enabled: bool) -> Self {
        self.fallback = Some(enabled);
        self
    }

    /// Simulated latency before mock data is returned. Default: 500ms.
    #[must_use]
    pub const fn fallback_delay(mut self, dur: Duration) -> Self {
        self.fallback_delay = Some(dur);
        self
    }

    /// Set a global request timeout (overall). Default: 10s.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<ReportClient, ReportError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        // `Url::join` drops the last path segment unless it ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ReportClient {
            http,
            base_url,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::default())),
            session_hook: self.session_hook,
            fallback: self.fallback.unwrap_or(true),
            fallback_delay: self
                .fallback_delay
                .unwrap_or(Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS)),
        })
    }
}
