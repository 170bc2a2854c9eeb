//! Bearer-token persistence and session teardown.
//!
//! The token is read before every request. A 401 from the API clears it and
//! notifies the [`SessionHook`], which owns the "go to login" flow.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use reqwest::RequestBuilder;

use crate::core::ReportError;

/// Persisted client-side storage for the bearer token.
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Returns the stored token, if any.
    fn token(&self) -> Option<String>;
    /// Replaces the stored token.
    fn set_token(&self, token: &str) -> Result<(), ReportError>;
    /// Removes the stored token.
    fn clear(&self) -> Result<(), ReportError>;
}

/// Receives the session-expired signal raised on HTTP 401.
pub trait SessionHook: Send + Sync {
    /// Called once per rejected request, after the token has been cleared.
    fn session_expired(&self);
}

/// In-process token storage. Lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates a store pre-seeded with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: &str) -> Result<(), ReportError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ReportError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token storage backed by a single file holding the raw token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn set_token(&self, token: &str) -> Result<(), ReportError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ReportError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl super::ReportClient {
    /// Attach `Authorization: Bearer <token>` when a token is stored.
    pub(crate) fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.tokens().token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Tear the session down after a 401: drop the token, then notify the hook.
    pub(crate) fn end_session(&self) {
        if let Err(e) = self.tokens().clear() {
            tracing::warn!(error = %e, "failed to clear stored token");
        }
        tracing::info!("API rejected the bearer token; session cleared");
        if let Some(hook) = self.session_hook() {
            hook.session_expired();
        }
    }
}
