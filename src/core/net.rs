use crate::core::ReportError;
use serde::de::DeserializeOwned;
use std::env;
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    env::var("LOAN_REPORTS_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Save a live response body so it can be replayed by the offline tests.
fn record_fixture(endpoint: &str, body: &[u8]) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{endpoint}.json"));
    std::fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), "recorded fixture");
    Ok(())
}

fn recording() -> bool {
    env::var("LOAN_REPORTS_RECORD").ok().as_deref() == Some("1")
}

/// Read the response body as text.
/// If `LOAN_REPORTS_RECORD=1`, the body is also saved as `tests/fixtures/{endpoint}.json`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<String, ReportError> {
    let text = resp.text().await?;

    if recording()
        && let Err(e) = record_fixture(endpoint, text.as_bytes())
    {
        tracing::warn!(endpoint, error = %e, "failed to record fixture");
    }

    Ok(text)
}

/// Read a binary response body (export downloads).
pub(crate) async fn get_bytes(resp: reqwest::Response) -> Result<Vec<u8>, ReportError> {
    Ok(resp.bytes().await?.to_vec())
}

/// Decode a JSON body, naming the report in the error.
pub(crate) fn decode<T: DeserializeOwned>(text: &str, what: &str) -> Result<T, ReportError> {
    serde_json::from_str(text).map_err(|e| ReportError::Data(format!("{what} json parse: {e}")))
}
