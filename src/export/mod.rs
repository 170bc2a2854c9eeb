//! Report export: fetch a document and save it under its canonical filename.

pub(crate) mod api;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::{DateRange, ExportFormat, ReportError, ReportKind, ReportSource};

/// `{type}_{startDate}_{endDate}.{format}`, e.g. `delinquents_2024-01-01_2024-01-31.pdf`.
pub fn export_filename(kind: ReportKind, format: ExportFormat, range: &DateRange) -> String {
    format!(
        "{kind}_{}_{}.{format}",
        range.start().format("%Y-%m-%d"),
        range.end().format("%Y-%m-%d"),
    )
}

/// Destination for downloaded documents.
pub trait DownloadSink: Send + Sync {
    /// Store `body` under `filename` and return where it ended up.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(&self, filename: &str, body: &[u8]) -> Result<PathBuf, ReportError>;
}

/// Writes downloads into a directory.
///
/// The body is staged in a hidden temp file and renamed into place, so a
/// failed write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

impl DownloadSink for DirectorySink {
    fn save(&self, filename: &str, body: &[u8]) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(filename);
        let seq = STAGING_SEQ.fetch_add(1, Ordering::Relaxed);
        let staging = self
            .dir
            .join(format!(".{filename}.{}.{seq}.part", std::process::id()));

        let written =
            std::fs::write(&staging, body).and_then(|()| std::fs::rename(&staging, &target));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&staging);
            return Err(e.into());
        }
        Ok(target)
    }
}

/// A finished download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: usize,
}

impl fmt::Display for Download {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.path.display(), self.bytes)
    }
}

/// Fetch one report document and hand it to `sink`.
///
/// With the default client the document is a plain-text placeholder when the
/// API is down, so this only fails on an expired session or a sink error.
///
/// # Errors
///
/// Returns an error if the source fails without a fallback or the sink cannot
/// store the document.
#[tracing::instrument(skip(source, sink, range), fields(start = %range.start(), end = %range.end()))]
pub async fn download<S: ReportSource + ?Sized>(
    source: &S,
    kind: ReportKind,
    format: ExportFormat,
    range: &DateRange,
    sink: &dyn DownloadSink,
) -> Result<Download, ReportError> {
    let body = source.export(kind, format, range).await?;
    let filename = export_filename(kind, format, range);
    let path = sink.save(&filename, &body)?;
    tracing::info!(path = %path.display(), bytes = body.len(), "report exported");
    Ok(Download {
        filename,
        path,
        bytes: body.len(),
    })
}
