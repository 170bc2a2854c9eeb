//! Centralized constants for default endpoints, UA and timings.

/// Identifies this client in server access logs.
pub(crate) const USER_AGENT: &str = concat!("loan-reports/", env!("CARGO_PKG_VERSION"));

/// Local development API host, used when no base URL is configured.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Path prefix of every report endpoint (report kind is appended).
pub(crate) const REPORTS_PATH: &str = "api/reports/";

/// Summary counters endpoint of the back office.
pub(crate) const DASHBOARD_STATS_PATH: &str = "api/dashboard/stats";

/// Overall per-request timeout applied to the transport.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How long a failed call waits before handing back its mock payload.
pub(crate) const DEFAULT_FALLBACK_DELAY_MS: u64 = 500;
