use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::ReportError;

/// Business timezone of the back office. "Today" for due-date urgency is evaluated here.
pub const BUSINESS_TZ: Tz = chrono_tz::America::Sao_Paulo;

/// The current calendar date in [`BUSINESS_TZ`].
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&BUSINESS_TZ).date_naive()
}

/// An inclusive `[start, end]` range of calendar dates every report is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDates`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDates);
        }
        Ok(Self { start, end })
    }

    /// From the first day of `today`'s month through `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self { start, end: today }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// `startDate`/`endDate` query pairs in ISO `YYYY-MM-DD` form.
    pub(crate) fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("startDate", self.start.format("%Y-%m-%d").to_string()),
            ("endDate", self.end.format("%Y-%m-%d").to_string()),
        ]
    }
}

/// The six report datasets served by `/api/reports/*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Kpis,
    MonthlyEvolution,
    InstallmentsStatus,
    TopClients,
    Delinquents,
    DueSoon,
}

impl ReportKind {
    pub const ALL: [Self; 6] = [
        Self::Kpis,
        Self::MonthlyEvolution,
        Self::InstallmentsStatus,
        Self::TopClients,
        Self::Delinquents,
        Self::DueSoon,
    ];

    /// Path segment used by the API, and the report tag in export filenames.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kpis => "kpis",
            Self::MonthlyEvolution => "monthly-evolution",
            Self::InstallmentsStatus => "installments-status",
            Self::TopClients => "top-clients",
            Self::Delinquents => "delinquents",
            Self::DueSoon => "due-soon",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ReportError::Config(format!("unknown report type: {s}")))
    }
}

/// Document format of an exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Xlsx,
}

impl ExportFormat {
    /// Query value and file extension.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(ReportError::Config(format!("unknown export format: {other}"))),
        }
    }
}
