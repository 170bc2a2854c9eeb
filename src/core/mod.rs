//! Core components of the `loan-reports` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`ReportClient`] and its builder.
//! - The primary [`ReportError`] type.
//! - Shared models like [`DateRange`], [`ReportKind`] and [`ExportFormat`].
//! - Environment configuration and internal networking helpers.

/// The main client (`ReportClient`), builder, token storage and session hook.
pub mod client;
/// Environment configuration (`Config`).
pub mod config;
/// The primary error type (`ReportError`) for the crate.
pub mod error;
/// Shared models used across the report, export and dashboard modules.
pub mod models;
/// Service traits abstracting the report transport.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ReportClient`
pub use client::{ReportClient, ReportClientBuilder};
pub use config::Config;
pub use error::ReportError;
pub use models::{BUSINESS_TZ, DateRange, ExportFormat, ReportKind, today};
pub use services::{ReportFuture, ReportSource};
