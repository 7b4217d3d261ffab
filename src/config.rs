//! Command-line and environment configuration for the server binary.

use chrono::format::ParseErrorKind;
use chrono::{FixedOffset, Offset, Utc};
use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

/// Default `SQLite` database location.
pub const DEFAULT_DATABASE_URL: &str = "task.db";

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Default offset used to decide which calendar day is "today".
pub const DEFAULT_TODAY_OFFSET: &str = "+08:00";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "daybook=info,tower_http=info";

/// Runtime configuration for the daybook server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "daybook", version, about = "Personal task tracker with a daily half-hour grid")]
pub struct AppConfig {
    /// `SQLite` database path, or `:memory:` for a throwaway store.
    #[arg(long, env = "DAYBOOK_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Address the HTTP server listens on.
    #[arg(long, env = "DAYBOOK_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// UTC offset of the day shown on the today page, such as `+08:00`.
    #[arg(
        long,
        env = "DAYBOOK_TODAY_OFFSET",
        default_value = DEFAULT_TODAY_OFFSET,
        value_parser = parse_utc_offset,
        allow_hyphen_values = true
    )]
    pub today_offset: FixedOffset,

    /// Tracing filter directives used when `RUST_LOG` is unset.
    #[arg(long, env = "DAYBOOK_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

/// Errors raised while parsing configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The offset is not of the form `±HH:MM` or `Z`.
    #[error("invalid UTC offset '{0}': expected ±HH:MM or Z")]
    MalformedOffset(String),

    /// The offset is well formed but outside ±23:59.
    #[error("UTC offset '{0}' is out of range")]
    OffsetOutOfRange(String),
}

/// Parses `±HH:MM`, `±HHMM` or `Z` into a fixed offset.
///
/// # Errors
///
/// Returns [`ConfigError`] when the text is malformed or out of range.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }

    trimmed
        .parse::<FixedOffset>()
        .map_err(|err| match err.kind() {
            ParseErrorKind::OutOfRange => ConfigError::OffsetOutOfRange(raw.to_owned()),
            _ => ConfigError::MalformedOffset(raw.to_owned()),
        })
}
