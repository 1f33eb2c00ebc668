//! Shared utilities for CLI commands.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use dn_core::timestamp;
use serde::Serialize;

/// Width of the label column in detail views.
const LABEL_WIDTH: usize = 14;

/// Parse a timestamp flag value using the API's tolerant codec.
///
/// Supports RFC 3339 ("2026-01-15T10:30:00Z"), naive date-times read as UTC
/// ("2026-01-15 10:30:00") and plain dates ("2026-01-15").
pub fn parse_timestamp(value: &str, flag: &str) -> Result<DateTime<Utc>> {
    match timestamp::parse(value) {
        Ok(Some(dt)) => Ok(dt),
        Ok(None) => bail!("--{flag} cannot be empty"),
        Err(err) => Err(err).with_context(|| {
            format!("invalid --{flag} timestamp, expected ISO 8601 (e.g., 2026-01-15T10:30:00Z)")
        }),
    }
}

/// Human-readable timestamp, or `-` when absent.
pub fn format_time(dt: Option<DateTime<Utc>>) -> String {
    dt.map_or_else(
        || "-".to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Writes a table row without the padding left after the last column.
pub fn write_row<W: Write>(writer: &mut W, row: &str) -> Result<()> {
    writeln!(writer, "{}", row.trim_end())?;
    Ok(())
}

/// Writes one `Label: value` line of a detail view.
pub fn write_field<W: Write>(
    writer: &mut W,
    label: &str,
    value: impl std::fmt::Display,
) -> Result<()> {
    write_row(
        writer,
        &format!("{:<LABEL_WIDTH$}{value}", format!("{label}:")),
    )
}
