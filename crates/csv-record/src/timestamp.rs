//! Timestamp parsing and formatting.
//!
//! Without an override, timestamps use RFC 3339. Override patterns use
//! `chrono` strftime syntax. Components a pattern leaves out decode as
//! year 0, January, day 1, midnight and UTC.

use std::fmt::Write;

use chrono::format::{self, ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Offset, SecondsFormat, Utc};

use crate::error::CellError;

/// Label used in error messages for the default format.
pub const RFC3339: &str = "RFC 3339";

/// Active format for one timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat<'a> {
    /// RFC 3339, e.g. `1776-07-04T00:00:00Z`.
    #[default]
    Rfc3339,
    /// strftime pattern, e.g. `%b %-d`.
    Pattern(&'a str),
}

impl<'a> TimeFormat<'a> {
    /// Pattern override if present, otherwise the default.
    #[must_use]
    pub fn from_override(pattern: Option<&'a str>) -> Self {
        pattern.map_or(Self::Rfc3339, Self::Pattern)
    }

    fn label(self) -> &'a str {
        match self {
            Self::Rfc3339 => RFC3339,
            Self::Pattern(pattern) => pattern,
        }
    }
}

/// Parse `token` with the given format.
pub fn parse(token: &str, format: TimeFormat<'_>) -> Result<DateTime<FixedOffset>, CellError> {
    let parsed = match format {
        TimeFormat::Rfc3339 => DateTime::parse_from_rfc3339(token),
        TimeFormat::Pattern(pattern) => match parse_pattern(token, pattern) {
            Ok(Some(timestamp)) => Ok(timestamp),
            Ok(None) => {
                return Err(CellError::TimestampRange {
                    token: token.to_string(),
                });
            }
            Err(err) => Err(err),
        },
    };
    parsed.map_err(|source| CellError::Timestamp {
        token: token.to_string(),
        format: format.label().to_string(),
        source,
    })
}

/// Format `timestamp` with the given format.
pub fn format(
    timestamp: &DateTime<FixedOffset>,
    format: TimeFormat<'_>,
) -> Result<String, CellError> {
    match format {
        TimeFormat::Rfc3339 => {
            let text = timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true);
            if !(0..=9999).contains(&timestamp.year()) {
                return Err(CellError::TimestampRange { token: text });
            }
            Ok(text)
        }
        TimeFormat::Pattern(pattern) => {
            let mut out = String::new();
            write!(out, "{}", timestamp.format(pattern)).map_err(|_| {
                CellError::TimestampFormat {
                    format: pattern.to_string(),
                }
            })?;
            Ok(out)
        }
    }
}

/// `Ok(None)` means every component parsed but the instant does not exist.
fn parse_pattern(
    token: &str,
    pattern: &str,
) -> Result<Option<DateTime<FixedOffset>>, format::ParseError> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, token, StrftimeItems::new(pattern))?;

    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(err) if err.kind() == ParseErrorKind::NotEnough => {
            with_date_defaults(&parsed)?.to_naive_date()?
        }
        Err(err) => return Err(err),
    };
    let time = match parsed.to_naive_time() {
        Ok(time) => time,
        Err(err) if err.kind() == ParseErrorKind::NotEnough => NaiveTime::MIN,
        Err(err) => return Err(err),
    };
    let offset = parsed.to_fixed_offset().unwrap_or_else(|_| Utc.fix());

    Ok(date.and_time(time).and_local_timezone(offset).single())
}

/// Fill the date components `parsed` lacks with year 0, month 1 and day 1.
///
/// Ordinal and week-based patterns pick their own day and get no month or
/// day default.
fn with_date_defaults(parsed: &Parsed) -> ParseResult<Parsed> {
    let mut filled = parsed.clone();
    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some();
    if !has_year {
        filled.set_year(0)?;
    }

    let by_week = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.week_from_sun().is_some();
    if !by_week {
        if parsed.month().is_none() {
            filled.set_month(1)?;
        }
        if parsed.day().is_none() {
            filled.set_day(1)?;
        }
    }
    Ok(filled)
}
