//! Conversion rules between one token and one field value.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::CellError;
use crate::schema::{FieldKind, ScalarKind};
use crate::timestamp::{self, TimeFormat};

/// A field type that converts to and from a single token.
///
/// The format argument only matters for timestamp kinds.
pub trait Cell: Sized {
    const KIND: FieldKind;

    fn parse_cell(token: &str, format: TimeFormat<'_>) -> Result<Self, CellError>;

    fn format_cell(&self, format: TimeFormat<'_>) -> Result<String, CellError>;
}

impl Cell for String {
    const KIND: FieldKind = FieldKind::Required(ScalarKind::Text);

    fn parse_cell(token: &str, _format: TimeFormat<'_>) -> Result<Self, CellError> {
        Ok(token.to_string())
    }

    fn format_cell(&self, _format: TimeFormat<'_>) -> Result<String, CellError> {
        Ok(self.clone())
    }
}

macro_rules! integer_cell {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cell for $ty {
                const KIND: FieldKind = FieldKind::Required(ScalarKind::Integer);

                fn parse_cell(token: &str, _format: TimeFormat<'_>) -> Result<Self, CellError> {
                    token.parse().map_err(|source| CellError::Integer {
                        token: token.to_string(),
                        source,
                    })
                }

                fn format_cell(&self, _format: TimeFormat<'_>) -> Result<String, CellError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

integer_cell!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! real_cell {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cell for $ty {
                const KIND: FieldKind = FieldKind::Required(ScalarKind::Real);

                fn parse_cell(token: &str, _format: TimeFormat<'_>) -> Result<Self, CellError> {
                    token.parse().map_err(|source| CellError::Real {
                        token: token.to_string(),
                        source,
                    })
                }

                // Display is the shortest form that parses back to the same value.
                fn format_cell(&self, _format: TimeFormat<'_>) -> Result<String, CellError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

real_cell!(f32, f64);

impl Cell for bool {
    const KIND: FieldKind = FieldKind::Required(ScalarKind::Boolean);

    fn parse_cell(token: &str, _format: TimeFormat<'_>) -> Result<Self, CellError> {
        match token {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(CellError::Boolean {
                token: token.to_string(),
            }),
        }
    }

    fn format_cell(&self, _format: TimeFormat<'_>) -> Result<String, CellError> {
        Ok(if *self { "true" } else { "false" }.to_string())
    }
}

impl Cell for DateTime<FixedOffset> {
    const KIND: FieldKind = FieldKind::Required(ScalarKind::Timestamp);

    fn parse_cell(token: &str, format: TimeFormat<'_>) -> Result<Self, CellError> {
        timestamp::parse(token, format)
    }

    fn format_cell(&self, format: TimeFormat<'_>) -> Result<String, CellError> {
        timestamp::format(self, format)
    }
}

impl Cell for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Required(ScalarKind::Timestamp);

    fn parse_cell(token: &str, format: TimeFormat<'_>) -> Result<Self, CellError> {
        timestamp::parse(token, format).map(|ts| ts.with_timezone(&Utc))
    }

    fn format_cell(&self, format: TimeFormat<'_>) -> Result<String, CellError> {
        timestamp::format(&self.fixed_offset(), format)
    }
}

/// Wall-clock values are read and written as UTC.
impl Cell for NaiveDateTime {
    const KIND: FieldKind = FieldKind::Required(ScalarKind::Timestamp);

    fn parse_cell(token: &str, format: TimeFormat<'_>) -> Result<Self, CellError> {
        timestamp::parse(token, format).map(|ts| ts.naive_utc())
    }

    fn format_cell(&self, format: TimeFormat<'_>) -> Result<String, CellError> {
        timestamp::format(&self.and_utc().fixed_offset(), format)
    }
}

impl Cell for NaiveDate {
    const KIND: FieldKind = FieldKind::Required(ScalarKind::Timestamp);

    fn parse_cell(token: &str, format: TimeFormat<'_>) -> Result<Self, CellError> {
        timestamp::parse(token, format).map(|ts| ts.date_naive())
    }

    fn format_cell(&self, format: TimeFormat<'_>) -> Result<String, CellError> {
        let midnight = self.and_time(NaiveTime::MIN).and_utc().fixed_offset();
        timestamp::format(&midnight, format)
    }
}

impl<T: Cell> Cell for Option<T> {
    const KIND: FieldKind = T::KIND.nullable();

    fn parse_cell(token: &str, format: TimeFormat<'_>) -> Result<Self, CellError> {
        if token.is_empty() {
            return Ok(None);
        }
        T::parse_cell(token, format).map(Some)
    }

    fn format_cell(&self, format: TimeFormat<'_>) -> Result<String, CellError> {
        match self {
            Some(value) => value.format_cell(format),
            None => Ok(String::new()),
        }
    }
}
