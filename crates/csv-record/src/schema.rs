//! Record type descriptors.
//!
//! A record type describes itself as an ordered list of [`FieldDescriptor`]s.
//! The list order is the column order: fields are never matched against a
//! header by name.

use crate::cell::Cell;
use crate::decode::RowDecoder;
use crate::encode::RowEncoder;
use crate::error::Result;

/// Semantic kind of a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Integer,
    Real,
    Boolean,
    Timestamp,
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
            Self::Boolean => write!(f, "boolean"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Semantic kind of a field, including whether it may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Always holds a value; an empty token is text or a conversion error.
    Required(ScalarKind),
    /// Empty token decodes to absent, absent encodes to an empty token.
    Nullable(ScalarKind),
}

impl FieldKind {
    /// The same scalar kind, wrapped as nullable.
    #[must_use]
    pub const fn nullable(self) -> Self {
        match self {
            Self::Required(kind) | Self::Nullable(kind) => Self::Nullable(kind),
        }
    }

    /// Underlying kind of a present value.
    #[must_use]
    pub const fn scalar(self) -> ScalarKind {
        match self {
            Self::Required(kind) | Self::Nullable(kind) => kind,
        }
    }

    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

/// One field of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name, used for header rows and error messages.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Timestamp format override attached to the field.
    pub format: Option<&'static str>,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            format: None,
        }
    }

    /// Descriptor for the field selected by `project`, kind taken from its type.
    #[must_use]
    pub fn of<R, C, F>(name: &'static str, _project: F) -> Self
    where
        C: Cell,
        F: Fn(&R) -> &C,
    {
        Self::new(name, C::KIND)
    }

    /// Override the column name.
    #[must_use]
    pub const fn renamed(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Attach a timestamp format override.
    #[must_use]
    pub const fn with_format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }
}

/// A fixed-shape record that maps to one row of tokens.
///
/// Usually implemented through [`csv_record!`](crate::csv_record). A manual
/// implementation must decode and encode exactly the fields returned by
/// [`Record::fields`], in the same order.
pub trait Record: Sized {
    /// Field descriptors in column order.
    fn fields() -> Vec<FieldDescriptor>;

    /// Build a record from the cells of one row.
    fn decode(row: &mut RowDecoder<'_>) -> Result<Self>;

    /// Push every field into one row.
    fn encode(&self, row: &mut RowEncoder<'_>) -> Result<()>;
}

/// Column names of `T` in declaration order.
#[must_use]
pub fn field_names<T: Record>() -> Vec<&'static str> {
    T::fields().into_iter().map(|field| field.name).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    #[allow(dead_code)]
    struct Sample {
        id: i64,
        seen: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_kind_from_projection() {
        let id = FieldDescriptor::of("id", |s: &Sample| &s.id);
        assert_eq!(id.kind, FieldKind::Required(ScalarKind::Integer));
        assert_eq!(id.format, None);

        let seen = FieldDescriptor::of("seen", |s: &Sample| &s.seen).with_format("%Y");
        assert_eq!(seen.kind, FieldKind::Nullable(ScalarKind::Timestamp));
        assert!(seen.kind.is_nullable());
        assert_eq!(seen.kind.scalar(), ScalarKind::Timestamp);
        assert_eq!(seen.format, Some("%Y"));
    }

    #[test]
    fn test_nullable_is_idempotent() {
        let kind = FieldKind::Required(ScalarKind::Real).nullable().nullable();
        assert_eq!(kind, FieldKind::Nullable(ScalarKind::Real));
    }

    #[test]
    fn test_renamed() {
        let field = FieldDescriptor::new("gdp", FieldKind::Required(ScalarKind::Real))
            .renamed("GDP (trillions)");
        assert_eq!(field.name, "GDP (trillions)");
    }
}
