//! Column plan resolution.

use std::collections::BTreeMap;

use crate::schema::{FieldDescriptor, Record, ScalarKind};
use crate::timestamp::TimeFormat;

/// Per-record-type column plan.
///
/// Holds the column names and the timestamp format overrides keyed by
/// column position. Positions without an override use RFC 3339.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPlan {
    columns: Vec<&'static str>,
    layout: BTreeMap<usize, &'static str>,
}

impl ColumnPlan {
    /// Resolve the plan for `T` from its field descriptors.
    #[must_use]
    pub fn resolve<T: Record>() -> Self {
        let plan = Self::from_fields(&T::fields());
        tracing::debug!(
            record = std::any::type_name::<T>(),
            columns = plan.width(),
            overrides = plan.layout.len(),
            "resolved column plan"
        );
        plan
    }

    /// Build a plan from descriptors. Overrides on non-timestamp fields are ignored.
    #[must_use]
    pub fn from_fields(fields: &[FieldDescriptor]) -> Self {
        let mut layout = BTreeMap::new();
        for (index, field) in fields.iter().enumerate() {
            let Some(format) = field.format else {
                continue;
            };
            if field.kind.scalar() == ScalarKind::Timestamp {
                layout.insert(index, format);
            } else {
                tracing::warn!(
                    field = field.name,
                    kind = %field.kind.scalar(),
                    format,
                    "format override on non-timestamp field ignored"
                );
            }
        }
        Self {
            columns: fields.iter().map(|field| field.name).collect(),
            layout,
        }
    }

    /// Number of columns a row must have.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Column name at `index`, or `"?"` past the end.
    #[must_use]
    pub fn name(&self, index: usize) -> &'static str {
        self.columns.get(index).copied().unwrap_or("?")
    }

    /// Format override at `index`, if any.
    #[must_use]
    pub fn format_override(&self, index: usize) -> Option<&'static str> {
        self.layout.get(&index).copied()
    }

    /// Active timestamp format at `index`.
    #[must_use]
    pub fn format(&self, index: usize) -> TimeFormat<'static> {
        TimeFormat::from_override(self.format_override(index))
    }

    /// Overrides keyed by column position.
    #[must_use]
    pub fn overrides(&self) -> &BTreeMap<usize, &'static str> {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    fn field(name: &'static str, kind: ScalarKind) -> FieldDescriptor {
        FieldDescriptor::new(name, FieldKind::Required(kind))
    }

    #[test]
    fn test_empty_layout() {
        let plan = ColumnPlan::from_fields(&[
            field("name", ScalarKind::Text),
            field("day", ScalarKind::Timestamp),
        ]);
        assert_eq!(plan.width(), 2);
        assert!(plan.overrides().is_empty());
        assert_eq!(plan.format(1), TimeFormat::Rfc3339);
    }

    #[test]
    fn test_override_keyed_by_position() {
        let plan = ColumnPlan::from_fields(&[
            field("name", ScalarKind::Text),
            field("day", ScalarKind::Timestamp).with_format("%b %-d"),
        ]);
        assert_eq!(plan.overrides().len(), 1);
        assert_eq!(plan.format_override(1), Some("%b %-d"));
        assert_eq!(plan.format(1), TimeFormat::Pattern("%b %-d"));
        assert_eq!(plan.format_override(0), None);
    }

    #[test]
    fn test_nullable_timestamp_override() {
        let day = FieldDescriptor::new("day", FieldKind::Nullable(ScalarKind::Timestamp))
            .with_format("%Y");
        let plan = ColumnPlan::from_fields(&[day]);
        assert_eq!(plan.format_override(0), Some("%Y"));
    }

    #[test]
    fn test_override_on_non_timestamp_is_ignored() {
        let plan = ColumnPlan::from_fields(&[field("id", ScalarKind::Integer).with_format("%Y")]);
        assert!(plan.overrides().is_empty());
    }

    #[test]
    fn test_names() {
        let plan = ColumnPlan::from_fields(&[field("id", ScalarKind::Integer)]);
        assert_eq!(plan.columns(), ["id"]);
        assert_eq!(plan.name(0), "id");
        assert_eq!(plan.name(5), "?");
    }
}
