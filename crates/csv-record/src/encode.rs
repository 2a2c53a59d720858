//! Row encoding.

use csv::StringRecord;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::layout::ColumnPlan;
use crate::schema::Record;

/// Builder for the tokens of one row.
pub struct RowEncoder<'p> {
    plan: &'p ColumnPlan,
    row: StringRecord,
}

impl<'p> RowEncoder<'p> {
    #[must_use]
    pub fn new(plan: &'p ColumnPlan) -> Self {
        Self {
            plan,
            row: StringRecord::with_capacity(0, plan.width()),
        }
    }

    /// Append the token for the next field.
    pub fn encode<C: Cell>(&mut self, value: &C) -> Result<()> {
        let index = self.row.len();
        if index >= self.plan.width() {
            return Err(Error::row_length(self.plan.width(), index + 1));
        }
        let token = value
            .format_cell(self.plan.format(index))
            .map_err(|source| Error::Field {
                index,
                name: self.plan.name(index),
                source,
            })?;
        self.row.push_field(&token);
        Ok(())
    }

    /// The finished row, checked against the plan width.
    pub fn finish(self) -> Result<StringRecord> {
        if self.row.len() != self.plan.width() {
            return Err(Error::row_length(self.plan.width(), self.row.len()));
        }
        Ok(self.row)
    }
}

/// Encode one record into a row.
pub fn encode_row<T: Record>(record: &T, plan: &ColumnPlan) -> Result<StringRecord> {
    let mut encoder = RowEncoder::new(plan);
    record.encode(&mut encoder)?;
    encoder.finish()
}
