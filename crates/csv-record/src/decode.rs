//! Row decoding.

use csv::StringRecord;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::layout::ColumnPlan;
use crate::schema::Record;

/// Cursor over the tokens of one row.
///
/// Each [`decode`](RowDecoder::decode) call converts the next token,
/// following column order.
pub struct RowDecoder<'r> {
    row: &'r StringRecord,
    plan: &'r ColumnPlan,
    position: usize,
}

impl<'r> RowDecoder<'r> {
    /// Create a decoder after checking the row width against the plan.
    pub fn new(row: &'r StringRecord, plan: &'r ColumnPlan) -> Result<Self> {
        if row.len() != plan.width() {
            return Err(Error::row_length(plan.width(), row.len()));
        }
        Ok(Self {
            row,
            plan,
            position: 0,
        })
    }

    /// Convert the next token into a field value.
    pub fn decode<C: Cell>(&mut self) -> Result<C> {
        let index = self.position;
        let token = self
            .row
            .get(index)
            .ok_or_else(|| Error::row_length(index + 1, self.row.len()))?;
        self.position += 1;
        C::parse_cell(token, self.plan.format(index)).map_err(|source| Error::Field {
            index,
            name: self.plan.name(index),
            source,
        })
    }

    /// Column position of the next token.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Decode one row into a fresh `T`.
///
/// Nothing is returned unless every field converted.
pub fn decode_row<T: Record>(row: &StringRecord, plan: &ColumnPlan) -> Result<T> {
    let mut decoder = RowDecoder::new(row, plan)?;
    T::decode(&mut decoder)
}
