//! Tokenizer seams.
//!
//! The mapping engine only pulls and pushes whole rows; quoting, escaping
//! and line framing belong to the tokenizer behind these traits.

use std::io::{Read, Write};

use csv::StringRecord;

use crate::error::Result;

/// Pull side of a tokenizer.
pub trait RowSource {
    /// Read the next row into `row`. Returns `false` at end of input.
    fn read_row(&mut self, row: &mut StringRecord) -> Result<bool>;
}

/// Push side of a tokenizer.
pub trait RowSink {
    fn write_row(&mut self, row: &StringRecord) -> Result<()>;

    /// Emit anything buffered by earlier writes.
    fn flush(&mut self) -> Result<()>;
}

impl<R: Read> RowSource for csv::Reader<R> {
    fn read_row(&mut self, row: &mut StringRecord) -> Result<bool> {
        Ok(self.read_record(row)?)
    }
}

impl<W: Write> RowSink for csv::Writer<W> {
    fn write_row(&mut self, row: &StringRecord) -> Result<()> {
        self.write_record(row)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        csv::Writer::flush(self)?;
        Ok(())
    }
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn read_row(&mut self, row: &mut StringRecord) -> Result<bool> {
        (**self).read_row(row)
    }
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    fn write_row(&mut self, row: &StringRecord) -> Result<()> {
        (**self).write_row(row)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_reader_source() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,\"b,c\"\n1,2\n".as_bytes());
        let mut row = StringRecord::new();
        assert!(reader.read_row(&mut row).unwrap());
        assert_eq!(row.iter().collect::<Vec<_>>(), ["a", "b,c"]);
        assert!(reader.read_row(&mut row).unwrap());
        assert!(!reader.read_row(&mut row).unwrap());
    }

    #[test]
    fn test_csv_writer_sink() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        RowSink::write_row(&mut writer, &StringRecord::from(vec!["x", "y,z"])).unwrap();
        RowSink::flush(&mut writer).unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"x,\"y,z\"\n");
    }
}
