//! Typed record writer.
//!
//! Encodes [`Record`]s and pushes them to a [`RowSink`].

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::StringRecord;

use crate::encode::encode_row;
use crate::error::Result;
use crate::layout::ColumnPlan;
use crate::options::WriterOptions;
use crate::schema::{Record, field_names};
use crate::source::RowSink;

/// Record writer.
pub struct Writer<K> {
    sink: K,
    plan: ColumnPlan,
}

impl<W: Write> Writer<csv::Writer<W>> {
    /// Create a writer producing CSV text with default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, &WriterOptions::default())
    }

    /// Create a writer producing CSV text with options.
    pub fn with_options(writer: W, options: &WriterOptions) -> Self {
        Self::from_sink(options.builder().from_writer(writer))
    }
}

impl Writer<csv::Writer<File>> {
    /// Create a CSV file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        Self::create_with_options(path, &WriterOptions::default())
    }

    /// Create a CSV file with options.
    pub fn create_with_options(path: &Path, options: &WriterOptions) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_options(file, options))
    }
}

impl<K: RowSink> Writer<K> {
    /// Create a writer over any row sink.
    pub fn from_sink(sink: K) -> Self {
        Self {
            sink,
            plan: ColumnPlan::default(),
        }
    }

    /// Encode and write every record in order, then flush.
    ///
    /// A record that fails to encode is not written; rows written before it
    /// stay written.
    pub fn marshal<'a, T, I>(&mut self, records: I) -> Result<()>
    where
        T: Record + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.plan = ColumnPlan::resolve::<T>();

        let mut count = 0usize;
        for record in records {
            let row = encode_row(record, &self.plan)?;
            self.sink.write_row(&row)?;
            count += 1;
            tracing::trace!(row = count, "encoded row");
        }
        self.sink.flush()?;

        tracing::debug!(
            record = std::any::type_name::<T>(),
            rows = count,
            "marshal complete"
        );
        Ok(())
    }

    /// Write the column names of `T` as one row.
    pub fn write_header<T: Record>(&mut self) -> Result<()> {
        let header: StringRecord = field_names::<T>().into_iter().collect();
        self.sink.write_row(&header)
    }

    /// Write one raw row.
    pub fn write_row(&mut self, row: &StringRecord) -> Result<()> {
        self.sink.write_row(row)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Column plan used by the latest [`marshal`](Self::marshal).
    pub fn plan(&self) -> &ColumnPlan {
        &self.plan
    }

    pub fn get_ref(&self) -> &K {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_inner(self) -> K {
        self.sink
    }
}

/// Write records to a CSV file.
///
/// This is a convenience function that creates the file, writes the header
/// row when `options.header` is set, and marshals every record.
pub fn write_csv<T: Record>(
    path: &Path,
    records: &[T],
    options: &WriterOptions,
) -> Result<()> {
    let mut writer = Writer::create_with_options(path, options)?;
    if options.header {
        writer.write_header::<T>()?;
    }
    writer.marshal(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_record;
    use crate::error::Error;

    #[derive(Debug, PartialEq)]
    struct Pair {
        key: String,
        value: Option<f64>,
    }

    csv_record!(Pair {
        key as "KEY",
        value as "VALUE",
    });

    #[derive(Default)]
    struct Recorded {
        rows: Vec<Vec<String>>,
        flushes: usize,
        events: Vec<&'static str>,
    }

    impl RowSink for Recorded {
        fn write_row(&mut self, row: &StringRecord) -> Result<()> {
            self.rows.push(row.iter().map(str::to_string).collect());
            self.events.push("row");
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            self.flushes += 1;
            self.events.push("flush");
            Ok(())
        }
    }

    fn pairs() -> Vec<Pair> {
        vec![
            Pair {
                key: "a".to_string(),
                value: Some(0.5),
            },
            Pair {
                key: "b".to_string(),
                value: None,
            },
        ]
    }

    #[test]
    fn test_marshal_pushes_rows_then_one_flush() {
        let mut writer = Writer::from_sink(Recorded::default());
        writer.marshal(&pairs()).unwrap();
        let sink = writer.into_inner();
        assert_eq!(sink.rows, [vec!["a", "0.5"], vec!["b", ""]]);
        assert_eq!(sink.flushes, 1);
        assert_eq!(sink.events, ["row", "row", "flush"]);
    }

    #[test]
    fn test_header_uses_column_names() {
        let mut writer = Writer::from_sink(Recorded::default());
        writer.write_header::<Pair>().unwrap();
        assert_eq!(writer.get_ref().rows, [vec!["KEY", "VALUE"]]);
        assert_eq!(writer.get_ref().flushes, 0);
    }

    #[test]
    fn test_marshal_empty_still_flushes() {
        let mut writer = Writer::from_sink(Recorded::default());
        writer.marshal(&Vec::<Pair>::new()).unwrap();
        assert!(writer.get_ref().rows.is_empty());
        assert_eq!(writer.get_ref().flushes, 1);
    }

    #[test]
    fn test_sink_error_stops_marshal() {
        struct Failing;

        impl RowSink for Failing {
            fn write_row(&mut self, _row: &StringRecord) -> Result<()> {
                Err(Error::Io(std::io::Error::other("disk full")))
            }

            fn flush(&mut self) -> Result<()> {
                panic!("flush after failed write");
            }
        }

        let mut writer = Writer::from_sink(Failing);
        assert!(matches!(writer.marshal(&pairs()), Err(Error::Io(_))));
    }

    #[test]
    fn test_csv_output() {
        let mut writer = Writer::new(Vec::new());
        writer.write_header::<Pair>().unwrap();
        writer.marshal(&pairs()).unwrap();
        let bytes = writer.into_inner().into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "KEY,VALUE\na,0.5\nb,\n");
    }
}
