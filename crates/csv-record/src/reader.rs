//! Typed record reader.
//!
//! Wraps a [`RowSource`] and decodes its rows into [`Record`]s.

use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;

use csv::StringRecord;

use crate::decode::decode_row;
use crate::error::{Error, Result};
use crate::layout::ColumnPlan;
use crate::options::ReaderOptions;
use crate::schema::Record;
use crate::source::RowSource;

/// Record reader.
///
/// Every call resolves the column plan of the requested record type before
/// reading. Calls on one reader must not interleave.
pub struct Reader<S> {
    source: S,
    plan: ColumnPlan,
    row: StringRecord,
}

impl<R: Read> Reader<csv::Reader<R>> {
    /// Create a reader over CSV text with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, &ReaderOptions::default())
    }

    /// Create a reader over CSV text with options.
    pub fn with_options(reader: R, options: &ReaderOptions) -> Self {
        Self::from_source(options.builder().from_reader(reader))
    }
}

impl Reader<csv::Reader<File>> {
    /// Open a CSV file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_options(path, &ReaderOptions::default())
    }

    /// Open a CSV file with options.
    pub fn open_with_options(path: &Path, options: &ReaderOptions) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Ok(Self::with_options(file, options))
    }
}

impl<S: RowSource> Reader<S> {
    /// Create a reader over any row source.
    pub fn from_source(source: S) -> Self {
        Self {
            source,
            plan: ColumnPlan::default(),
            row: StringRecord::new(),
        }
    }

    /// Read every remaining row into `dest`, appending in input order.
    ///
    /// Stops at the first error. Records appended before the failing row
    /// stay in `dest`.
    pub fn unmarshal<T: Record>(&mut self, dest: &mut Vec<T>) -> Result<()> {
        self.plan = ColumnPlan::resolve::<T>();

        let mut count = 0usize;
        while self.source.read_row(&mut self.row)? {
            let record = decode_row::<T>(&self.row, &self.plan)?;
            dest.push(record);
            count += 1;
            tracing::trace!(row = count, "decoded row");
        }

        tracing::debug!(
            record = std::any::type_name::<T>(),
            rows = count,
            "unmarshal complete"
        );
        Ok(())
    }

    /// Read exactly one row into `dest`.
    ///
    /// End of input is reported as [`Error::EndOfInput`]. On error `dest`
    /// is left untouched.
    pub fn unmarshal_one<T: Record>(&mut self, dest: &mut T) -> Result<()> {
        if !self.source.read_row(&mut self.row)? {
            return Err(Error::EndOfInput);
        }
        self.plan = ColumnPlan::resolve::<T>();
        *dest = decode_row(&self.row, &self.plan)?;
        Ok(())
    }

    /// Iterate over the remaining rows as records of type `T`.
    pub fn records<T: Record>(&mut self) -> Records<'_, S, T> {
        self.plan = ColumnPlan::resolve::<T>();
        Records {
            reader: self,
            done: false,
            _record: PhantomData,
        }
    }

    /// Read the next raw row, e.g. to skip a header line.
    pub fn read_row(&mut self) -> Result<Option<StringRecord>> {
        let mut row = StringRecord::new();
        Ok(self.source.read_row(&mut row)?.then_some(row))
    }

    /// Column plan used by the latest call.
    pub fn plan(&self) -> &ColumnPlan {
        &self.plan
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

/// Streaming record iterator returned by [`Reader::records`].
///
/// Ends after the first error.
pub struct Records<'r, S, T> {
    reader: &'r mut Reader<S>,
    done: bool,
    _record: PhantomData<fn() -> T>,
}

impl<S: RowSource, T: Record> Iterator for Records<'_, S, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let reader = &mut *self.reader;
        let result = match reader.source.read_row(&mut reader.row) {
            Ok(true) => decode_row(&reader.row, &reader.plan),
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(err) => Err(err),
        };
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

/// Read a CSV file into a vector of records.
///
/// This is a convenience function that opens the file and unmarshals every row.
pub fn read_csv<T: Record>(path: &Path, options: &ReaderOptions) -> Result<Vec<T>> {
    let mut records = Vec::new();
    Reader::open_with_options(path, options)?.unmarshal(&mut records)?;
    Ok(records)
}
