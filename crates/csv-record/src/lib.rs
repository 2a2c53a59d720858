//! Typed record mapping for delimited text.
//!
//! This crate reads CSV rows directly into structs and writes structs back
//! out as CSV rows, without per-field parsing code. A record type declares
//! its columns once with [`csv_record!`]; the crate derives a column plan
//! from that declaration and converts every row field by field.
//!
//! # Features
//!
//! - Positional mapping: column `i` is the `i`-th declared field
//! - Text, integer, real, boolean and timestamp fields
//! - `Option<T>` fields: an empty token is `None`
//! - Per-field timestamp format overrides (RFC 3339 by default)
//! - Bulk ([`Reader::unmarshal`]), single-row ([`Reader::unmarshal_one`])
//!   and streaming ([`Reader::records`]) reads
//!
//! # Example
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use csv_record::{Reader, Writer, csv_record};
//!
//! #[derive(Debug, Default)]
//! struct Country {
//!     id: i64,
//!     name: String,
//!     founded: DateTime<Utc>,
//!     freedom: Option<bool>,
//! }
//!
//! csv_record!(Country {
//!     id as "ID",
//!     name as "Name",
//!     founded as "Founded",
//!     freedom as "Freedom",
//! });
//!
//! let input = "2,United States,1776-07-04T00:00:00Z,true\n3,Canada,1867-07-01T00:00:00Z,\n";
//! let mut countries: Vec<Country> = Vec::new();
//! Reader::new(input.as_bytes()).unmarshal(&mut countries)?;
//! assert_eq!(countries.len(), 2);
//! assert_eq!(countries[1].freedom, None);
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_header::<Country>()?;
//! writer.marshal(&countries)?;
//! let output = String::from_utf8(writer.into_inner().into_inner().unwrap()).unwrap();
//! assert!(output.starts_with("ID,Name,Founded,Freedom\n2,United States,"));
//! # Ok::<(), csv_record::Error>(())
//! ```
//!
//! # Destination shapes
//!
//! Destinations are checked by the compiler rather than at run time.
//! Reading many rows needs a `&mut Vec` of records:
//!
//! ```compile_fail
//! # use csv_record::{Reader, csv_record};
//! # #[derive(Default)]
//! # struct Pair { key: String }
//! # csv_record!(Pair { key });
//! let mut pair = Pair::default();
//! Reader::new("a\n".as_bytes()).unmarshal(&mut pair)?;
//! # Ok::<(), csv_record::Error>(())
//! ```
//!
//! ```compile_fail
//! # use csv_record::{Reader, csv_record};
//! # struct Pair { key: String }
//! # csv_record!(Pair { key });
//! let pairs: Vec<Pair> = Vec::new();
//! Reader::new("a\n".as_bytes()).unmarshal(pairs)?;
//! # Ok::<(), csv_record::Error>(())
//! ```
//!
//! Elements must be records:
//!
//! ```compile_fail
//! # use csv_record::Reader;
//! let mut numbers: Vec<i64> = Vec::new();
//! Reader::new("1\n".as_bytes()).unmarshal(&mut numbers)?;
//! # Ok::<(), csv_record::Error>(())
//! ```
//!
//! Reading one row needs a `&mut` record:
//!
//! ```compile_fail
//! # use csv_record::Reader;
//! let mut number = 0i64;
//! Reader::new("1\n".as_bytes()).unmarshal_one(&mut number)?;
//! # Ok::<(), csv_record::Error>(())
//! ```
//!
//! And every field type must have a conversion rule:
//!
//! ```compile_fail
//! # use csv_record::csv_record;
//! struct Blob { bytes: Vec<u8> }
//! csv_record!(Blob { bytes });
//! ```

mod cell;
mod decode;
mod encode;
mod error;
mod layout;
mod macros;
mod options;
mod reader;
mod schema;
mod source;
pub mod timestamp;
mod writer;

// Re-export error types
pub use error::{CellError, Error, Result};

// Re-export record description
pub use cell::Cell;
pub use layout::ColumnPlan;
pub use schema::{FieldDescriptor, FieldKind, Record, ScalarKind, field_names};

// Re-export row codecs
pub use decode::{RowDecoder, decode_row};
pub use encode::{RowEncoder, encode_row};

// Re-export tokenizer seams
pub use source::{RowSink, RowSource};
pub use timestamp::TimeFormat;

// Re-export reader/writer functionality
pub use options::{ReaderOptions, WriterOptions};
pub use reader::{Reader, Records, read_csv};
pub use writer::{Writer, write_csv};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
