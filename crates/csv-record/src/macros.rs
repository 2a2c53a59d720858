/// Implement [`Record`](crate::Record) for a struct with named fields.
///
/// Fields are listed in column order. Every struct field must be listed.
/// `as "NAME"` sets the header name (default: the field name) and
/// `: "PATTERN"` attaches a timestamp format override.
///
/// ```
/// use chrono::NaiveDate;
/// use csv_record::{csv_record, field_names};
///
/// struct Holiday {
///     name: String,
///     day: NaiveDate,
/// }
///
/// csv_record!(Holiday {
///     name as "Name",
///     day as "Day": "%b %-d",
/// });
///
/// assert_eq!(field_names::<Holiday>(), ["Name", "Day"]);
/// ```
#[macro_export]
macro_rules! csv_record {
    ($record:ty { $($field:ident $(as $name:literal)? $(: $format:literal)?),* $(,)? }) => {
        impl $crate::Record for $record {
            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::FieldDescriptor::of(
                            ::std::stringify!($field),
                            |record: &Self| &record.$field,
                        )
                        $(.renamed($name))?
                        $(.with_format($format))?
                    ),*
                ]
            }

            fn decode(row: &mut $crate::RowDecoder<'_>) -> $crate::Result<Self> {
                ::std::result::Result::Ok(Self {
                    $($field: row.decode()?,)*
                })
            }

            fn encode(&self, row: &mut $crate::RowEncoder<'_>) -> $crate::Result<()> {
                $(row.encode(&self.$field)?;)*
                ::std::result::Result::Ok(())
            }
        }
    };
}
