//! Data-source readers that produce the integer column a query selects from.
//!
//! The query layer only ever sees a `Vec<i64>`; where it came from is the
//! reader's business. Readers own all access and parse failures and report
//! them as [`Error::SourceRead`](crate::error::Error::SourceRead) so they
//! stay distinguishable from validation failures downstream.

use crate::error::Result;

/// Trait for readers that extract a flat integer sequence from a
/// tabular data source.
pub trait ColumnReader {
    /// Reads the first column of `source` as integers.
    ///
    /// Only column 0 of each row is considered; cells in that column that
    /// are not integers are skipped silently. A missing, unreadable, or
    /// malformed source is an error - an empty result means the source
    /// really held no integer values.
    fn read_integer_column(&self, source: &str) -> Result<Vec<i64>>;
}

pub mod delimited;

pub use delimited::DelimitedColumnReader;
