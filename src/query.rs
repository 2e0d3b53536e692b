//! The query layer: read a column, validate the rank, select.
//!
//! `find_nth_max` is the crate's front door. It owns the contract around
//! invalid input - a rank outside `1..=len` or an empty column never
//! reaches the selection algorithm, and a read failure is reported as a
//! read failure rather than degrading into "no data".

use crate::error::{Error, Result};
use crate::reader::ColumnReader;
use crate::select::select_nth_largest;

/// Returns the `n`-th largest integer in the first column of `source`.
///
/// # Arguments
/// * `reader` - The collaborator that extracts the integer column
/// * `source` - Handle for the data source, typically a file path
/// * `n` - The 1-based rank; `n = 1` asks for the maximum
///
/// # Errors
/// * `SourceRead` if the reader cannot access or parse the source
/// * `EmptyColumn` if the source yields no integer values
/// * `RankOutOfBounds` if `n` is zero or exceeds the column length
pub fn find_nth_max<R: ColumnReader>(reader: &R, source: &str, n: usize) -> Result<i64> {
    let mut values = reader.read_integer_column(source)?;
    if values.is_empty() {
        log::error!("query for rank {} against an empty column in {}", n, source);
        return Err(Error::EmptyColumn);
    }
    if n < 1 || n > values.len() {
        log::error!(
            "rank {} is out of bounds for the {} values in {}",
            n,
            values.len(),
            source
        );
        return Err(Error::RankOutOfBounds {
            rank: n,
            len: values.len(),
        });
    }
    Ok(select_nth_largest(&mut values, n))
}
