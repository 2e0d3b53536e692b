pub mod error;
pub mod query;
pub mod reader;
pub mod select;

pub use error::{Error, Result};
pub use query::find_nth_max;
pub use reader::{ColumnReader, DelimitedColumnReader};
pub use select::select_nth_largest;
