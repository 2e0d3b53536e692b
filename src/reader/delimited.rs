use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{Error, Result};
use crate::reader::ColumnReader;

/// Reads the first column of a delimited text file as integers.
///
/// Each line is split on the configured delimiter and only the first
/// field is inspected. Fields that do not parse as `i64` (headers, blank
/// cells, text) are skipped; rows beyond the first field are ignored
/// entirely.
#[derive(Debug, Clone)]
pub struct DelimitedColumnReader {
    delimiter: char,
}

impl DelimitedColumnReader {
    /// Creates a reader splitting rows on `delimiter`.
    pub fn new(delimiter: char) -> Self {
        DelimitedColumnReader { delimiter }
    }
}

impl Default for DelimitedColumnReader {
    /// Comma-delimited, the common case for exported spreadsheets.
    fn default() -> Self {
        DelimitedColumnReader::new(',')
    }
}

impl ColumnReader for DelimitedColumnReader {
    fn read_integer_column(&self, source: &str) -> Result<Vec<i64>> {
        let file = File::open(source)
            .map_err(|e| Error::source_read(format!("{source}: {e}")))?;
        let mut numbers = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| Error::source_read(format!("{source}: {e}")))?;
            let cell = match line.split(self.delimiter).next() {
                Some(cell) => cell.trim(),
                None => continue,
            };
            match cell.parse::<i64>() {
                Ok(value) => numbers.push(value),
                Err(_) => {
                    log::debug!("skipping non-numeric cell {:?} at row {}", cell, line_no + 1);
                }
            }
        }
        log::debug!("read {} integers from {}", numbers.len(), source);
        Ok(numbers)
    }
}
