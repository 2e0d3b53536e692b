//! Order-statistic selection algorithms.
//!
//! This module provides in-place selection of the N-th largest element of
//! a slice without fully sorting it:
//! - Randomized quickselect (expected linear time)
//!
//! # Examples
//!
//! ```rust
//! use nmax::select::select_nth_largest;
//!
//! let mut values = [9, 1, 7, 3, 5];
//! assert_eq!(select_nth_largest(&mut values, 2), 7);
//! ```

pub mod quickselect;

pub use quickselect::select_nth_largest;
