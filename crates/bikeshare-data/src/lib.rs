//! # Bikeshare Data
//!
//! Loads the rental table once, validates it against the expected column
//! contract, and selects records by inclusive date range.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod filter;
pub mod schema;

pub use dataset::Dataset;
pub use filter::filter_by_date;
pub use schema::{Column, ColumnIndex, REQUIRED_COLUMNS};
