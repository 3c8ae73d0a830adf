//! # Bikeshare Dashboard
//!
//! Presentation layer of the bike rental dashboard: turns a date-range
//! selection into summary metrics and charts, and serves them over HTTP.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod page;
pub mod server;
pub mod view;

pub use error::AppError;
pub use server::{router, run_server, AppState, RangeQuery};
pub use view::{ChartKind, DashboardView};
