//! # Bikeshare Common
//!
//! Shared types, errors, and logging setup for the bike rental dashboard.
//!
//! This crate provides the rental record model and the categorical
//! dimensions it is grouped by, used across every other crate in the
//! workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{DashboardError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
