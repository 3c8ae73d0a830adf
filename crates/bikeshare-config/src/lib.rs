//! # Bikeshare Config
//!
//! Type-safe configuration management for the bike rental dashboard.
//!
//! Configuration is read once at startup from YAML or TOML, layered with
//! environment overrides, and validated before anything else runs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::*;
