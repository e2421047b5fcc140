//! Configuration loader and schema types.
//!
//! This module exposes the settings schema used by the command-line runtime
//! and helpers to load it from disk and the environment.

mod error;
mod load;
mod schema;

pub use error::SettingsError;
pub use load::SettingsSource;
pub use schema::*;
