//! Catalog module: the collection that owns track ids and records.
//!
//! `Catalog` lives in `catalog::model`; it creates tracks through its own
//! `IdGenerator` and offers search and ranked listings over them.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
