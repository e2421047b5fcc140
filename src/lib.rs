//! songbook: a small song catalog.
//!
//! The core is [`library::Track`], a validated record with a case-insensitive
//! tag set, keyword matching, a ranking order and a fixed one-line rendering.
//! [`catalog::Catalog`] owns the id counter and a list of tracks;
//! [`runtime`] wires configuration, logging and batch import into the
//! `songbook` binary.

pub mod catalog;
pub mod config;
pub mod library;
pub mod runtime;

#[cfg(test)]
mod test_support;

pub use catalog::Catalog;
pub use library::{IdGenerator, TagSet, Track, TrackId, ValidationError};
