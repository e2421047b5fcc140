//! Batch import of candidate tracks from a TOML file.
//!
//! Every `[[track]]` table is an attempt: entries that fail validation are
//! reported and skipped, the rest land in the catalog in file order. Missing
//! fields are not parse errors; they surface as validation failures instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::library::ValidationError;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ImportFile {
    #[serde(default, rename = "track")]
    tracks: Vec<TrackEntry>,
}

/// One `[[track]]` table as written in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackEntry {
    pub title: String,
    pub artist: String,
    pub duration: i64,
    pub rating: i64,
    pub tags: Vec<String>,
}

/// An entry that did not make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based position of the entry in the file.
    pub position: usize,
    pub title: String,
    pub error: ValidationError,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub rejected: Vec<Rejected>,
}

impl ImportReport {
    pub fn attempted(&self) -> usize {
        self.imported + self.rejected.len()
    }
}

pub fn parse_entries(text: &str) -> Result<Vec<TrackEntry>, toml::de::Error> {
    let file: ImportFile = toml::from_str(text)?;
    Ok(file.tracks)
}

pub fn read_entries(path: &Path) -> Result<Vec<TrackEntry>, ImportError> {
    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_entries(&text).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn import_into(catalog: &mut Catalog, entries: &[TrackEntry]) -> ImportReport {
    let mut report = ImportReport::default();

    for (i, entry) in entries.iter().enumerate() {
        let added = catalog.add_with_tags(
            &entry.title,
            &entry.artist,
            entry.duration,
            entry.rating,
            entry.tags.iter().map(String::as_str),
        );
        match added {
            Ok(id) => {
                log::debug!("imported track #{id}: {}", entry.title.trim());
                report.imported += 1;
            }
            Err(error) => report.rejected.push(Rejected {
                position: i + 1,
                title: entry.title.trim().to_string(),
                error,
            }),
        }
    }

    report
}
