use std::env;
use std::io::{self, Write};
use std::path::Path;

use crate::catalog::Catalog;

mod import;
mod logging;
mod settings;

pub use import::{
    ImportError, ImportReport, Rejected, TrackEntry, import_into, parse_entries, read_entries,
};
pub use logging::init_logging;
pub use settings::{Fallback, LoadedSettings, load_settings};


const USAGE: &str = "usage: songbook <tracks.toml> [keyword]";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_settings();
    init_logging(&loaded.settings.log);
    loaded.report();
    let settings = loaded.settings;

    let mut args = env::args().skip(1);
    let path = args.next().ok_or(USAGE)?;
    let keyword = args.next();

    let entries = read_entries(Path::new(&path))?;
    let mut catalog = Catalog::with_first_id(settings.catalog.first_id);
    let report = import_into(&mut catalog, &entries);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for track in catalog.listing(settings.listing.order, keyword.as_deref()) {
        writeln!(out, "{track}")?;
    }

    if !report.rejected.is_empty() {
        eprintln!(
            "songbook: skipped {} of {} entries",
            report.rejected.len(),
            report.attempted()
        );
        for r in &report.rejected {
            eprintln!("  entry {} ({:?}): {}", r.position, r.title, r.error);
        }
    }

    Ok(())
}
