//! Catalog model: an insertion-ordered collection of tracks plus the id
//! generator that numbers them.

use crate::config::ListingOrder;
use crate::library::{IdGenerator, Track, TrackId, ValidationError};

/// Owns every track created through it and the counter that numbers them.
#[derive(Debug, Default)]
pub struct Catalog {
    ids: IdGenerator,
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog whose first track will get id `first`.
    pub fn with_first_id(first: u64) -> Self {
        Self {
            ids: IdGenerator::starting_at(first),
            tracks: Vec::new(),
        }
    }

    /// Validate and append a new track, returning its id.
    pub fn add(
        &mut self,
        title: &str,
        artist: &str,
        duration_secs: i64,
        rating: i64,
    ) -> Result<TrackId, ValidationError> {
        let track = Track::create(&self.ids, title, artist, duration_secs, rating)?;
        let id = track.id();
        self.tracks.push(track);
        Ok(id)
    }

    /// Like [`Catalog::add`], then attach `tags`.
    ///
    /// Rejected tags (empty or duplicates) are logged and skipped; the track
    /// is kept either way.
    pub fn add_with_tags<'a, I>(
        &mut self,
        title: &str,
        artist: &str,
        duration_secs: i64,
        rating: i64,
        tags: I,
    ) -> Result<TrackId, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut track = Track::create(&self.ids, title, artist, duration_secs, rating)?;
        for tag in tags {
            // Already logged by the tag set.
            let _ = track.add_tag(tag);
        }
        let id = track.id();
        self.tracks.push(track);
        Ok(id)
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    pub fn get_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id() == id)
    }

    /// Remove a track. Its id is not handed out again.
    pub fn remove(&mut self, id: TrackId) -> Option<Track> {
        let pos = self.tracks.iter().position(|t| t.id() == id)?;
        Some(self.tracks.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Tracks matching `keyword`, in insertion order.
    pub fn search(&self, keyword: &str) -> Vec<&Track> {
        self.tracks.iter().filter(|t| t.matches(keyword)).collect()
    }

    /// All tracks, best first.
    pub fn ranked(&self) -> Vec<&Track> {
        let mut out: Vec<&Track> = self.tracks.iter().collect();
        out.sort_by(|a, b| Track::cmp_rank(a, b));
        out
    }

    /// The tracks to show for a listing: filtered by `keyword` when one is
    /// given (blank keywords count as no filter), then ordered by `order`.
    pub fn listing(&self, order: ListingOrder, keyword: Option<&str>) -> Vec<&Track> {
        let mut out: Vec<&Track> = match keyword.map(str::trim).filter(|k| !k.is_empty()) {
            Some(k) => self.search(k),
            None => self.tracks.iter().collect(),
        };

        if let ListingOrder::Ranked = order {
            out.sort_by(|a, b| Track::cmp_rank(a, b));
        }
        out
    }
}
