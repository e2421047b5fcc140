//! The `Track` record and its ranking order.

use std::cmp::{Ordering, Reverse};

use super::error::{ValidationError, reject};
use super::ids::{IdGenerator, TrackId};
use super::tags::TagSet;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: TrackId,
    title: String,
    artist: String,
    duration_secs: u64,
    rating: u8,
    tags: TagSet,
}

impl Track {
    /// Validate the inputs and build a track with the next id from `ids`.
    ///
    /// Checks run in order (title, artist, duration, rating) and the first
    /// failure is returned. `ids` only advances when every check passes; an
    /// exhausted generator rejects the record with `IdsExhausted`.
    pub fn create(
        ids: &IdGenerator,
        title: &str,
        artist: &str,
        duration_secs: i64,
        rating: i64,
    ) -> Result<Self, ValidationError> {
        let title = clean_title(title)?;
        let artist = clean_artist(artist)?;
        let duration_secs = check_duration(duration_secs)?;
        let rating = check_rating(rating)?;
        let id = ids.next_id()?;

        Ok(Self {
            id,
            title,
            artist,
            duration_secs,
            rating,
            tags: TagSet::new(),
        })
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = clean_title(title)?;
        Ok(())
    }

    pub fn set_artist(&mut self, artist: &str) -> Result<(), ValidationError> {
        self.artist = clean_artist(artist)?;
        Ok(())
    }

    pub fn set_duration(&mut self, secs: i64) -> Result<(), ValidationError> {
        self.duration_secs = check_duration(secs)?;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: i64) -> Result<(), ValidationError> {
        self.rating = check_rating(rating)?;
        Ok(())
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<(), ValidationError> {
        self.tags.add(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<(), ValidationError> {
        self.tags.remove(tag)
    }

    /// Case-insensitive substring search over title, artist and tags.
    ///
    /// A keyword that is empty after trimming matches nothing.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = trim_ws(keyword).to_ascii_lowercase();
        if keyword.is_empty() {
            return false;
        }

        self.title.to_ascii_lowercase().contains(&keyword)
            || self.artist.to_ascii_lowercase().contains(&keyword)
            || self
                .tags
                .iter()
                .any(|t| t.to_ascii_lowercase().contains(&keyword))
    }

    /// Sort key: rating high to low, then title, then id.
    pub fn rank_key(&self) -> (Reverse<u8>, &str, TrackId) {
        (Reverse(self.rating), self.title.as_str(), self.id)
    }

    pub fn cmp_rank(a: &Self, b: &Self) -> Ordering {
        a.rank_key().cmp(&b.rank_key())
    }
}

/// Stable in-place sort by [`Track::cmp_rank`].
pub fn sort_ranked(tracks: &mut [Track]) {
    tracks.sort_by(Track::cmp_rank);
}

/// Strip the ASCII whitespace set (space, `\t`, `\n`, `\x0b`, `\x0c`, `\r`)
/// from both ends. Other Unicode spaces are kept as content.
pub(crate) fn trim_ws(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}

fn clean_title(raw: &str) -> Result<String, ValidationError> {
    match trim_ws(raw) {
        "" => reject(ValidationError::EmptyTitle),
        t => Ok(t.to_string()),
    }
}

fn clean_artist(raw: &str) -> Result<String, ValidationError> {
    match trim_ws(raw) {
        "" => reject(ValidationError::EmptyArtist),
        a => Ok(a.to_string()),
    }
}

fn check_duration(secs: i64) -> Result<u64, ValidationError> {
    match u64::try_from(secs) {
        Ok(s) if s > 0 => Ok(s),
        _ => reject(ValidationError::NonPositiveDuration(secs)),
    }
}

fn check_rating(rating: i64) -> Result<u8, ValidationError> {
    match u8::try_from(rating) {
        Ok(r) if (MIN_RATING..=MAX_RATING).contains(&r) => Ok(r),
        _ => reject(ValidationError::RatingOutOfRange(rating)),
    }
}
