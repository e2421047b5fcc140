use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::error::{ValidationError, reject};

/// Identity of a track. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(u64);

impl TrackId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out track ids: starts at `first`, increments by one per id issued,
/// never reissues a value.
///
/// Callers take an id only after a record has passed validation, so failed
/// constructions leave no gaps. Once `u64::MAX` has been issued the generator
/// is exhausted and every further request fails.
#[derive(Debug)]
pub struct IdGenerator {
    // 0 is never a valid id, so it marks exhaustion.
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start numbering at `first` (clamped to 1, ids are positive).
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// The id the next successful creation will receive, `None` once exhausted.
    pub fn peek(&self) -> Option<TrackId> {
        match self.next.load(Ordering::SeqCst) {
            0 => None,
            n => Some(TrackId(n)),
        }
    }

    pub(crate) fn next_id(&self) -> Result<TrackId, ValidationError> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| match n {
                0 => None,
                n => Some(n.checked_add(1).unwrap_or(0)),
            })
            .map(TrackId)
            .or_else(|_| reject(ValidationError::IdsExhausted))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
