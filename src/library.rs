//! Track records: validated construction, tag handling, keyword matching,
//! ranking and rendering.
//!
//! A `Track` can only be obtained through [`Track::create`], so every value in
//! circulation satisfies the record invariants. Ids come from an explicitly
//! owned [`IdGenerator`].

mod display;
mod error;
mod ids;
mod model;
mod tags;

pub use error::ValidationError;
pub use ids::{IdGenerator, TrackId};
pub use model::{Track, sort_ranked};
pub use tags::TagSet;
