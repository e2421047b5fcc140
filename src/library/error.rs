use thiserror::Error;

/// Why a record operation was rejected.
///
/// The `Display` text is the diagnostic line logged when the rejection happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("artist must not be empty")]
    EmptyArtist,

    #[error("duration must be a positive integer (seconds)")]
    NonPositiveDuration(i64),

    #[error("rating must be between 1 and 5")]
    RatingOutOfRange(i64),

    #[error("tag must not be empty")]
    EmptyTag,

    #[error("tag already exists (case-insensitive): {0}")]
    DuplicateTag(String),

    #[error("tag not found: {0}")]
    TagNotFound(String),

    #[error("no track ids left to assign")]
    IdsExhausted,
}

impl ValidationError {
    /// Name of the record field the rejection concerns.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyArtist => "artist",
            Self::NonPositiveDuration(_) => "duration",
            Self::RatingOutOfRange(_) => "rating",
            Self::EmptyTag | Self::DuplicateTag(_) | Self::TagNotFound(_) => "tags",
            Self::IdsExhausted => "id",
        }
    }
}

/// Log `err` on the diagnostic channel and hand it back as a failure.
pub(crate) fn reject<T>(err: ValidationError) -> Result<T, ValidationError> {
    log::warn!("{err}");
    Err(err)
}
