use thiserror::Error;

/// A loaded setting that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("catalog.first_id must be >= 1")]
    ZeroFirstId,

    #[error("log.level must not be empty")]
    EmptyLogLevel,
}

impl SettingsError {
    /// Dotted key of the offending setting.
    pub fn field(&self) -> &'static str {
        match self {
            Self::ZeroFirstId => "catalog.first_id",
            Self::EmptyLogLevel => "log.level",
        }
    }
}
