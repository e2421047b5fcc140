use std::fmt;
use std::{
    env,
    path::{Path, PathBuf},
};

use super::error::SettingsError;
use super::schema::Settings;

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// A config file was read (environment overrides may still apply).
    File(PathBuf),
    /// No config file exists; defaults plus environment overrides.
    Defaults,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl Settings {
    /// Load settings from the resolved config file (if any) and `SONGBOOK__*`
    /// environment variables.
    pub fn load() -> Result<(Self, SettingsSource), ::config::ConfigError> {
        let file = resolve_config_path().filter(|p| p.is_file());
        let settings = Self::load_from(file.as_deref())?;
        let source = match file {
            Some(path) => SettingsSource::File(path),
            None => SettingsSource::Defaults,
        };
        Ok((settings, source))
    }

    /// Layer `file` (optional, TOML) under the environment and the struct
    /// defaults.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("SONGBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject settings that would break catalog invariants.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.catalog.first_id == 0 {
            return Err(SettingsError::ZeroFirstId);
        }
        if self.log.level.trim().is_empty() {
            return Err(SettingsError::EmptyLogLevel);
        }
        Ok(())
    }
}

/// `SONGBOOK_CONFIG_PATH` if set, otherwise the XDG default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("SONGBOOK_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/songbook/config.toml`, or `~/.config/songbook/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|d| d.join("songbook").join("config.toml"))
}
