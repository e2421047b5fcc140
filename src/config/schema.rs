use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/songbook/config.toml` or `~/.config/songbook/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SONGBOOK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub catalog: CatalogSettings,
    pub listing: ListingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `env_logger` filter, e.g. "warn" or "songbook=debug".
    /// `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Id given to the first imported track.
    pub first_id: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { first_id: 1 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    pub order: ListingOrder,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingOrder {
    /// Rating high to low, then title, then id.
    #[default]
    #[serde(alias = "rank", alias = "rating")]
    Ranked,
    /// The order tracks were added in.
    #[serde(alias = "added", alias = "as-added", alias = "as_added")]
    Insertion,
}
