use crate::config::{Settings, SettingsError, SettingsSource};

/// Effective settings plus how they were obtained.
///
/// Loading happens before the logger exists, so problems are kept here and
/// reported by [`LoadedSettings::report`] once logging is up.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: SettingsSource,
    pub fallback: Option<Fallback>,
}

/// Why the loaded configuration was replaced by defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    Unreadable(String),
    Invalid(SettingsError),
}

pub fn load_settings() -> LoadedSettings {
    match Settings::load() {
        Ok((settings, source)) => match settings.validate() {
            Ok(()) => LoadedSettings {
                settings,
                source,
                fallback: None,
            },
            Err(e) => LoadedSettings {
                settings: Settings::default(),
                source,
                fallback: Some(Fallback::Invalid(e)),
            },
        },
        // Config is optional; failures should not prevent a listing.
        Err(e) => LoadedSettings {
            settings: Settings::default(),
            source: SettingsSource::Defaults,
            fallback: Some(Fallback::Unreadable(e.to_string())),
        },
    }
}

impl LoadedSettings {
    pub fn report(&self) {
        match &self.fallback {
            None => log::info!("settings loaded from {}", self.source),
            Some(Fallback::Invalid(e)) => log::warn!(
                "invalid setting {} in {}, using defaults: {e}",
                e.field(),
                self.source
            ),
            Some(Fallback::Unreadable(msg)) => {
                log::warn!("failed to load config, using defaults: {msg}")
            }
        }
    }
}
