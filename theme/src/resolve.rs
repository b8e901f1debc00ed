//! Initial preference resolution.

use crate::host::{AmbientScheme, PreferenceStore};
use crate::{PersistedChoice, Theme, ThemeConfig, ThemeError};

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;

/// Read the stored choice under `config.storage_key`.
///
/// Storage failures read as [`PersistedChoice::Absent`].
pub fn read_persisted(config: &ThemeConfig, store: &impl PreferenceStore) -> PersistedChoice {
    match store.read(&config.storage_key) {
        Ok(raw) => PersistedChoice::parse(raw.as_deref()),
        Err(ThemeError::StorageUnavailable) => PersistedChoice::Absent,
        Err(e) => {
            log::debug!("theme: ignoring unreadable stored preference: {e}");
            PersistedChoice::Absent
        }
    }
}

/// Compute the initial theme.
///
/// Priority: stored choice, then the ambient signal, then
/// `config.fallback`. Called once when the shell is constructed.
pub fn resolve(config: &ThemeConfig, store: &impl PreferenceStore, ambient: &impl AmbientScheme) -> Theme {
    if let Some(theme) = read_persisted(config, store).theme() {
        log::debug!("theme: using stored preference {theme}");
        return theme;
    }

    match ambient.prefers_dark() {
        Some(is_dark) => {
            let theme = Theme::from_dark(is_dark);
            log::debug!("theme: using system preference {theme}");
            theme
        }
        None => {
            log::debug!("theme: no preference sources, defaulting to {}", config.fallback);
            config.fallback
        }
    }
}
