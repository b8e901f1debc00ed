//! Applies a theme to the document and persists it.

use crate::host::{PreferenceStore, ThemeMarker};
use crate::{Theme, ThemeConfig, ThemeError};

#[cfg(test)]
#[path = "effector_test.rs"]
mod tests;

/// Side effects run for every value the preference takes.
#[derive(Clone, Debug)]
pub struct Effector<M, S> {
    config: ThemeConfig,
    marker: M,
    store: S,
}

impl<M: ThemeMarker, S: PreferenceStore> Effector<M, S> {
    pub fn new(config: ThemeConfig, marker: M, store: S) -> Self {
        Self { config, marker, store }
    }

    /// Set the marker, then write the choice under the resolver's key.
    ///
    /// The marker is updated even when the write fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the choice could not be persisted.
    pub fn apply(&self, theme: Theme) -> Result<(), ThemeError> {
        self.marker.set_marker(&self.config.marker_class, theme.is_dark());
        self.store.write(&self.config.storage_key, theme.as_str())
    }

    /// [`Effector::apply`] for use as a [`crate::ThemeCell`] observer. Write
    /// failures are logged and not retried.
    pub fn observe(&self, theme: Theme) {
        match self.apply(theme) {
            Ok(()) => {}
            Err(ThemeError::StorageUnavailable) => {
                log::debug!("theme: applied {theme} without storage");
            }
            Err(e) => log::warn!("theme: applied {theme} but {e}"),
        }
    }
}
