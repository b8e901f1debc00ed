//! Host capabilities the preference state machine depends on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser provides all three (localStorage, `prefers-color-scheme`, the
//! `<html>` class list). A server render provides none of them, which is what
//! [`Headless`] models.

use crate::ThemeError;

/// Key/value storage that survives reloads.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StorageUnavailable`] when the host has no
    /// storage, or [`ThemeError::StorageRead`] when the read itself failed.
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StorageUnavailable`] or
    /// [`ThemeError::StorageWrite`].
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The environment's colour-scheme preference.
pub trait AmbientScheme {
    /// `Some(true)` when the system prefers dark, `None` when the host cannot
    /// tell.
    fn prefers_dark(&self) -> Option<bool>;
}

/// The document's visual root.
pub trait ThemeMarker {
    /// Add (`present == true`) or remove `class` on the root. Must be
    /// idempotent.
    fn set_marker(&self, class: &str, present: bool);
}

/// A host with no storage, no ambient signal and no document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Headless;

impl PreferenceStore for Headless {
    fn read(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageUnavailable)
    }
}

impl AmbientScheme for Headless {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

impl ThemeMarker for Headless {
    fn set_marker(&self, _class: &str, _present: bool) {}
}
