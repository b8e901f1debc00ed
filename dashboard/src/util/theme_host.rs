//! Browser implementations of the theme host capabilities.
//!
//! `BrowserStorage` reads and writes `localStorage`, `SystemScheme` queries
//! `(prefers-color-scheme: dark)`, and `DocumentRoot` toggles a class on the
//! `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Outside a browser (SSR, native tests) every capability reports itself as
//! unavailable, so server rendering falls through to the configured default
//! and stays deterministic.

use theme::{AmbientScheme, PreferenceStore, ThemeError, ThemeMarker};

#[cfg(test)]
#[path = "theme_host_test.rs"]
mod theme_host_test;

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemScheme;

/// `document.documentElement.classList`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ThemeError::StorageUnavailable)
}

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| ThemeError::StorageRead(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(ThemeError::StorageUnavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| ThemeError::StorageWrite(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(ThemeError::StorageUnavailable)
        }
    }
}

impl AmbientScheme for SystemScheme {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

impl ThemeMarker for DocumentRoot {
    fn set_marker(&self, class: &str, present: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            else {
                return;
            };
            // `DOMTokenList` ignores duplicate adds and missing removes.
            let class_list = el.class_list();
            let result = if present {
                class_list.add_1(class)
            } else {
                class_list.remove_1(class)
            };
            if let Err(e) = result {
                log::warn!("theme: failed to update root class {class:?}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, present);
        }
    }
}
