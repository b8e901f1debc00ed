//! Light/dark display preference for the trading desk shell.
//!
//! This crate is UI-framework agnostic. It owns the preference state machine
//! and talks to the host only through the traits in [`host`], so the same
//! logic runs in the browser, during server rendering, and under test.
//!
//! DESIGN
//! ======
//! - [`resolve`] derives the initial [`Theme`] once: persisted choice first,
//!   then the ambient colour-scheme signal, then [`ThemeConfig::fallback`].
//! - [`Effector`] applies the document marker and then writes the choice back
//!   to storage, for every value the preference takes.
//! - [`ThemeCell`] is the single owned state cell. Its toggle is the only
//!   mutator and it notifies subscribers synchronously on every transition.

pub mod cell;
pub mod effector;
pub mod host;
pub mod resolve;

use std::fmt;

pub use cell::ThemeCell;
pub use effector::Effector;
pub use host::{AmbientScheme, Headless, PreferenceStore, ThemeMarker};
pub use resolve::{read_persisted, resolve};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

#[cfg(test)]
pub(crate) mod test_support;

/// Storage key shared by the resolver and the effector.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Class placed on the document root while the dark theme is active.
pub const DEFAULT_MARKER_CLASS: &str = "dark";

/// Failures reported by a preference host.
///
/// None of these are fatal. A failed read is treated as "no stored choice" and
/// a failed write leaves the rendered marker in place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The host has no persistent storage (server render, privacy mode).
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// Storage exists but reading the key failed.
    #[error("failed to read stored preference: {0}")]
    StorageRead(String),
    /// Storage exists but writing the key failed (quota, permissions).
    #[error("failed to persist preference: {0}")]
    StorageWrite(String),
}

/// The display preference. `Dark` is the `isDark == true` reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The literal written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon for the toggle control. It names the action, not the state:
    /// a sun while dark (switch to light), a moon while light.
    #[must_use]
    pub const fn toggle_icon(self) -> ToggleIcon {
        match self {
            Self::Dark => ToggleIcon::Sun,
            Self::Light => ToggleIcon::Moon,
        }
    }

    /// Accessible label for the toggle control.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown on the theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

/// Reading of the stored preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersistedChoice {
    Dark,
    Light,
    #[default]
    Absent,
}

impl PersistedChoice {
    /// Normalize a raw stored value. Anything other than the two literals the
    /// effector writes reads as [`PersistedChoice::Absent`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Absent,
        }
    }

    #[must_use]
    pub const fn theme(self) -> Option<Theme> {
        match self {
            Self::Dark => Some(Theme::Dark),
            Self::Light => Some(Theme::Light),
            Self::Absent => None,
        }
    }
}

/// Keys and defaults shared by the resolver and the effector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub marker_class: String,
    /// Used when neither a stored choice nor the ambient signal is available.
    pub fallback: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            fallback: Theme::Dark,
        }
    }
}
