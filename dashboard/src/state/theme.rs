//! Leptos wiring for the display preference.
//!
//! DESIGN
//! ======
//! The shell constructs one `ThemeController` and hands its read signal and
//! toggle to the header as props. The effector is subscribed to the cell
//! before the render signal, so the document marker and stored choice are
//! updated before the icon re-renders. In the browser the render signal is
//! subscribed after hydration.

use leptos::prelude::*;
use theme::{AmbientScheme, Effector, PreferenceStore, Theme, ThemeCell, ThemeConfig, ThemeMarker};

use crate::util::theme_host::{BrowserStorage, DocumentRoot, SystemScheme};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Handle to the shell's single preference cell.
#[derive(Clone, Copy)]
pub struct ThemeController {
    current: RwSignal<Theme>,
    cell: StoredValue<ThemeCell>,
}

impl ThemeController {
    /// Resolve against the browser and start applying every value.
    pub fn start() -> Self {
        Self::start_with(ThemeConfig::default(), BrowserStorage, SystemScheme, DocumentRoot)
    }

    pub fn start_with<S, A, M>(config: ThemeConfig, store: S, ambient: A, marker: M) -> Self
    where
        S: PreferenceStore + Send + Sync + 'static,
        A: AmbientScheme,
        M: ThemeMarker + Send + Sync + 'static,
    {
        let initial = theme::resolve(&config, &store, &ambient);
        // The server always renders the fallback, so the render signal starts
        // there and the client adopts that markup before switching.
        let current = RwSignal::new(config.fallback);

        let mut cell = ThemeCell::new(initial);
        let effector = Effector::new(config, marker, store);
        cell.subscribe(move |t| effector.observe(t));
        let cell = StoredValue::new(cell);

        let render = move |t: Theme| current.set(t);
        #[cfg(feature = "hydrate")]
        Effect::new(move || cell.update_value(|c| c.subscribe(render)));
        #[cfg(not(feature = "hydrate"))]
        cell.update_value(|c| c.subscribe(render));

        Self { current, cell }
    }

    /// Read-only view for rendering.
    pub fn theme(self) -> Signal<Theme> {
        self.current.into()
    }

    /// The toggle action.
    pub fn toggle(self) {
        self.cell.update_value(|cell| {
            cell.toggle();
        });
    }
}
