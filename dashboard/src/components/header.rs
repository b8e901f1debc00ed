//! Shell header: title, trading-mode badge and the theme toggle.

use leptos::prelude::*;
use theme::{Theme, ToggleIcon};

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::{MoonIcon, SunIcon};

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Top bar of the shell.
///
/// Receives the preference and its toggle explicitly; it does not look the
/// theme up from context.
#[component]
pub fn Header(theme: Signal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    let label = Signal::derive(move || theme.get().toggle_label().to_owned());

    view! {
        <header class="shell__header">
            <h1 class="shell__title">"Trading Desk"</h1>
            <span class="shell__badge">"Paper Trading"</span>
            <span class="shell__spacer"></span>
            <Button variant=ButtonVariant::Icon title=label on_click=on_toggle>
                {move || match theme.get().toggle_icon() {
                    ToggleIcon::Sun => view! { <SunIcon/> }.into_any(),
                    ToggleIcon::Moon => view! { <MoonIcon/> }.into_any(),
                }}
            </Button>
        </header>
    }
}
