//! Root shell component and the SSR document wrapper.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use theme::ThemeConfig;

use crate::components::chat_panel::ChatPanel;
use crate::components::header::Header;
use crate::components::market_regime::MarketRegime;
use crate::components::portfolio::Portfolio;
use crate::components::signal_board::SignalBoard;
use crate::state::theme::ThemeController;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Class for the server-rendered `<html>` element.
///
/// The server can only resolve to the fallback, so the marker is emitted for
/// it up front; in the browser `DocumentRoot` takes over the class list.
fn root_class(config: &ThemeConfig) -> String {
    if config.fallback.is_dark() {
        config.marker_class.clone()
    } else {
        String::new()
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let class = root_class(&ThemeConfig::default());

    view! {
        <!DOCTYPE html>
        <html lang="en" class=class>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the display preference and lays out the header, the chat column and
/// the dashboard column. All four panels stay mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeController::start();
    let on_toggle = Callback::new(move |()| theme.toggle());

    view! {
        <Stylesheet id="leptos" href="/pkg/trading-desk.css"/>
        <Title text="Trading Desk"/>

        <div class="shell">
            <Header theme=theme.theme() on_toggle=on_toggle/>
            <main class="shell__body">
                <aside class="shell__chat">
                    <ChatPanel/>
                </aside>
                <div class="shell__dashboard">
                    <MarketRegime/>
                    <Portfolio/>
                    <SignalBoard/>
                </div>
            </main>
        </div>
    }
}
