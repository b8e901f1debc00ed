//! Market regime indicator card.

use leptos::prelude::*;

const REGIMES: [(&str, &str); 3] = [
    ("Bullish", "regime__chip--bull"),
    ("Sideways", "regime__chip--neutral"),
    ("Bearish", "regime__chip--bear"),
];

#[component]
pub fn MarketRegime() -> impl IntoView {
    view! {
        <section class="panel regime">
            <h2 class="panel__title">"Market Regime"</h2>
            <p class="regime__status">"Awaiting analysis"</p>
            <div class="regime__legend">
                {REGIMES
                    .into_iter()
                    .map(|(label, class)| {
                        view! { <span class=format!("regime__chip {class}")>{label}</span> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
