//! Paper portfolio card.

use leptos::prelude::*;

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section class="panel portfolio">
            <h2 class="panel__title">"Portfolio"</h2>
            <dl class="portfolio__summary">
                <div>
                    <dt>"Positions"</dt>
                    <dd>"0"</dd>
                </div>
                <div>
                    <dt>"Mode"</dt>
                    <dd>"Paper"</dd>
                </div>
            </dl>
            <p class="panel__empty">"No open positions."</p>
        </section>
    }
}
