//! Trade signal board.

use leptos::prelude::*;

#[component]
pub fn SignalBoard() -> impl IntoView {
    view! {
        <section class="panel signal-board">
            <h2 class="panel__title">"Signals"</h2>
            <table class="signal-board__table">
                <thead>
                    <tr>
                        <th>"Symbol"</th>
                        <th>"Setup"</th>
                        <th>"Verdict"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td class="panel__empty" colspan="3">"No signals yet."</td>
                    </tr>
                </tbody>
            </table>
        </section>
    }
}
