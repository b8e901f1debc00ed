//! Inline SVG icons for the theme toggle.

use leptos::prelude::*;

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--sun" viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="10" r="4"></circle>
            <line x1="10" y1="1" x2="10" y2="3"></line>
            <line x1="10" y1="17" x2="10" y2="19"></line>
            <line x1="1" y1="10" x2="3" y2="10"></line>
            <line x1="17" y1="10" x2="19" y2="10"></line>
            <line x1="3.6" y1="3.6" x2="5" y2="5"></line>
            <line x1="15" y1="15" x2="16.4" y2="16.4"></line>
            <line x1="3.6" y1="16.4" x2="5" y2="15"></line>
            <line x1="15" y1="5" x2="16.4" y2="3.6"></line>
        </svg>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--moon" viewBox="0 0 20 20" aria-hidden="true">
            <path d="M15.5 12.5 A7 7 0 1 1 7.5 4.5 A5.5 5.5 0 0 0 15.5 12.5 Z"></path>
        </svg>
    }
}
