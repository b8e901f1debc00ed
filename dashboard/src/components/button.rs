//! Themed button primitive shared by the header and the panels.

use leptos::prelude::*;

/// Visual treatment for [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    /// Square button holding a single icon.
    Icon,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "btn",
            Self::Primary => "btn btn--primary",
            Self::Icon => "btn btn--icon",
        }
    }
}

/// Button styled by the active theme. Colours come from the stylesheet's
/// `.dark` rules, so the button itself never reads the preference.
#[component]
pub fn Button(
    on_click: Callback<()>,
    title: Signal<String>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=variant.class()
            title=move || title.get()
            aria-label=move || title.get()
            disabled=move || disabled.is_some_and(|d| d.get())
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
