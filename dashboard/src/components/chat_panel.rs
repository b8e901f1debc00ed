//! Conversation panel with a local transcript and draft input.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::state::chat::ChatState;

const AUTHOR: &str = "You";

/// Chat panel showing the session's messages and an input for new ones.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());

    let do_send = move || {
        let draft = input.get_untracked();
        let mut posted = false;
        chat.update(|c| posted = c.post(AUTHOR, &draft));
        if posted {
            input.set(String::new());
        }
    };

    let on_send = Callback::new(move |()| do_send());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let cannot_send = Signal::derive(move || input.get().trim().is_empty());

    view! {
        <div class="panel chat-panel">
            <h2 class="panel__title">"Assistant"</h2>
            <div class="chat-panel__messages">
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Ask about the market, a stock, or your portfolio."</div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            view! {
                                <div class="chat-panel__message">
                                    <span class="chat-panel__author">{msg.author}</span>
                                    <span class="chat-panel__text">{msg.content}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Message the assistant..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <Button
                    variant=ButtonVariant::Primary
                    title=Signal::derive(|| "Send message".to_owned())
                    disabled=cannot_send
                    on_click=on_send
                >
                    "Send"
                </Button>
            </div>
        </div>
    }
}
