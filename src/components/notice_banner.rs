//! Notice Banner Component
//!
//! Shows the latest failure notice until dismissed, with the recent log
//! lines behind a details toggle.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Log lines shown under an expanded notice
const DETAIL_LINES: usize = 8;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_ui_store();
    let show_details = RwSignal::new(false);

    let dismiss = move |_| {
        show_details.set(false);
        store.notice().set(None);
    };

    view! {
        {move || store.notice().get().map(|message| view! {
            <div class="notice" role="alert">
                <span>{message}</span>
                <button class="notice__details" on:click=move |_| show_details.update(|open| *open = !*open)>
                    {move || if show_details.get() { "Hide details" } else { "Details" }}
                </button>
                <button class="notice__close" on:click=dismiss>"×"</button>
                <Show when=move || show_details.get()>
                    <pre class="notice__log">{recent_log()}</pre>
                </Show>
            </div>
        })}
    }
}

fn recent_log() -> String {
    let lines = rolling_logger::recent_lines();
    let skip = lines.len().saturating_sub(DETAIL_LINES);
    lines[skip..].join("\n")
}
