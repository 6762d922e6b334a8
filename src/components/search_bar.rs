//! Search Bar Component

use leptos::prelude::*;
use recipe_core::Intent;

use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Intent::SubmitSearch(store.query_input().get_untracked()));
    };

    view! {
        <form class="search" on:submit=on_submit>
            <input
                type="text"
                class="search__field"
                placeholder="Search over 1,000,000 recipes..."
                prop:value=move || store.query_input().get()
                on:input=move |ev| store.query_input().set(event_target_value(&ev))
            />
            <button class="btn search__btn" type="submit">"Search"</button>
        </form>
    }
}
