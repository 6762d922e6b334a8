//! Shopping List Component

use leptos::prelude::*;
use recipe_core::Intent;

use crate::context::use_app_context;
use crate::display::format_count;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ShoppingListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    view! {
        <div class="shopping">
            <h2 class="heading-2">"My Shopping List"</h2>
            <ul class="shopping__list">
                <For
                    each=move || store.list_items().get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        view! {
                            <li class="shopping__item">
                                <div class="shopping__count">
                                    <input
                                        type="number"
                                        step="any"
                                        class="shopping__count-value"
                                        value=format_count(item.count)
                                        on:change=move |ev| ctx.dispatch(Intent::UpdateListCount {
                                            id,
                                            raw: event_target_value(&ev),
                                        })
                                    />
                                    <p>{item.unit.clone()}</p>
                                </div>
                                <p class="shopping__description">{item.ingredient_name.clone()}</p>
                                <button
                                    class="shopping__delete btn-tiny"
                                    on:click=move |_| ctx.dispatch(Intent::DeleteListItem(id))
                                >"✕"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
