//! Search Results Component
//!
//! One page of results plus prev/next buttons.

use leptos::prelude::*;
use recipe_core::Intent;

use crate::context::use_app_context;
use crate::display::{limit_title, TITLE_LIMIT};
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ResultsList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    view! {
        <div class="results">
            <Show when=move || store.results_loading().get()>
                <div class="loader"></div>
            </Show>
            <ul class="results__list">
                <For
                    each=move || store.results().get()
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| {
                        let id = recipe.id.clone();
                        let is_selected = move || store.selected_id().get().as_deref() == Some(id.as_str());
                        let link_class = move || {
                            if is_selected() { "results__link results__link--active" } else { "results__link" }
                        };
                        view! {
                            <li>
                                <a class=link_class href=format!("#{}", recipe.id)>
                                    <figure class="results__fig">
                                        <img src=recipe.thumbnail_url.clone() alt=recipe.title.clone() />
                                    </figure>
                                    <div class="results__data">
                                        <h4 class="results__name">{limit_title(&recipe.title, TITLE_LIMIT)}</h4>
                                        <p class="results__author">{recipe.author.clone()}</p>
                                    </div>
                                </a>
                            </li>
                        }
                    }
                />
            </ul>
            <div class="results__pages">
                {move || store.page_buttons().get().prev.map(|page| view! {
                    <button class="btn-inline results__btn--prev" on:click=move |_| ctx.dispatch(Intent::GoToPage(page))>
                        "Page " {page}
                    </button>
                })}
                {move || store.page_buttons().get().next.map(|page| view! {
                    <button class="btn-inline results__btn--next" on:click=move |_| ctx.dispatch(Intent::GoToPage(page))>
                        "Page " {page}
                    </button>
                })}
            </div>
        </div>
    }
}
