//! Likes Panel Component

use leptos::prelude::*;

use crate::display::{limit_title, TITLE_LIMIT};
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn LikesPanel() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="likes">
            <Show when=move || store.likes_menu_visible().get()>
                <span class="likes__field">"♥ Likes"</span>
            </Show>
            <ul class="likes__list">
                <For
                    each=move || store.likes().get()
                    key=|like| like.id.clone()
                    children=|like| view! {
                        <li>
                            <a class="likes__link" href=format!("#{}", like.id)>
                                <figure class="likes__fig">
                                    <img src=like.image.clone() alt=like.title.clone() />
                                </figure>
                                <div class="likes__data">
                                    <h4 class="likes__name">{limit_title(&like.title, TITLE_LIMIT)}</h4>
                                    <p class="likes__author">{like.author.clone()}</p>
                                </div>
                            </a>
                        </li>
                    }
                />
            </ul>
        </div>
    }
}
