//! Recipe Book Frontend App
//!
//! Wires the store, the controller and the browser together.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use recipe_core::{Controller, CoreConfig, ForkifyClient, Intent};

use crate::components::{LikesPanel, NoticeBanner, RecipeView, ResultsList, SearchBar, ShoppingListView};
use crate::context::AppContext;
use crate::location;
use crate::storage::BrowserStorage;
use crate::store::{StoreView, UiState};

/// JSON config and API URL, both optionally baked in at build time
fn load_config() -> CoreConfig {
    let config = match option_env!("RECIPE_BOOK_CONFIG") {
        Some(raw) => CoreConfig::from_json(raw).unwrap_or_else(|e| {
            log::warn!("bad RECIPE_BOOK_CONFIG, using defaults: {}", e);
            CoreConfig::default()
        }),
        None => CoreConfig::default(),
    };
    match option_env!("RECIPE_BOOK_API_URL") {
        Some(url) => config.with_api_base_url(url),
        None => config,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);

    let config = load_config();
    log::info!("using recipe API at {}", config.api_base_url);
    let controller = Controller::new(
        ForkifyClient::new(config.api_base_url.clone()),
        BrowserStorage,
        StoreView::new(store),
        config,
    );
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Restore likes and the list first so the opened recipe knows if it is liked
    let controller = ctx.controller();
    spawn_local(async move {
        controller.dispatch(Intent::Startup).await;
        controller.dispatch(Intent::Navigate(location::current_recipe_id())).await;
    });

    let _ = window_event_listener(ev::hashchange, move |_| {
        ctx.dispatch(Intent::Navigate(location::current_recipe_id()));
    });

    view! {
        <div class="container">
            <header class="header">
                <SearchBar />
                <LikesPanel />
            </header>
            <NoticeBanner />
            <ResultsList />
            <RecipeView />
            <ShoppingListView />
        </div>
    }
}
