//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! never touches the store directly; it sends render commands through
//! [`StoreView`], which applies them here.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::domain::{LikedRecipe, PageButtons, Recipe, RecipeSummary, ShoppingItem};
use recipe_core::{Region, RenderCommand, View};

/// Everything the components render
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Text in the search field
    pub query_input: String,
    /// Current page of search results
    pub results: Vec<RecipeSummary>,
    pub page_buttons: PageButtons,
    pub results_loading: bool,
    /// Result highlighted as the open recipe
    pub selected_id: Option<String>,
    pub recipe: Option<Recipe>,
    pub recipe_liked: bool,
    pub recipe_loading: bool,
    pub list_items: Vec<ShoppingItem>,
    pub likes: Vec<LikedRecipe>,
    pub likes_menu_visible: bool,
    /// Failure notice waiting to be dismissed
    pub notice: Option<String>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Applies controller render commands to the store
pub struct StoreView {
    store: UiStore,
}

impl StoreView {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }
}

impl View for StoreView {
    fn render(&self, command: RenderCommand) {
        let store = self.store;
        match command {
            RenderCommand::ClearSearchInput => store.query_input().set(String::new()),
            RenderCommand::ClearResults => {
                store.results().set(Vec::new());
                store.page_buttons().set(PageButtons::default());
            }
            RenderCommand::ShowLoader(region) => loading_flag(store, region, true),
            RenderCommand::ClearLoader(region) => loading_flag(store, region, false),
            RenderCommand::RenderResults { items, buttons, .. } => {
                store.results().set(items);
                store.page_buttons().set(buttons);
            }
            RenderCommand::HighlightSelected(id) => store.selected_id().set(Some(id)),
            RenderCommand::ClearRecipe => store.recipe().set(None),
            RenderCommand::RenderRecipe { recipe, liked } => {
                store.recipe_liked().set(liked);
                store.recipe().set(Some(recipe));
            }
            RenderCommand::UpdateServings(recipe) => store.recipe().set(Some(recipe)),
            RenderCommand::RenderListItem(item) => store.list_items().write().push(item),
            RenderCommand::UpdateListItem(updated) => {
                if let Some(item) = store.list_items().write().iter_mut().find(|item| item.id == updated.id) {
                    *item = updated;
                }
            }
            RenderCommand::DeleteListItem(id) => store.list_items().write().retain(|item| item.id != id),
            RenderCommand::RenderLike(like) => store.likes().write().push(like),
            RenderCommand::DeleteLike(id) => store.likes().write().retain(|like| like.id != id),
            RenderCommand::ToggleLikeButton(liked) => store.recipe_liked().set(liked),
            RenderCommand::ToggleLikeMenu(visible) => store.likes_menu_visible().set(visible),
            RenderCommand::Notify(notice) => store.notice().set(Some(notice.message().to_string())),
        }
    }
}

fn loading_flag(store: UiStore, region: Region, loading: bool) {
    match region {
        Region::Results => store.results_loading().set(loading),
        Region::Recipe => store.recipe_loading().set(loading),
    }
}
