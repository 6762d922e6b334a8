//! UI Components
//!
//! Presentation only: read the store, send intents to the controller.

mod likes_panel;
mod notice_banner;
mod recipe_view;
mod results_list;
mod search_bar;
mod shopping_list;

pub use likes_panel::LikesPanel;
pub use notice_banner::NoticeBanner;
pub use recipe_view::RecipeView;
pub use results_list::ResultsList;
pub use search_bar::SearchBar;
pub use shopping_list::ShoppingListView;
