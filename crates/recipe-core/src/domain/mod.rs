//! Domain Layer
//!
//! Ingredient parsing, unit scaling and the four state models.
//! Models never reference each other; the controller moves data between them.

mod error;
mod generation;
mod ingredient;
mod likes;
mod recipe;
mod search;
mod shopping_list;
mod units;

pub use error::{CoreError, CoreResult, FetchError, PersistenceError, ValidationError};
pub use generation::Generation;
pub use ingredient::{format_quantity, parse as parse_ingredient, Ingredient};
pub use likes::{LikedRecipe, LikesCollection};
pub use recipe::{
    Recipe, RecipeData, RecipeSummary, ServingsDirection, DEFAULT_SERVINGS, INGREDIENTS_PER_GROUP,
    MINUTES_PER_GROUP,
};
pub use search::{PageButtons, ResultPage, SearchQuery};
pub use shopping_list::{ItemId, ShoppingItem, ShoppingList};
pub use units::{canonical_unit, scale};
