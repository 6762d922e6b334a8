//! Recipe Model
//!
//! One recipe's fetched data, its derived timing and servings, and
//! serving-size scaling of its parsed ingredients.

use serde::{Deserialize, Serialize};

use super::error::FetchError;
use super::ingredient::{self, Ingredient};
use super::units;
use crate::ports::RecipeSource;

/// Servings every freshly loaded recipe starts with
pub const DEFAULT_SERVINGS: u32 = 4;
/// Preparation time grows by this much per started group of ingredients
pub const MINUTES_PER_GROUP: u32 = 15;
pub const INGREDIENTS_PER_GROUP: u32 = 3;

/// Search result entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub thumbnail_url: String,
}

/// Recipe fields as delivered by the remote source, ingredients still raw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub publisher: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsDirection {
    Increase,
    Decrease,
}

/// A loaded recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub publisher: String,
    /// Always at least 1
    pub servings: u32,
    pub prep_time_minutes: u32,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Fetch a recipe by id and derive everything the view needs.
    pub async fn load<S: RecipeSource + ?Sized>(source: &S, id: &str) -> Result<Recipe, FetchError> {
        let data = source.fetch(id).await?;
        Ok(Recipe::from_data(data))
    }

    pub fn from_data(data: RecipeData) -> Self {
        let mut recipe = Self {
            id: data.id,
            title: data.title,
            author: data.author,
            image: data.image,
            source_url: data.source_url,
            publisher: data.publisher,
            servings: DEFAULT_SERVINGS,
            prep_time_minutes: 0,
            ingredients: Vec::new(),
        };
        recipe.parse_ingredients(&data.ingredients);
        recipe.derive_timing_and_servings();
        recipe
    }

    /// Replace the ingredient list with the parsed form of `raw_lines`
    pub fn parse_ingredients(&mut self, raw_lines: &[String]) {
        self.ingredients = raw_lines.iter().map(|line| ingredient::parse(line)).collect();
    }

    /// Estimate preparation time from the ingredient count and reset servings
    pub fn derive_timing_and_servings(&mut self) {
        let count = u32::try_from(self.ingredients.len()).unwrap_or(u32::MAX);
        self.prep_time_minutes = count.div_ceil(INGREDIENTS_PER_GROUP).saturating_mul(MINUTES_PER_GROUP);
        self.servings = DEFAULT_SERVINGS;
    }

    /// A copy with one serving more or less and every ingredient rescaled.
    ///
    /// Decreasing below one serving returns an unchanged copy.
    pub fn update_servings(&self, direction: ServingsDirection) -> Recipe {
        let servings = match direction {
            ServingsDirection::Increase => self.servings.saturating_add(1),
            ServingsDirection::Decrease => self.servings.saturating_sub(1),
        };
        if servings < 1 || servings == self.servings {
            return self.clone();
        }

        let scaled: Result<Vec<Ingredient>, _> = self
            .ingredients
            .iter()
            .map(|ingredient| units::scale(ingredient, self.servings, servings))
            .collect();

        match scaled {
            Ok(ingredients) => Recipe {
                servings,
                ingredients,
                ..self.clone()
            },
            Err(e) => {
                log::warn!("recipe {} kept at {} servings: {}", self.id, self.servings, e);
                self.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(lines: &[&str]) -> RecipeData {
        RecipeData {
            id: "47746".to_string(),
            title: "Best Pizza Dough Ever".to_string(),
            author: "101 Cookbooks".to_string(),
            image: "http://img/pizza.jpg".to_string(),
            source_url: "http://101cookbooks.com/pizza".to_string(),
            publisher: "101 Cookbooks".to_string(),
            ingredients: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_data_parses_and_derives() {
        let recipe = Recipe::from_data(data(&["4 1/2 cups flour", "1 tsp yeast", "salt to taste", "2 cups water"]));
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
        assert_eq!(recipe.prep_time_minutes, 30);
        assert_eq!(recipe.ingredients.len(), 4);
        assert_eq!(recipe.ingredients[0].quantity, Some(4.5));
        assert_eq!(recipe.ingredients[1].unit.as_deref(), Some("teaspoon"));
        assert_eq!(recipe.ingredients[2].quantity, None);
    }

    #[test]
    fn test_prep_time_heuristic() {
        assert_eq!(Recipe::from_data(data(&[])).prep_time_minutes, 0);
        assert_eq!(Recipe::from_data(data(&["a", "b", "c"])).prep_time_minutes, 15);
        assert_eq!(Recipe::from_data(data(&["a", "b", "c", "d"])).prep_time_minutes, 30);
    }

    #[test]
    fn test_increase_rescales_ingredients() {
        let recipe = Recipe::from_data(data(&["4 cups flour", "pinch of salt"]));
        let bigger = recipe.update_servings(ServingsDirection::Increase);
        assert_eq!(bigger.servings, 5);
        assert_eq!(bigger.ingredients[0].quantity, Some(5.0));
        assert_eq!(bigger.ingredients[1].quantity, None);
        // the original is untouched
        assert_eq!(recipe.servings, 4);
    }

    #[test]
    fn test_decrease_stops_at_one_serving() {
        let mut recipe = Recipe::from_data(data(&["2 cups flour"]));
        recipe.servings = 1;
        let same = recipe.update_servings(ServingsDirection::Decrease);
        assert_eq!(same, recipe);
    }

    #[test]
    fn test_decrease_then_increase_recovers_quantities() {
        let recipe = Recipe::from_data(data(&["3 oz butter", "1 1/2 cups sugar"]));
        let back = recipe
            .update_servings(ServingsDirection::Decrease)
            .update_servings(ServingsDirection::Increase);
        assert_eq!(back.servings, recipe.servings);
        for (a, b) in back.ingredients.iter().zip(&recipe.ingredients) {
            assert!((a.quantity.unwrap() - b.quantity.unwrap()).abs() < 1e-9);
        }
    }
}
