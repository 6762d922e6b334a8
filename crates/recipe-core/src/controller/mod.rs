//! Application Controller
//!
//! Turns user intents into model operations, remote fetches and render
//! commands. State sits behind a `RefCell` that is never held across an
//! await, so a newer flow can start while an older fetch is in flight;
//! generation ids decide which result is allowed to land.

use std::cell::{Ref, RefCell};

use crate::config::CoreConfig;
use crate::domain::{
    CoreResult, Generation, ItemId, LikedRecipe, LikesCollection, PageButtons, Recipe,
    RecipeSummary, SearchQuery, ServingsDirection, ShoppingItem, ShoppingList, ValidationError,
};
use crate::ports::{KeyValueStore, RecipeSource};


/// Everything the user can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Restore persisted likes (and the shopping list) on page load
    Startup,
    SubmitSearch(String),
    GoToPage(usize),
    /// The location fragment changed; carries the raw fragment
    Navigate(String),
    AdjustServings(ServingsDirection),
    AddRecipeToList,
    DeleteListItem(ItemId),
    /// Raw text from a count field
    UpdateListCount { id: ItemId, raw: String },
    ToggleLike,
}

/// Screen regions that show a loader while fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Results,
    Recipe,
}

/// User-visible failure notices
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    SearchFailed(String),
    RecipeFailed(String),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::SearchFailed(_) => "Something went wrong with the search. Please try again.",
            Notice::RecipeFailed(_) => "Error processing recipe!",
        }
    }
}

/// What the view layer is asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearSearchInput,
    ClearResults,
    ShowLoader(Region),
    ClearLoader(Region),
    RenderResults {
        items: Vec<RecipeSummary>,
        page: usize,
        buttons: PageButtons,
    },
    HighlightSelected(String),
    ClearRecipe,
    RenderRecipe { recipe: Recipe, liked: bool },
    UpdateServings(Recipe),
    RenderListItem(ShoppingItem),
    UpdateListItem(ShoppingItem),
    DeleteListItem(ItemId),
    RenderLike(LikedRecipe),
    DeleteLike(String),
    ToggleLikeButton(bool),
    ToggleLikeMenu(bool),
    Notify(Notice),
}

/// Render sink implemented by the presentation layer
pub trait View {
    fn render(&self, command: RenderCommand);
}

/// The single live instance of every model
#[derive(Debug, Default)]
pub struct AppState {
    search: Option<SearchQuery>,
    current_page: usize,
    recipe: Option<Recipe>,
    list: Option<ShoppingList>,
    likes: LikesCollection,
    search_generation: Generation,
    recipe_generation: Generation,
}

impl AppState {
    pub fn search(&self) -> Option<&SearchQuery> {
        self.search.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn list(&self) -> Option<&ShoppingList> {
        self.list.as_ref()
    }

    pub fn likes(&self) -> &LikesCollection {
        &self.likes
    }
}

pub struct Controller<S, K, V> {
    state: RefCell<AppState>,
    source: S,
    store: K,
    view: V,
    config: CoreConfig,
}

impl<S: RecipeSource, K: KeyValueStore, V: View> Controller<S, K, V> {
    pub fn new(source: S, store: K, view: V, config: CoreConfig) -> Self {
        Self {
            state: RefCell::new(AppState::default()),
            source,
            store,
            view,
            config,
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    /// Run one intent to completion. Failures are logged; fetch failures
    /// have already been shown to the user as a notice.
    pub async fn dispatch(&self, intent: Intent) {
        log::debug!("dispatch {:?}", intent);
        let result = match intent {
            Intent::Startup => self.control_startup().await,
            Intent::SubmitSearch(query) => self.control_search(&query).await,
            Intent::GoToPage(page) => self.control_page(page),
            Intent::Navigate(fragment) => self.control_recipe(&fragment).await,
            Intent::AdjustServings(direction) => self.control_servings(direction),
            Intent::AddRecipeToList => self.control_add_to_list().await,
            Intent::DeleteListItem(id) => self.control_delete_item(id).await,
            Intent::UpdateListCount { id, raw } => self.control_update_count(id, &raw).await,
            Intent::ToggleLike => self.control_like().await,
        };

        if let Err(e) = result {
            if e.is_user_visible() {
                log::error!("{}", e);
            } else {
                log::warn!("ignored: {}", e);
            }
        }
    }

    async fn control_startup(&self) -> CoreResult<()> {
        let likes = LikesCollection::restore(&self.store, &self.config.likes_key).await;
        let list = if self.config.persist_shopping_list {
            Some(ShoppingList::restore(&self.store, &self.config.shopping_list_key).await)
        } else {
            None
        };

        self.view.render(RenderCommand::ToggleLikeMenu(likes.menu_visible()));
        for like in likes.likes() {
            self.view.render(RenderCommand::RenderLike(like.clone()));
        }
        for item in list.iter().flat_map(|list| list.items()) {
            self.view.render(RenderCommand::RenderListItem(item.clone()));
        }

        let mut state = self.state.borrow_mut();
        state.likes = likes;
        if list.is_some() {
            state.list = list;
        }
        Ok(())
    }

    async fn control_search(&self, raw: &str) -> CoreResult<()> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        let generation = self.state.borrow_mut().search_generation.advance();
        self.view.render(RenderCommand::ClearSearchInput);
        self.view.render(RenderCommand::ClearResults);
        self.view.render(RenderCommand::ShowLoader(Region::Results));

        let outcome = SearchQuery::search(&self.source, query).await;

        if !self.state.borrow().search_generation.is_current(generation) {
            log::debug!("discarding results of stale search {:?}", query);
            return Ok(());
        }
        self.view.render(RenderCommand::ClearLoader(Region::Results));

        match outcome {
            Ok(results) => {
                self.state.borrow_mut().search = Some(SearchQuery::new(generation, query, results));
                self.render_page(1)
            }
            Err(e) => {
                // put the previous results back, if there were any
                let previous = self.state.borrow().current_page;
                if self.state.borrow().search.is_some() {
                    self.render_page(previous)?;
                }
                self.view.render(RenderCommand::Notify(Notice::SearchFailed(e.to_string())));
                Err(e.into())
            }
        }
    }

    fn control_page(&self, page: usize) -> CoreResult<()> {
        if self.state.borrow().search.is_none() {
            return Err(ValidationError::NoSearch.into());
        }
        self.view.render(RenderCommand::ClearResults);
        self.render_page(page)
    }

    fn render_page(&self, page: usize) -> CoreResult<()> {
        let command = {
            let mut state = self.state.borrow_mut();
            let search = state.search.as_ref().ok_or(ValidationError::NoSearch)?;
            let page = search.page(page, self.config.results_per_page);
            let current = page.page;
            let command = RenderCommand::RenderResults {
                items: page.items.to_vec(),
                page: current,
                buttons: page.buttons,
            };
            state.current_page = current;
            command
        };
        self.view.render(command);
        Ok(())
    }

    async fn control_recipe(&self, fragment: &str) -> CoreResult<()> {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            return Ok(());
        }

        let (generation, has_search) = {
            let mut state = self.state.borrow_mut();
            (state.recipe_generation.advance(), state.search.is_some())
        };
        self.view.render(RenderCommand::ClearRecipe);
        self.view.render(RenderCommand::ShowLoader(Region::Recipe));
        if has_search {
            self.view.render(RenderCommand::HighlightSelected(id.to_string()));
        }

        let outcome = Recipe::load(&self.source, id).await;

        if !self.state.borrow().recipe_generation.is_current(generation) {
            log::debug!("discarding stale recipe {}", id);
            return Ok(());
        }
        self.view.render(RenderCommand::ClearLoader(Region::Recipe));

        match outcome {
            Ok(recipe) => {
                let liked = {
                    let mut state = self.state.borrow_mut();
                    let liked = state.likes.is_liked(&recipe.id);
                    state.recipe = Some(recipe.clone());
                    liked
                };
                log::info!("loaded recipe {} ({} ingredients)", recipe.id, recipe.ingredients.len());
                self.view.render(RenderCommand::RenderRecipe { recipe, liked });
                Ok(())
            }
            Err(e) => {
                let previous = {
                    let state = self.state.borrow();
                    state
                        .recipe
                        .clone()
                        .map(|recipe| (state.likes.is_liked(&recipe.id), recipe))
                };
                if let Some((liked, recipe)) = previous {
                    self.view.render(RenderCommand::RenderRecipe { recipe, liked });
                }
                self.view.render(RenderCommand::Notify(Notice::RecipeFailed(e.to_string())));
                Err(e.into())
            }
        }
    }

    fn control_servings(&self, direction: ServingsDirection) -> CoreResult<()> {
        let updated = {
            let mut state = self.state.borrow_mut();
            let recipe = state.recipe.as_ref().ok_or(ValidationError::NoRecipe)?;
            let updated = recipe.update_servings(direction);
            if updated.servings == recipe.servings {
                log::debug!("servings already at {}", recipe.servings);
                return Ok(());
            }
            state.recipe = Some(updated.clone());
            updated
        };
        self.view.render(RenderCommand::UpdateServings(updated));
        Ok(())
    }

    async fn control_add_to_list(&self) -> CoreResult<()> {
        let (added, snapshot) = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            let recipe = state.recipe.as_ref().ok_or(ValidationError::NoRecipe)?;
            let list = state.list.get_or_insert_with(ShoppingList::new);
            let added: Vec<ShoppingItem> = recipe
                .ingredients
                .iter()
                .map(|ingredient| {
                    list.add_item(
                        ingredient.quantity.unwrap_or(1.0),
                        ingredient.unit.clone().unwrap_or_default(),
                        ingredient.name.clone(),
                    )
                })
                .collect();
            (added, list.clone())
        };

        for item in added {
            self.view.render(RenderCommand::RenderListItem(item));
        }
        self.persist_list(&snapshot).await
    }

    async fn control_delete_item(&self, id: ItemId) -> CoreResult<()> {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            let Some(list) = state.list.as_mut() else {
                return Ok(());
            };
            list.delete_item(id);
            list.clone()
        };
        self.view.render(RenderCommand::DeleteListItem(id));
        self.persist_list(&snapshot).await
    }

    async fn control_update_count(&self, id: ItemId, raw: &str) -> CoreResult<()> {
        let count = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|count| count.is_finite())
            .ok_or_else(|| ValidationError::InvalidCount(raw.to_string()))?;

        let (updated, snapshot) = {
            let mut state = self.state.borrow_mut();
            let list = state.list.as_mut().ok_or(ValidationError::UnknownItem(id))?;
            list.update_count(id, count)?;
            let updated = list.get(id).cloned().ok_or(ValidationError::UnknownItem(id))?;
            (updated, list.clone())
        };
        self.view.render(RenderCommand::UpdateListItem(updated));
        self.persist_list(&snapshot).await
    }

    async fn control_like(&self) -> CoreResult<()> {
        let (commands, snapshot) = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            let recipe = state.recipe.as_ref().ok_or(ValidationError::NoRecipe)?;

            let mut commands = Vec::new();
            if state.likes.is_liked(&recipe.id) {
                state.likes.delete_like(&recipe.id);
                commands.push(RenderCommand::ToggleLikeButton(false));
                commands.push(RenderCommand::DeleteLike(recipe.id.clone()));
            } else {
                let like = state.likes.add_like(
                    recipe.id.clone(),
                    recipe.title.clone(),
                    recipe.author.clone(),
                    recipe.image.clone(),
                );
                commands.push(RenderCommand::ToggleLikeButton(true));
                commands.push(RenderCommand::RenderLike(like));
            }
            commands.push(RenderCommand::ToggleLikeMenu(state.likes.menu_visible()));
            (commands, state.likes.clone())
        };

        for command in commands {
            self.view.render(command);
        }
        snapshot.persist(&self.store, &self.config.likes_key).await?;
        Ok(())
    }

    async fn persist_list(&self, list: &ShoppingList) -> CoreResult<()> {
        if !self.config.persist_shopping_list {
            return Ok(());
        }
        list.persist(&self.store, &self.config.shopping_list_key).await?;
        Ok(())
    }
}
