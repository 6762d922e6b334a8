//! Recipe Detail Component
//!
//! Ingredients, servings controls, like toggle and "add to list".

use leptos::prelude::*;
use recipe_core::domain::{format_quantity, Ingredient, ServingsDirection};
use recipe_core::Intent;

use crate::context::use_app_context;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
fn IngredientRow(ingredient: Ingredient) -> impl IntoView {
    let count = ingredient.quantity.map(format_quantity).unwrap_or_default();
    let unit = ingredient.unit.unwrap_or_default();
    view! {
        <li class="recipe__item">
            <div class="recipe__count">{count}</div>
            <div class="recipe__ingredient">
                <span class="recipe__unit">{unit}</span>
                " "
                {ingredient.name}
            </div>
        </li>
    }
}

#[component]
pub fn RecipeView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let liked = store.recipe_liked();

    view! {
        <div class="recipe">
            <Show when=move || store.recipe_loading().get()>
                <div class="loader"></div>
            </Show>
            {move || store.recipe().get().map(|recipe| view! {
                <figure class="recipe__fig">
                    <img src=recipe.image.clone() alt=recipe.title.clone() class="recipe__img" />
                    <h1 class="recipe__title"><span>{recipe.title.clone()}</span></h1>
                </figure>
                <div class="recipe__details">
                    <div class="recipe__info">
                        <span class="recipe__info-data recipe__info-data--minutes">{recipe.prep_time_minutes}</span>
                        <span class="recipe__info-text">" minutes"</span>
                    </div>
                    <div class="recipe__info">
                        <span class="recipe__info-data recipe__info-data--people">{recipe.servings}</span>
                        <span class="recipe__info-text">" servings"</span>
                        <div class="recipe__info-buttons">
                            <button
                                class="btn-tiny btn-decrease"
                                on:click=move |_| ctx.dispatch(Intent::AdjustServings(ServingsDirection::Decrease))
                            >"-"</button>
                            <button
                                class="btn-tiny btn-increase"
                                on:click=move |_| ctx.dispatch(Intent::AdjustServings(ServingsDirection::Increase))
                            >"+"</button>
                        </div>
                    </div>
                    <button class="recipe__love" on:click=move |_| ctx.dispatch(Intent::ToggleLike)>
                        {move || if liked.get() { "♥ Liked" } else { "♡ Like" }}
                    </button>
                </div>
                <div class="recipe__ingredients">
                    <ul class="recipe__ingredient-list">
                        {recipe.ingredients.iter().cloned().map(|ingredient| view! {
                            <IngredientRow ingredient=ingredient />
                        }).collect_view()}
                    </ul>
                    <button
                        class="btn-small recipe__btn recipe__btn--add"
                        on:click=move |_| ctx.dispatch(Intent::AddRecipeToList)
                    >"Add to shopping list"</button>
                </div>
                <div class="recipe__directions">
                    <p class="recipe__directions-text">
                        "This recipe was carefully designed and tested by "
                        <span class="recipe__by">{recipe.publisher.clone()}</span>
                        ". Please check out directions at their website."
                    </p>
                    <a class="btn-small recipe__btn" href=recipe.source_url.clone() target="_blank">"Directions"</a>
                </div>
            })}
        </div>
    }
}
