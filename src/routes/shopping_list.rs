use axum::Json;
use mealplanner_mealplan::PlanDocument;
use mealplanner_shopping::{IngredientEntry, ShoppingListAggregator, ShoppingListReport};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct EntriesInput {
    #[serde(default)]
    pub entries: Vec<IngredientEntry>,
}

/// POST /shopping_list - Shopping list for every meal in the plan document
pub async fn from_plan(Json(document): Json<PlanDocument>) -> Json<ShoppingListReport> {
    let entries = document.entries();

    tracing::info!(
        planned = document.meal_plan.len(),
        entries = entries.len(),
        "Building shopping list"
    );

    Json(ShoppingListAggregator::build(entries))
}

/// POST /shopping_list/entries - Shopping list for already flattened ingredients
pub async fn from_entries(Json(input): Json<EntriesInput>) -> Json<ShoppingListReport> {
    tracing::info!(entries = input.entries.len(), "Building shopping list");

    Json(ShoppingListAggregator::build(input.entries))
}
