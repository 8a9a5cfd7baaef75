use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use mealplanner_mealplan::{PlanDocument, PlannedRecipe};
use serde::Deserialize;

use crate::config::MAX_PLAN_DAYS;
use crate::error::AppError;
use crate::routes::AppState;

/// Query parameters for plan generation
#[derive(Deserialize)]
pub struct GenerateQuery {
    /// Number of days to plan, defaults to `planner.default_days`
    days: Option<u32>,
    /// First planned day (YYYY-MM-DD), defaults to today
    start: Option<NaiveDate>,
}

/// POST /meal_plan - Planned days with their recipe name, in date order
pub async fn schedule(Json(document): Json<PlanDocument>) -> Json<Vec<PlannedRecipe>> {
    Json(document.plan().schedule(&document.recipes))
}

/// POST /generate_plan - Replace the plan with randomly picked recipes
///
/// Query parameters:
/// - ?days=N (optional)
/// - ?start=YYYY-MM-DD (optional)
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
    Json(mut document): Json<PlanDocument>,
) -> Result<Json<PlanDocument>, AppError> {
    let days = query.days.unwrap_or(state.config.planner.default_days);
    if days > MAX_PLAN_DAYS {
        return Err(AppError::ValidationError(format!(
            "days must be at most {MAX_PLAN_DAYS}"
        )));
    }

    let start = query.start.unwrap_or_else(|| Local::now().date_naive());
    let plan =
        mealplanner_mealplan::generate(&document.recipe_ids(), days, start, &mut rand::rng())?;

    tracing::info!(%start, days, "Meal plan generated");

    document.set_plan(&plan);

    Ok(Json(document))
}
