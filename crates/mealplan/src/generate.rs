use chrono::{Days, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{MealPlan, PlanError};

/// Generate a fresh plan for `days` consecutive dates starting at `start`
///
/// Every date gets a recipe picked at random from `recipe_ids`; the same
/// recipe may come up more than once.
pub fn generate<R>(
    recipe_ids: &[u64],
    days: u32,
    start: NaiveDate,
    rng: &mut R,
) -> Result<MealPlan, PlanError>
where
    R: Rng + ?Sized,
{
    if recipe_ids.is_empty() {
        return Err(PlanError::NoRecipes);
    }

    if days == 0 {
        return Err(PlanError::InvalidDays(days));
    }

    let mut plan = MealPlan::new();

    for offset in 0..days {
        let date = start
            .checked_add_days(Days::new(offset.into()))
            .ok_or(PlanError::InvalidDays(days))?;
        let id = recipe_ids.choose(rng).ok_or(PlanError::NoRecipes)?;

        plan.assign(date, Some(*id));
    }

    tracing::debug!(%start, days, recipes = recipe_ids.len(), "meal plan generated");

    Ok(plan)
}
