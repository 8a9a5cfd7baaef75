use chrono::NaiveDate;
use mealplanner_shared::{IngredientEntry, Recipe};
use serde::{Deserialize, Serialize};

use crate::MealPlan;

/// One day of the meal plan as it is exchanged in JSON.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlannedMeal {
    pub date: NaiveDate,
    pub recipe_id: u64,
}

/// A planned day joined with the recipe name, for listing the plan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlannedRecipe {
    pub date: NaiveDate,
    pub recipe_id: u64,
    pub recipe_name: String,
}

/// Recipes together with the dates they are planned on
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanDocument {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub meal_plan: Vec<PlannedMeal>,
}

impl PlanDocument {
    /// When a date is listed more than once the last listing wins.
    pub fn plan(&self) -> MealPlan {
        self.meal_plan
            .iter()
            .map(|meal| (meal.date, meal.recipe_id))
            .collect()
    }

    pub fn set_plan(&mut self, plan: &MealPlan) {
        self.meal_plan = plan
            .iter()
            .map(|(date, recipe_id)| PlannedMeal { date, recipe_id })
            .collect();
    }

    pub fn recipe_ids(&self) -> Vec<u64> {
        self.recipes.iter().map(|r| r.id).collect()
    }

    pub fn entries(&self) -> Vec<IngredientEntry> {
        self.plan().entries(&self.recipes)
    }
}
