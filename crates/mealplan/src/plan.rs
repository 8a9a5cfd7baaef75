use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use mealplanner_shared::{IngredientEntry, Recipe};

use crate::PlannedRecipe;

/// Recipes assigned to calendar dates, at most one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    days: BTreeMap<NaiveDate, u64>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a recipe to `date`, replacing whatever was planned there.
    /// `None` clears the day. Returns the previously planned recipe id.
    pub fn assign(&mut self, date: NaiveDate, recipe_id: Option<u64>) -> Option<u64> {
        match recipe_id {
            Some(id) => self.days.insert(date, id),
            None => self.days.remove(&date),
        }
    }

    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.days.remove(&date).is_some()
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn get(&self, date: NaiveDate) -> Option<u64> {
        self.days.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Planned days in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u64)> + '_ {
        self.days.iter().map(|(date, id)| (*date, *id))
    }

    /// Planned days joined with their recipe, in date order.
    ///
    /// Days pointing at a recipe that no longer exists are left out.
    pub fn schedule(&self, recipes: &[Recipe]) -> Vec<PlannedRecipe> {
        let recipes = index(recipes);

        self.iter()
            .filter_map(|(date, id)| {
                recipes.get(&id).map(|recipe| PlannedRecipe {
                    date,
                    recipe_id: id,
                    recipe_name: recipe.name.to_owned(),
                })
            })
            .collect()
    }

    /// Every ingredient of every planned recipe, in date order and then in
    /// recipe order. A recipe planned twice contributes its ingredients twice.
    pub fn entries(&self, recipes: &[Recipe]) -> Vec<IngredientEntry> {
        let recipes = index(recipes);
        let mut entries = vec![];

        for (date, id) in self.iter() {
            let Some(recipe) = recipes.get(&id) else {
                tracing::warn!(%date, recipe_id = id, "planned recipe not found, skipped");
                continue;
            };

            entries.extend(recipe.ingredients.iter().map(IngredientEntry::from));
        }

        entries
    }
}

impl FromIterator<(NaiveDate, u64)> for MealPlan {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, u64)>>(iter: T) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

fn index(recipes: &[Recipe]) -> HashMap<u64, &Recipe> {
    recipes.iter().map(|r| (r.id, r)).collect()
}
