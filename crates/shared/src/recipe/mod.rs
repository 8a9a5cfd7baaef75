use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe, as entered by the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Free-form amount, e.g. "200g", "1,5 kg", "1/2 cup" or "a pinch"
    pub quantity: String,
    pub supermarket: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            ingredients: vec![],
        }
    }

    pub fn ingredient(
        mut self,
        name: impl Into<String>,
        quantity: impl Into<String>,
        supermarket: impl Into<String>,
    ) -> Self {
        self.ingredients.push(Ingredient {
            name: name.into(),
            quantity: quantity.into(),
            supermarket: supermarket.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserialize_without_optional_fields() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 3, "name": "Soep"}"#).unwrap();

        assert_eq!(recipe.id, 3);
        assert_eq!(recipe.category, None);
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_recipe_builder_keeps_ingredient_order() {
        let recipe = Recipe::new(1, "Pannenkoeken")
            .ingredient("Bloem", "250g", "AH")
            .ingredient("Melk", "0,5l", "Jumbo");

        let names: Vec<_> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bloem", "Melk"]);
        assert_eq!(recipe.ingredients[1].quantity, "0,5l");
    }
}
