use serde::{Deserialize, Serialize};

use crate::recipe::Ingredient;

/// A single planned ingredient: one per (planned recipe x ingredient line).
///
/// Entries carry no identity; the same ingredient showing up twice means
/// both amounts have to be bought.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IngredientEntry {
    #[serde(rename = "ingredient")]
    pub ingredient_name: String,
    #[serde(rename = "quantity")]
    pub quantity_text: String,
    #[serde(rename = "supermarket")]
    pub store_name: String,
}

impl IngredientEntry {
    pub fn new(
        ingredient_name: impl Into<String>,
        quantity_text: impl Into<String>,
        store_name: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            quantity_text: quantity_text.into(),
            store_name: store_name.into(),
        }
    }
}

impl From<&Ingredient> for IngredientEntry {
    fn from(value: &Ingredient) -> Self {
        Self {
            ingredient_name: value.name.to_owned(),
            quantity_text: value.quantity.to_owned(),
            store_name: value.supermarket.to_owned(),
        }
    }
}

impl<N, Q, S> From<(N, Q, S)> for IngredientEntry
where
    N: Into<String>,
    Q: Into<String>,
    S: Into<String>,
{
    fn from((name, quantity, store): (N, Q, S)) -> Self {
        Self::new(name, quantity, store)
    }
}
