pub mod recipe;
pub mod shopping;

pub use recipe::{Ingredient, Recipe};
pub use shopping::IngredientEntry;
