pub mod aggregation;
pub mod quantity;
pub mod report;

// Re-export commonly used types
pub use aggregation::{AggregationOutcome, ShoppingListAggregator};
pub use mealplanner_shared::IngredientEntry;
pub use quantity::{format_quantity, parse_quantity, ParsedQuantity, QuantityError};
pub use report::{Item, ShoppingListReport, StoreGroup};
