use std::path::Path;

use mealplanner_mealplan::PlanDocument;

use crate::error::AppError;

pub mod generate;
pub mod server;
pub mod shopping_list;

/// Read a plan document from a JSON file
pub fn load_document(path: &Path) -> Result<PlanDocument, AppError> {
    let content = std::fs::read_to_string(path)?;

    Ok(serde_json::from_str(&content)?)
}
