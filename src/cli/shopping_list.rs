use std::io::Write;
use std::path::Path;

use anyhow::Result;
use mealplanner_shopping::{ShoppingListAggregator, ShoppingListReport};

use crate::error::AppError;

/// Shopping list for the meals planned in the document at `path`
pub fn report(path: &Path) -> Result<ShoppingListReport, AppError> {
    let document = super::load_document(path)?;
    let entries = document.entries();

    tracing::info!(
        path = %path.display(),
        planned = document.meal_plan.len(),
        entries = entries.len(),
        "Building shopping list"
    );

    Ok(ShoppingListAggregator::build(entries))
}

pub fn run(path: &Path) -> Result<()> {
    let report = report(path)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}
