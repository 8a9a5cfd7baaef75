use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use mealplanner_mealplan::PlanDocument;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::MAX_PLAN_DAYS;
use crate::error::AppError;

pub struct GenerateInput {
    pub days: u32,
    pub start: Option<NaiveDate>,
    /// Fixed seed for a reproducible plan
    pub seed: Option<u64>,
}

/// Replace the meal plan of the document at `path` with a random one
pub fn plan(path: &Path, input: GenerateInput) -> Result<PlanDocument, AppError> {
    if input.days > MAX_PLAN_DAYS {
        return Err(AppError::ValidationError(format!(
            "days must be at most {MAX_PLAN_DAYS}"
        )));
    }

    let mut document = super::load_document(path)?;
    let start = input.start.unwrap_or_else(|| Local::now().date_naive());
    let recipe_ids = document.recipe_ids();

    let plan = match input.seed {
        Some(seed) => mealplanner_mealplan::generate(
            &recipe_ids,
            input.days,
            start,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => mealplanner_mealplan::generate(&recipe_ids, input.days, start, &mut rand::rng())?,
    };

    tracing::info!(%start, days = input.days, "Meal plan generated");

    document.set_plan(&plan);

    Ok(document)
}

/// Print the updated document, or write it back to `path` when `in_place` is set
pub fn run(path: &Path, input: GenerateInput, in_place: bool) -> Result<()> {
    let document = plan(path, input)?;
    let json = serde_json::to_string_pretty(&document)?;

    if in_place {
        std::fs::write(path, json + "\n")?;
        tracing::info!(path = %path.display(), "Plan document updated");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;

    Ok(())
}
