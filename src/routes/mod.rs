use axum::{
    routing::{get, post},
    Router,
};

use crate::config::Config;

pub mod health;
pub mod meal_plan;
pub mod shopping_list;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health::health))
        .route("/shopping_list", post(shopping_list::from_plan))
        .route("/shopping_list/entries", post(shopping_list::from_entries))
        .route("/meal_plan", post(meal_plan::schedule))
        .route("/generate_plan", post(meal_plan::generate))
        .with_state(app_state)
}
