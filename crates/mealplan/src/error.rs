#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("no recipes available to plan")]
    NoRecipes,

    #[error("cannot plan {0} days")]
    InvalidDays(u32),
}
