mod error;
mod generate;
mod plan;
mod types;

pub use error::*;
pub use generate::*;
pub use plan::*;
pub use types::*;
