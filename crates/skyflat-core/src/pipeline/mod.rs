pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{flatten, linear_gradient_generation, subtract_images};
pub use types::{FlattenReport, GradientReport};
