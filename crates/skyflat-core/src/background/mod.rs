pub mod config;
pub mod search;

pub use config::SearchParams;
pub use search::{search_points, GradientAnchors, SamplePoints};
