pub mod interpolate;

pub use interpolate::{blend, linear_gradient};
