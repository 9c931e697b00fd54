pub mod process;

pub use process::{luminance, process_color, zip_color};
