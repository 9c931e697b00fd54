use std::path::PathBuf;

use crate::background::GradientAnchors;

/// Outcome of a gradient generation run.
#[derive(Clone, Debug)]
pub struct GradientReport {
    pub anchors: GradientAnchors,
    pub width: usize,
    pub height: usize,
    pub gradient_path: PathBuf,
}

/// Outcome of a flatten run (gradient generation followed by subtraction).
#[derive(Clone, Debug)]
pub struct FlattenReport {
    pub gradient: GradientReport,
    pub output_path: PathBuf,
}
