use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use skyflat_core::background::search_points;
use skyflat_core::consts::DEFAULT_SEARCH_COLUMNS;
use skyflat_core::io::image_io::load_gray_image;
use skyflat_core::pipeline::config::SkyflatConfig;

use super::SearchOptions;
use crate::summary::print_sample_points;

#[derive(Args)]
pub struct PointsArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub options: SearchOptions,
}

/// Defaults for the standalone search: the wide edge window.
pub fn points_defaults() -> SkyflatConfig {
    SkyflatConfig {
        num_columns: DEFAULT_SEARCH_COLUMNS,
        ..SkyflatConfig::default()
    }
}

pub fn run(args: &PointsArgs) -> Result<()> {
    let params = args.options.resolve(points_defaults())?.search();
    let gray = load_gray_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {}x{} image", gray.width(), gray.height());

    let points = search_points(&gray, &params);
    print_sample_points(&points, &params);

    if let Err(e) = points.anchors(gray.width()) {
        println!("\n{}: {}", e, e.user_hint());
    }
    Ok(())
}
