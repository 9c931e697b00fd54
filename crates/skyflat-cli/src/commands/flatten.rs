use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use skyflat_core::pipeline::config::SkyflatConfig;
use skyflat_core::pipeline::flatten;

use super::{with_hint, SearchOptions};
use crate::summary::{print_anchors, print_run_header};

#[derive(Args)]
pub struct FlattenArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub options: SearchOptions,

    /// Directory receiving the output images
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: &FlattenArgs) -> Result<()> {
    let mut config = args.options.resolve(SkyflatConfig::default())?;
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    print_run_header("Flatten", &args.file, &config);

    let report = flatten(&args.file, &config.search(), &config.output_dir)
        .map_err(with_hint)
        .with_context(|| format!("Flattening failed for {}", args.file.display()))?;

    print_anchors(&report.gradient.anchors);
    println!();
    println!("Gradient saved to {}", report.gradient.gradient_path.display());
    println!("Output saved to {}", report.output_path.display());
    Ok(())
}
