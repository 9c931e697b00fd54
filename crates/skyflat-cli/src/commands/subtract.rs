use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use skyflat_core::pipeline::subtract_images;

use super::with_hint;

#[derive(Args)]
pub struct SubtractArgs {
    /// Input image file
    pub file: PathBuf,

    /// Gradient image to subtract (same dimensions as the input)
    pub gradient: PathBuf,

    /// Directory receiving output.png
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

pub fn run(args: &SubtractArgs) -> Result<()> {
    let output = subtract_images(&args.file, &args.gradient, &args.output_dir)
        .map_err(with_hint)
        .with_context(|| {
            format!(
                "Failed to subtract {} from {}",
                args.gradient.display(),
                args.file.display()
            )
        })?;

    println!("Output saved to {}", output.display());
    Ok(())
}
