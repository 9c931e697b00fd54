use std::path::{Path, PathBuf};

use tracing::info;

use crate::background::{search_points, SearchParams};
use crate::consts::{DIFFERENCE_OUTPUT_NAME, GRADIENT_OUTPUT_NAME};
use crate::difference::abs_difference;
use crate::error::{Result, SkyflatError};
use crate::gradient::linear_gradient;
use crate::io::image_io::{load_color_and_gray, load_color_image, save_color_png};

use super::types::{FlattenReport, GradientReport};

/// Subtract `gradient_path` from `image_path` (absolute difference) and save
/// the result as `output.png` inside `output_dir`.
pub fn subtract_images(
    image_path: &Path,
    gradient_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let image = load_color_image(image_path).map_err(SkyflatError::in_image_pair)?;
    let gradient = load_color_image(gradient_path).map_err(SkyflatError::in_image_pair)?;
    let result = abs_difference(&image, &gradient)?;

    let output_path = output_dir.join(DIFFERENCE_OUTPUT_NAME);
    save_color_png(&result, &output_path)?;
    info!(output = %output_path.display(), "Difference image saved");
    Ok(output_path)
}

/// Generate a linear gradient for `image_path` and save it as
/// `output_gradient.png` inside `output_dir`.
pub fn linear_gradient_generation(
    image_path: &Path,
    params: &SearchParams,
    output_dir: &Path,
) -> Result<GradientReport> {
    let (color, gray) = load_color_and_gray(image_path)?;
    let (height, width) = color.dim();
    info!(width, height, input = %image_path.display(), "Generating linear gradient");

    let points = search_points(&gray, params);
    let anchors = points.anchors(width)?;
    let gradient = linear_gradient(&color, &anchors)?;

    let gradient_path = output_dir.join(GRADIENT_OUTPUT_NAME);
    save_color_png(&gradient, &gradient_path)?;
    info!(output = %gradient_path.display(), "Gradient saved");

    Ok(GradientReport {
        anchors,
        width,
        height,
        gradient_path,
    })
}

/// Generate a gradient for `image_path`, then subtract it from the image.
///
/// The gradient is read back from the saved PNG before subtracting.
pub fn flatten(
    image_path: &Path,
    params: &SearchParams,
    output_dir: &Path,
) -> Result<FlattenReport> {
    let gradient = linear_gradient_generation(image_path, params, output_dir)?;
    let output_path = subtract_images(image_path, &gradient.gradient_path, output_dir)?;
    Ok(FlattenReport {
        gradient,
        output_path,
    })
}
