use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array2;
use tracing::debug;

use crate::color::{luminance, process_color};
use crate::consts::MAX_SAMPLE_VALUE;
use crate::error::{InputRole, Result, SkyflatError};
use crate::frame::{ColorFrame, Frame};

/// Round to the nearest 8-bit level and saturate to [0, 255].
pub fn quantize(value: f32) -> f32 {
    value.round().clamp(0.0, MAX_SAMPLE_VALUE)
}

/// Load an image file as an 8-bit RGB color frame.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path).map_err(|source| SkyflatError::ImageLoad {
        path: path.to_path_buf(),
        role: InputRole::Image,
        source,
    })?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();

    let mut red = Array2::<f32>::zeros((h as usize, w as usize));
    let mut green = Array2::<f32>::zeros((h as usize, w as usize));
    let mut blue = Array2::<f32>::zeros((h as usize, w as usize));

    for (col, row, pixel) in rgb.enumerate_pixels() {
        let (row, col) = (row as usize, col as usize);
        red[[row, col]] = pixel.0[0] as f32;
        green[[row, col]] = pixel.0[1] as f32;
        blue[[row, col]] = pixel.0[2] as f32;
    }

    debug!(path = %path.display(), width = w, height = h, "Loaded color image");

    Ok(ColorFrame {
        red: Frame::new(red),
        green: Frame::new(green),
        blue: Frame::new(blue),
    })
}

/// Load an image file as both color and grayscale frames.
///
/// The grayscale frame is derived from the same decoded RGB buffer, so the
/// two always agree on shape and channel order.
pub fn load_color_and_gray(path: &Path) -> Result<(ColorFrame, Frame)> {
    let color = load_color_image(path)?;
    let gray = luminance(&color);
    Ok((color, gray))
}

/// Load a grayscale image file into a Frame.
pub fn load_gray_image(path: &Path) -> Result<Frame> {
    Ok(luminance(&load_color_image(path)?))
}

/// Save a ColorFrame as 8-bit RGB PNG.
pub fn save_color_png(color: &ColorFrame, path: &Path) -> Result<()> {
    let (h, w) = color.dim();
    let quantized = process_color(color, |f| Frame::new(f.data.mapv(quantize)));

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let [r, g, b] = quantized.pixel(row, col);
            img.put_pixel(col as u32, row as u32, Rgb([r as u8, g as u8, b as u8]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| SkyflatError::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), width = w, height = h, "Saved color PNG");
    Ok(())
}
