use ndarray::Zip;

use crate::color::zip_color;
use crate::error::{Result, SkyflatError};
use crate::frame::{ColorFrame, Frame};

/// Absolute per-pixel, per-channel difference `|a - b|` of two color frames.
pub fn abs_difference(a: &ColorFrame, b: &ColorFrame) -> Result<ColorFrame> {
    check_shapes(a.dim(), b.dim())?;
    Ok(zip_color(a, b, abs_diff_unchecked))
}

fn check_shapes(expected: (usize, usize), found: (usize, usize)) -> Result<()> {
    if expected != found {
        return Err(SkyflatError::ShapeMismatch { expected, found });
    }
    Ok(())
}

fn abs_diff_unchecked(a: &Frame, b: &Frame) -> Frame {
    let data = Zip::from(&a.data)
        .and(&b.data)
        .map_collect(|&x, &y| (x - y).abs());
    Frame::new(data)
}
