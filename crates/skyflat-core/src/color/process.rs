use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::frame::{ColorFrame, Frame};

/// Convert a color frame to grayscale with BT.601 weights.
///
/// Results are rounded to whole 8-bit levels so the grayscale frame matches
/// what an 8-bit grayscale decode of the same file would produce.
pub fn luminance(color: &ColorFrame) -> Frame {
    let (h, w) = color.dim();
    let mut data = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let y = LUMINANCE_R * color.red.data[[row, col]]
                + LUMINANCE_G * color.green.data[[row, col]]
                + LUMINANCE_B * color.blue.data[[row, col]];
            data[[row, col]] = y.round();
        }
    }

    Frame::new(data)
}

/// Apply a processing function to each channel of a color frame independently.
pub fn process_color<F>(color: &ColorFrame, mut process_fn: F) -> ColorFrame
where
    F: FnMut(&Frame) -> Frame,
{
    ColorFrame {
        red: process_fn(&color.red),
        green: process_fn(&color.green),
        blue: process_fn(&color.blue),
    }
}

/// Combine matching channels of two color frames.
///
/// Callers must check that both frames share a shape.
pub fn zip_color<F>(a: &ColorFrame, b: &ColorFrame, mut combine_fn: F) -> ColorFrame
where
    F: FnMut(&Frame, &Frame) -> Frame,
{
    ColorFrame {
        red: combine_fn(&a.red, &b.red),
        green: combine_fn(&a.green, &b.green),
        blue: combine_fn(&a.blue, &b.blue),
    }
}
