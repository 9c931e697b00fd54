#![allow(dead_code)]

use std::path::{Path, PathBuf};

use ndarray::Array2;
use skyflat_core::frame::{ColorFrame, Frame};
use skyflat_core::io::image_io::save_color_png;

pub fn make_gray(h: usize, w: usize, fill: f32) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill))
}

pub fn make_color(h: usize, w: usize, rgb: [f32; 3]) -> ColorFrame {
    ColorFrame {
        red: make_gray(h, w, rgb[0]),
        green: make_gray(h, w, rgb[1]),
        blue: make_gray(h, w, rgb[2]),
    }
}

/// Gray frame filled with `bright`, with one dark pixel per `(row, col)`.
pub fn make_gray_with_dark_pixels(
    h: usize,
    w: usize,
    bright: f32,
    dark: &[(usize, usize)],
) -> Frame {
    let mut frame = make_gray(h, w, bright);
    for &(row, col) in dark {
        frame.data[[row, col]] = 0.0;
    }
    frame
}

/// Color frame whose pixels encode their position, for sampling checks.
pub fn make_position_color(h: usize, w: usize) -> ColorFrame {
    let mut color = ColorFrame::zeros(h, w);
    for row in 0..h {
        for col in 0..w {
            color.set_pixel(
                row,
                col,
                [(row % 256) as f32, (col % 256) as f32, ((row + col) % 256) as f32],
            );
        }
    }
    color
}

/// Save a color frame as PNG under `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, color: &ColorFrame) -> PathBuf {
    let path = dir.join(name);
    save_color_png(color, &path).expect("write test PNG");
    path
}
