use ndarray::Array2;

use crate::consts::COLOR_CHANNEL_COUNT;

/// A single grayscale image frame.
/// Pixel values are f32 on the 8-bit scale [0.0, 255.0].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn zeros(height: usize, width: usize) -> Self {
        Self::new(Array2::zeros((height, width)))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }
}

/// Color image composed of separate channel frames, all of the same shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            red: Frame::zeros(height, width),
            green: Frame::zeros(height, width),
            blue: Frame::zeros(height, width),
        }
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.red.dim()
    }

    /// RGB value at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> [f32; COLOR_CHANNEL_COUNT] {
        [
            self.red.data[[row, col]],
            self.green.data[[row, col]],
            self.blue.data[[row, col]],
        ]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [f32; COLOR_CHANNEL_COUNT]) {
        self.red.data[[row, col]] = rgb[0];
        self.green.data[[row, col]] = rgb[1];
        self.blue.data[[row, col]] = rgb[2];
    }
}
