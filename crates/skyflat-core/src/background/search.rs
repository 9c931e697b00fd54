use tracing::{debug, warn};

use crate::error::{Result, SampleLocation, SkyflatError};
use crate::frame::Frame;

use super::config::SearchParams;

/// Background sample points found by [`search_points`].
///
/// `one_third_x` and `two_thirds_x` are fixed by the image width; every
/// other coordinate is `None` when no background pixel was found.
/// The left and right points sit on row 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SamplePoints {
    pub left_x: Option<usize>,
    pub one_third_x: usize,
    pub one_third_y: Option<usize>,
    pub two_thirds_x: usize,
    pub two_thirds_y: Option<usize>,
    pub right_x: Option<usize>,
}

/// Fully resolved sample points with `left_x < one_third_x < two_thirds_x < right_x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientAnchors {
    pub left_x: usize,
    pub one_third_x: usize,
    pub one_third_y: usize,
    pub two_thirds_x: usize,
    pub two_thirds_y: usize,
    pub right_x: usize,
}

impl SamplePoints {
    /// Resolve into gradient anchors.
    ///
    /// Fails with [`SkyflatError::NoBackgroundPoint`] for the first missing
    /// coordinate (left, one-third, two-thirds, right) and with
    /// [`SkyflatError::InvalidOrdering`] when the columns are not strictly
    /// increasing.
    pub fn anchors(&self, width: usize) -> Result<GradientAnchors> {
        let missing = |location| SkyflatError::NoBackgroundPoint { location };
        let left_x = self.left_x.ok_or_else(|| missing(SampleLocation::LeftEdge))?;
        let one_third_y = self
            .one_third_y
            .ok_or_else(|| missing(SampleLocation::OneThird))?;
        let two_thirds_y = self
            .two_thirds_y
            .ok_or_else(|| missing(SampleLocation::TwoThirds))?;
        let right_x = self.right_x.ok_or_else(|| missing(SampleLocation::RightEdge))?;

        GradientAnchors {
            left_x,
            one_third_x: self.one_third_x,
            one_third_y,
            two_thirds_x: self.two_thirds_x,
            two_thirds_y,
            right_x,
        }
        .validated(width)
    }
}

impl GradientAnchors {
    /// Check the ordering invariant and that every column lies inside `width`.
    pub fn validated(self, width: usize) -> Result<Self> {
        let ordered = self.left_x < self.one_third_x
            && self.one_third_x < self.two_thirds_x
            && self.two_thirds_x < self.right_x
            && self.right_x < width;
        if !ordered {
            return Err(SkyflatError::InvalidOrdering {
                left_x: self.left_x,
                one_third_x: self.one_third_x,
                two_thirds_x: self.two_thirds_x,
                right_x: self.right_x,
                width,
            });
        }
        Ok(self)
    }
}

/// True if any row of column `col` is at or below `threshold`.
fn column_has_background(gray: &Frame, col: usize, threshold: f32) -> bool {
    gray.data.column(col).iter().any(|&v| v <= threshold)
}

/// First row (top to bottom) of column `col` at or below `threshold`.
fn first_background_row(gray: &Frame, col: usize, threshold: f32) -> Option<usize> {
    gray.data.column(col).iter().position(|&v| v <= threshold)
}

/// Locate background sample points on a grayscale frame.
///
/// The left point is the first column in `0..num_columns` holding any
/// background pixel; the right point is the first such column scanning from
/// `width - 1` down to `width - num_columns`. The one-third and two-thirds
/// columns are `width / 3` and `2 * (width / 3)`, and their rows are the
/// first background rows from the top. The scan window is clamped to the
/// frame width.
pub fn search_points(gray: &Frame, params: &SearchParams) -> SamplePoints {
    let (height, width) = gray.dim();
    let threshold = params.threshold;
    let one_third_x = width / 3;
    let two_thirds_x = 2 * (width / 3);

    if width == 0 || height == 0 {
        warn!(width, height, "Empty frame, no sample points");
        return SamplePoints {
            one_third_x,
            two_thirds_x,
            ..SamplePoints::default()
        };
    }

    let window = params.num_columns.min(width);

    let left_x = (0..window).find(|&x| column_has_background(gray, x, threshold));
    let right_x = (width - window..width)
        .rev()
        .find(|&x| column_has_background(gray, x, threshold));
    let one_third_y = first_background_row(gray, one_third_x, threshold);
    let two_thirds_y = first_background_row(gray, two_thirds_x, threshold);

    let points = SamplePoints {
        left_x,
        one_third_x,
        one_third_y,
        two_thirds_x,
        two_thirds_y,
        right_x,
    };

    if left_x.is_none() || right_x.is_none() {
        warn!(
            window,
            threshold, "No background column found within the edge window"
        );
    }
    debug!(?points, "Sample point search complete");

    points
}
