use tracing::info;

use crate::background::GradientAnchors;
use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, SkyflatError};
use crate::frame::ColorFrame;

type Rgb = [f32; COLOR_CHANNEL_COUNT];

/// Linear blend `(1 - ratio) * from + ratio * to`, per channel.
pub fn blend(from: Rgb, to: Rgb, ratio: f64) -> Rgb {
    let mut out = [0.0f32; COLOR_CHANNEL_COUNT];
    for (c, value) in out.iter_mut().enumerate() {
        *value = ((1.0 - ratio) * from[c] as f64 + ratio * to[c] as f64) as f32;
    }
    out
}

/// Fill columns `start..start + steps` (or through `start + steps` when
/// `closed`) with a blend from `from` to `to`, identical on every row.
///
/// Ratios are `i / steps`. An open segment never reaches `to`; a closed one
/// ends on it exactly.
fn fill_segment(
    out: &mut ColorFrame,
    start: usize,
    steps: usize,
    from: Rgb,
    to: Rgb,
    closed: bool,
) {
    let count = if closed { steps + 1 } else { steps };
    for i in 0..count {
        let rgb = blend(from, to, i as f64 / steps as f64);
        let col = start + i;
        for row in 0..out.height() {
            out.set_pixel(row, col, rgb);
        }
    }
}

/// Synthesize a horizontal piecewise-linear gradient from four sampled colors.
///
/// Colors are taken at `(0, left_x)`, `(one_third_y, one_third_x)`,
/// `(two_thirds_y, two_thirds_x)` and `(0, right_x)`. Three segments are
/// filled: `[left_x, one_third_x)`, `[one_third_x, two_thirds_x)` and
/// `[two_thirds_x, right_x]`; only the last includes its end color.
/// Columns left of `left_x` and right of `right_x` stay black.
pub fn linear_gradient(color: &ColorFrame, anchors: &GradientAnchors) -> Result<ColorFrame> {
    let (h, w) = color.dim();
    let a = anchors.validated(w)?;
    for (row, col) in [
        (0, a.left_x),
        (a.one_third_y, a.one_third_x),
        (a.two_thirds_y, a.two_thirds_x),
    ] {
        if row >= h {
            return Err(SkyflatError::SampleOutOfBounds {
                row,
                col,
                height: h,
                width: w,
            });
        }
    }

    let c_left = color.pixel(0, a.left_x);
    let c_one_third = color.pixel(a.one_third_y, a.one_third_x);
    let c_two_thirds = color.pixel(a.two_thirds_y, a.two_thirds_x);
    let c_right = color.pixel(0, a.right_x);

    let mut out = ColorFrame::zeros(h, w);
    fill_segment(
        &mut out,
        a.left_x,
        a.one_third_x - a.left_x,
        c_left,
        c_one_third,
        false,
    );
    fill_segment(
        &mut out,
        a.one_third_x,
        a.two_thirds_x - a.one_third_x,
        c_one_third,
        c_two_thirds,
        false,
    );
    fill_segment(
        &mut out,
        a.two_thirds_x,
        a.right_x - a.two_thirds_x,
        c_two_thirds,
        c_right,
        true,
    );

    info!(
        width = w,
        height = h,
        left_x = a.left_x,
        right_x = a.right_x,
        "Linear gradient synthesized"
    );
    Ok(out)
}
