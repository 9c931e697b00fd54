mod common;

use std::path::Path;

use skyflat_core::background::{GradientAnchors, SearchParams};
use skyflat_core::color::process_color;
use skyflat_core::consts::{DIFFERENCE_OUTPUT_NAME, GRADIENT_OUTPUT_NAME};
use skyflat_core::difference::abs_difference;
use skyflat_core::error::{InputRole, SampleLocation, SkyflatError};
use skyflat_core::frame::{ColorFrame, Frame};
use skyflat_core::gradient::linear_gradient;
use skyflat_core::io::image_io::{load_color_image, quantize};
use skyflat_core::pipeline::{flatten, linear_gradient_generation, subtract_images};

use common::{make_color, write_png};

const H: usize = 20;
const W: usize = 60;

/// Dim sky with a left-to-right color ramp, a saturated first column and a
/// bright star on the top row of the one-third column.
fn sky_frame() -> ColorFrame {
    let mut color = ColorFrame::zeros(H, W);
    for row in 0..H {
        for col in 0..W {
            color.set_pixel(row, col, [col as f32 * 2.0, 50.0, 100.0 - col as f32]);
        }
        color.set_pixel(row, 0, [255.0; 3]);
    }
    color.set_pixel(0, W / 3, [255.0; 3]);
    color
}

fn quantized(color: &ColorFrame) -> ColorFrame {
    process_color(color, |f| Frame::new(f.data.mapv(quantize)))
}

#[test]
fn test_gradient_generation_writes_expected_gradient() {
    let dir = tempfile::tempdir().unwrap();
    let sky = sky_frame();
    let input = write_png(dir.path(), "sky.png", &sky);

    let report =
        linear_gradient_generation(&input, &SearchParams::for_gradient(), dir.path()).unwrap();

    assert_eq!(report.gradient_path, dir.path().join(GRADIENT_OUTPUT_NAME));
    assert_eq!((report.height, report.width), (H, W));
    assert_eq!(
        report.anchors,
        GradientAnchors {
            left_x: 1,
            one_third_x: 20,
            one_third_y: 1,
            two_thirds_x: 40,
            two_thirds_y: 0,
            right_x: 59,
        }
    );

    let expected = quantized(&linear_gradient(&sky, &report.anchors).unwrap());
    let written = load_color_image(&report.gradient_path).unwrap();
    assert_eq!(written, expected);
    // Column 0 lies left of the left anchor.
    assert_eq!(written.pixel(3, 0), [0.0; 3]);
}

#[test]
fn test_gradient_generation_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "sky.png", &sky_frame());
    let params = SearchParams::for_gradient();

    let first_dir = dir.path().join("a");
    let second_dir = dir.path().join("b");
    std::fs::create_dir_all(&first_dir).unwrap();
    std::fs::create_dir_all(&second_dir).unwrap();

    let first = linear_gradient_generation(&input, &params, &first_dir).unwrap();
    let second = linear_gradient_generation(&input, &params, &second_dir).unwrap();
    assert_eq!(
        std::fs::read(first.gradient_path).unwrap(),
        std::fs::read(second.gradient_path).unwrap()
    );
}

#[test]
fn test_gradient_generation_fails_without_background() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "bright.png", &make_color(H, W, [250.0; 3]));

    let err =
        linear_gradient_generation(&input, &SearchParams::for_gradient(), dir.path()).unwrap_err();
    assert!(matches!(
        err,
        SkyflatError::NoBackgroundPoint {
            location: SampleLocation::LeftEdge
        }
    ));
    assert_eq!(
        err.user_hint(),
        "No background found near the image edges, select another image"
    );
    assert!(!dir.path().join(GRADIENT_OUTPUT_NAME).exists());
}

#[test]
fn test_gradient_generation_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = linear_gradient_generation(
        &dir.path().join("missing.png"),
        &SearchParams::for_gradient(),
        dir.path(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SkyflatError::ImageLoad {
            role: InputRole::Image,
            ..
        }
    ));
    assert_eq!(err.user_hint(), "Select an image");
}

#[test]
fn test_subtract_images_writes_abs_difference() {
    let dir = tempfile::tempdir().unwrap();
    let image = make_color(4, 6, [30.0, 200.0, 90.0]);
    let gradient = make_color(4, 6, [50.0, 100.0, 90.0]);
    let image_path = write_png(dir.path(), "image.png", &image);
    let gradient_path = write_png(dir.path(), "gradient.png", &gradient);

    let output = subtract_images(&image_path, &gradient_path, dir.path()).unwrap();
    assert_eq!(output, dir.path().join(DIFFERENCE_OUTPUT_NAME));

    let result = load_color_image(&output).unwrap();
    assert_eq!(result, make_color(4, 6, [20.0, 100.0, 0.0]));
}

#[test]
fn test_subtract_images_shape_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = write_png(dir.path(), "image.png", &make_color(4, 6, [0.0; 3]));
    let gradient_path = write_png(dir.path(), "gradient.png", &make_color(6, 4, [0.0; 3]));

    let err = subtract_images(&image_path, &gradient_path, dir.path()).unwrap_err();
    assert!(matches!(err, SkyflatError::ShapeMismatch { .. }));
    assert_eq!(
        err.user_hint(),
        "Select an image and its corresponding gradient"
    );
    assert!(!dir.path().join(DIFFERENCE_OUTPUT_NAME).exists());
}

#[test]
fn test_subtract_images_missing_gradient() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = write_png(dir.path(), "image.png", &make_color(4, 6, [0.0; 3]));
    let err = subtract_images(&image_path, Path::new("/nonexistent/gradient.png"), dir.path())
        .unwrap_err();
    assert!(matches!(
        err,
        SkyflatError::ImageLoad {
            role: InputRole::ImagePair,
            ..
        }
    ));
    assert_eq!(
        err.user_hint(),
        "Select an image and its corresponding gradient"
    );
}

#[test]
fn test_subtract_images_missing_image() {
    let dir = tempfile::tempdir().unwrap();
    let gradient_path = write_png(dir.path(), "gradient.png", &make_color(4, 6, [0.0; 3]));
    let err = subtract_images(&dir.path().join("missing.png"), &gradient_path, dir.path())
        .unwrap_err();
    assert_eq!(
        err.user_hint(),
        "Select an image and its corresponding gradient"
    );
    assert!(!dir.path().join(DIFFERENCE_OUTPUT_NAME).exists());
}

#[test]
fn test_flatten_writes_gradient_and_difference() {
    let dir = tempfile::tempdir().unwrap();
    let sky = sky_frame();
    let input = write_png(dir.path(), "sky.png", &sky);

    let report = flatten(&input, &SearchParams::for_gradient(), dir.path()).unwrap();
    assert!(report.gradient.gradient_path.exists());
    assert_eq!(report.output_path, dir.path().join(DIFFERENCE_OUTPUT_NAME));

    let gradient = load_color_image(&report.gradient.gradient_path).unwrap();
    let expected = abs_difference(&sky, &gradient).unwrap();
    let flattened = load_color_image(&report.output_path).unwrap();
    assert_eq!(flattened, expected);

    // Interior of the ramp flattens to near zero.
    let px = flattened.pixel(10, 30);
    assert!(px.iter().all(|&v| v <= 2.0), "got {px:?}");
}
