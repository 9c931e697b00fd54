/// Default brightness cutoff: a grayscale pixel at or below it is background.
pub const DEFAULT_THRESHOLD: f32 = 128.0;

/// Default number of columns scanned from each edge by the standalone locator.
pub const DEFAULT_SEARCH_COLUMNS: usize = 70;

/// Number of edge columns scanned when generating a gradient.
///
/// Narrower than [`DEFAULT_SEARCH_COLUMNS`].
pub const GRADIENT_SEARCH_COLUMNS: usize = 18;

/// File name of the differenced image.
pub const DIFFERENCE_OUTPUT_NAME: &str = "output.png";

/// File name of the synthesized gradient.
pub const GRADIENT_OUTPUT_NAME: &str = "output_gradient.png";

/// Largest sample value of an 8-bit channel.
pub const MAX_SAMPLE_VALUE: f32 = 255.0;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;
