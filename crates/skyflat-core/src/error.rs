use std::path::PathBuf;

use thiserror::Error;

/// Location of a background sample point the locator scans for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleLocation {
    LeftEdge,
    OneThird,
    TwoThirds,
    RightEdge,
}

impl std::fmt::Display for SampleLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftEdge => write!(f, "left edge"),
            Self::OneThird => write!(f, "one-third column"),
            Self::TwoThirds => write!(f, "two-thirds column"),
            Self::RightEdge => write!(f, "right edge"),
        }
    }
}

/// What a loaded file was meant to be, used to pick the message shown on failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputRole {
    /// A single image, as read by gradient generation.
    Image,
    /// One of the image/gradient pair read by subtraction.
    ImagePair,
}

#[derive(Error, Debug)]
pub enum SkyflatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        role: InputRole,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image shapes differ: {expected:?} vs {found:?} (height, width)")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("No background point found at the {location}")]
    NoBackgroundPoint { location: SampleLocation },

    #[error(
        "Sample points out of order for width {width}: \
         left={left_x}, one_third={one_third_x}, two_thirds={two_thirds_x}, right={right_x}"
    )]
    InvalidOrdering {
        left_x: usize,
        one_third_x: usize,
        two_thirds_x: usize,
        right_x: usize,
        width: usize,
    },

    #[error("Sample point ({row}, {col}) lies outside the {height}x{width} frame")]
    SampleOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl SkyflatError {
    /// Message a front end shows to ask the user for different input.
    pub fn user_hint(&self) -> &'static str {
        match self {
            Self::ImageLoad {
                role: InputRole::Image,
                ..
            } => "Select an image",
            Self::ImageLoad {
                role: InputRole::ImagePair,
                ..
            }
            | Self::ShapeMismatch { .. } => "Select an image and its corresponding gradient",
            Self::NoBackgroundPoint { .. }
            | Self::InvalidOrdering { .. }
            | Self::SampleOutOfBounds { .. } => {
                "No background found near the image edges, select another image"
            }
            Self::ImageSave { .. } | Self::Io(_) => "Could not write the output image",
            Self::Config(_) => "Fix the configuration file",
        }
    }

    /// Mark a load failure as coming from the image/gradient pair.
    pub fn in_image_pair(self) -> Self {
        match self {
            Self::ImageLoad { path, source, .. } => Self::ImageLoad {
                path,
                role: InputRole::ImagePair,
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkyflatError>;
