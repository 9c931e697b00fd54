use crate::consts::{DEFAULT_SEARCH_COLUMNS, DEFAULT_THRESHOLD, GRADIENT_SEARCH_COLUMNS};

/// Parameters for the background sample-point search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParams {
    /// Grayscale pixels at or below this value count as background.
    pub threshold: f32,
    /// Number of columns scanned inward from each edge.
    pub num_columns: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            num_columns: DEFAULT_SEARCH_COLUMNS,
        }
    }
}

impl SearchParams {
    /// Parameters used by gradient generation (narrower edge window).
    pub fn for_gradient() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            num_columns: GRADIENT_SEARCH_COLUMNS,
        }
    }
}
