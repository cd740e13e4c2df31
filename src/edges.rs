use image::DynamicImage;

use crate::filter::{filter_with, FilterOptions};
use crate::grayscale::reduce;
use crate::grid::IntensityGrid;

/// Grayscale reduction followed by the parallel Sobel filter.
///
/// The returned grid has the image's dimensions; it is empty when either
/// dimension is 0 and all-zero when either is 2 or less.
pub fn detect_edges(image: &DynamicImage, options: &FilterOptions) -> IntensityGrid {
    let gray = reduce(image);
    filter_with(&gray, options)
}
