pub mod intensity_grid;

pub use intensity_grid::{GridError, IntensityGrid};
