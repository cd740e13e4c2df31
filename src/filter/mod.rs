pub mod options;
pub mod sobel;
pub mod pool;

pub use options::{FilterOptions, Saturation};
pub use sobel::{gradient_at, magnitude};
pub use pool::{filter, filter_with};
