use rand::{rngs::StdRng, Rng, SeedableRng};
use sobel_edge::IntensityGrid;

/// Builds a grid by evaluating `f` at every coordinate.
pub fn grid_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> IntensityGrid {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| f(x, y))
        .collect();
    IntensityGrid::from_raw(width, height, data).unwrap()
}

pub fn uniform(width: usize, height: usize, value: u8) -> IntensityGrid {
    grid_from_fn(width, height, |_, _| value)
}

/// Left columns `0..step` are 0, the rest 255.
pub fn vertical_step(width: usize, height: usize, step: usize) -> IntensityGrid {
    grid_from_fn(width, height, |x, _| if x < step { 0 } else { 255 })
}

/// All zeros except a single 255 at `(cx, cy)`.
pub fn point_source(width: usize, height: usize, cx: usize, cy: usize) -> IntensityGrid {
    grid_from_fn(width, height, |x, y| if (x, y) == (cx, cy) { 255 } else { 0 })
}

/// Reproducible noise.
pub fn noise(width: usize, height: usize, seed: u64) -> IntensityGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen()).collect();
    IntensityGrid::from_raw(width, height, data).unwrap()
}

/// Yields every border coordinate of a `width × height` grid.
pub fn border(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height)
        .flat_map(move |y| (0..width).map(move |x| (x, y)))
        .filter(move |&(x, y)| x == 0 || y == 0 || x + 1 == width || y + 1 == height)
}
