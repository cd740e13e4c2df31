use crate::grid::IntensityGrid;

/// Horizontal and vertical Sobel responses at an interior coordinate.
///
/// ```text
///        Gx              Gy
///   +1  0  -1       +1  +2  +1
///   +2  0  -2        0   0   0
///   +1  0  -1       -1  -2  -1
/// ```
///
/// Callers must pass an interior coordinate (see `IntensityGrid::is_interior`).
#[inline]
pub fn gradient_at(grid: &IntensityGrid, x: usize, y: usize) -> (i32, i32) {
    let top = grid.row(y - 1);
    let mid = grid.row(y);
    let bot = grid.row(y + 1);
    let (l, c, r) = (x - 1, x, x + 1);

    let gx = top[l] as i32 - top[r] as i32
        + 2 * mid[l] as i32 - 2 * mid[r] as i32
        + bot[l] as i32 - bot[r] as i32;

    let gy = top[l] as i32 + 2 * top[c] as i32 + top[r] as i32
        - bot[l] as i32 - 2 * bot[c] as i32 - bot[r] as i32;

    (gx, gy)
}

/// Euclidean norm of the gradient.
#[inline]
pub fn magnitude(gx: i32, gy: i32) -> f64 {
    let (gx, gy) = (gx as f64, gy as f64);
    (gx * gx + gy * gy).sqrt()
}
