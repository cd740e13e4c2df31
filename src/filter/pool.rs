use std::thread;
use std::time::Instant;

use crossbeam::channel::bounded;
use log::debug;

use crate::filter::options::{FilterOptions, Saturation};
use crate::filter::sobel::{gradient_at, magnitude};
use crate::grid::IntensityGrid;

/// A run of interior pixels in one row together with the output cells it owns.
///
/// `cells[i]` is the output sample for `(x0 + i, y)`. Work items are carved
/// from the output buffer with `chunks_mut`, so no two items alias.
struct WorkItem<'a> {
    y: usize,
    x0: usize,
    cells: &'a mut [u8],
}

impl WorkItem<'_> {
    fn compute(self, input: &IntensityGrid, saturation: Saturation) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let (gx, gy) = gradient_at(input, self.x0 + i, self.y);
            *cell = saturation.narrow(magnitude(gx, gy));
        }
    }
}

/// Applies the Sobel operator with default options.
pub fn filter(input: &IntensityGrid) -> IntensityGrid {
    filter_with(input, &FilterOptions::default())
}

/// Applies the Sobel operator over every interior pixel of `input`.
///
/// The output has the same dimensions; border samples are 0. Interior rows
/// are split into work items and pushed through a bounded queue to a pool of
/// `options.worker_count()` scoped threads. The call returns once every
/// worker has drained the queue and been joined.
pub fn filter_with(input: &IntensityGrid, options: &FilterOptions) -> IntensityGrid {
    let (width, height) = (input.width(), input.height());
    let mut output = IntensityGrid::new(width, height);
    if input.interior_count() == 0 {
        return output;
    }

    let workers    = options.worker_count();
    let run_length = options.run_length_for(width);
    let saturation = options.saturation;
    let started    = Instant::now();

    // Rows are carved up front so every work item borrows for the whole scope.
    let rows = output.as_raw_mut().chunks_mut(width);
    thread::scope(|scope| {
        let (tx, rx) = bounded::<WorkItem<'_>>(workers);

        for _ in 0..workers {
            let rx = rx.clone();
            scope.spawn(move || {
                for item in rx.iter() {
                    item.compute(input, saturation);
                }
            });
        }
        drop(rx);

        'rows: for (y, row) in rows.enumerate().take(height - 1).skip(1) {
            let interior = &mut row[1..width - 1];
            for (i, cells) in interior.chunks_mut(run_length).enumerate() {
                let item = WorkItem { y, x0: 1 + i * run_length, cells };
                // Fails only once every worker is gone, i.e. after a panic
                // that the scope will re-raise.
                if tx.send(item).is_err() {
                    break 'rows;
                }
            }
        }
        // Closing the queue lets workers exit once it is drained.
        drop(tx);
    });

    debug!(
        "sobel {}x{}: {} workers, run length {}, {:?}",
        width,
        height,
        workers,
        run_length,
        started.elapsed()
    );
    output
}
