mod common;

use common::synthetic::{border, grid_from_fn, noise, point_source, uniform, vertical_step};
use rstest::rstest;
use sobel_edge::{filter, filter_with, FilterOptions, IntensityGrid, Saturation};

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(2, 2)]
#[case(2, 50)]
#[case(50, 2)]
#[case(1, 9)]
fn grids_without_interior_are_all_zero(#[case] width: usize, #[case] height: usize) {
    let input = noise(width, height, 7);
    let out = filter(&input);
    assert_eq!((out.width(), out.height()), (width, height));
    assert!(out.as_raw().iter().all(|&v| v == 0));
}

#[rstest]
#[case(0)]
#[case(17)]
#[case(255)]
fn uniform_input_has_no_edges(#[case] value: u8) {
    let out = filter(&uniform(31, 19, value));
    assert!(out.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn border_is_always_zero() {
    let (w, h) = (40, 27);
    let out = filter(&noise(w, h, 42));
    for (x, y) in border(w, h) {
        assert_eq!(out.get(x, y), 0, "border ({x}, {y})");
    }
}

#[test]
fn vertical_step_lights_up_only_adjacent_columns() {
    let (w, h, step) = (16, 10, 8);
    let out = filter(&vertical_step(w, h, step));
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let expected = if x == step - 1 || x == step { 255 } else { 0 };
            assert_eq!(out.get(x, y), expected, "at ({x}, {y})");
        }
    }
}

#[rstest]
#[case(Saturation::Clamp, 255, 255)]
#[case(Saturation::Wrap, 254, 104)]
fn point_source_in_five_by_five(
    #[case] saturation: Saturation,
    #[case] orthogonal: u8,
    #[case] diagonal: u8,
) {
    let input = point_source(5, 5, 2, 2);
    let out = filter_with(&input, &FilterOptions::default().with_saturation(saturation));

    // Orthogonal neighbours see the 255 with weight 2 (magnitude 510);
    // diagonal ones see it in both kernels (magnitude 255·√2 ≈ 360.6).
    for (x, y) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
        assert_eq!(out.get(x, y), orthogonal, "orthogonal ({x}, {y})");
    }
    for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
        assert_eq!(out.get(x, y), diagonal, "diagonal ({x}, {y})");
    }
    assert_eq!(out.get(2, 2), 0);
    for (x, y) in border(5, 5) {
        assert_eq!(out.get(x, y), 0);
    }
}

#[test]
fn dim_point_source_is_not_saturated() {
    let input = grid_from_fn(5, 5, |x, y| if (x, y) == (2, 2) { 100 } else { 0 });
    let out = filter(&input);
    assert_eq!(out.get(1, 2), 200);
    assert_eq!(out.get(1, 1), 141); // 100·√2 = 141.42
}

#[rstest]
fn worker_count_and_run_length_do_not_change_output(
    #[values(1, 2, 3, 8)] workers: usize,
    #[values(0, 1, 7)] run_length: usize,
) {
    let input = noise(53, 41, 1234);
    let reference = filter_with(&input, &FilterOptions::default().with_workers(1).with_run_length(1));
    let out = filter_with(
        &input,
        &FilterOptions::default().with_workers(workers).with_run_length(run_length),
    );
    assert_eq!(out, reference);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let input = noise(64, 48, 99);
    let first = filter(&input);
    for _ in 0..5 {
        assert_eq!(filter(&input), first);
    }
}

#[test]
fn input_is_left_untouched() {
    let input = noise(20, 20, 5);
    let copy = input.clone();
    let _ = filter(&input);
    assert_eq!(input, copy);
}

#[test]
fn filtering_twice_is_not_idempotent() {
    let once = filter(&vertical_step(12, 12, 6));
    let twice = filter(&once);
    assert_ne!(once, twice);
}

#[test]
fn more_workers_than_items() {
    let input: IntensityGrid = noise(4, 4, 3);
    let out = filter_with(&input, &FilterOptions::default().with_workers(64));
    assert_eq!(out, filter_with(&input, &FilterOptions::default().with_workers(1)));
}
