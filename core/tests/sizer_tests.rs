// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded sizer tests: fit arithmetic, caps, degenerate cases, memoization.

use goban_core::{fit_cell_size, BoundedSizer, SizerInput};

fn input_9x9() -> SizerInput {
    SizerInput {
        max_width: 400,
        max_height: 400,
        max_cell_size: None,
        visible_cols: 9,
        visible_rows: 9,
        show_coordinates: false,
    }
}

#[test]
fn fit_is_the_maximum_integer_size() {
    let size = fit_cell_size(&input_9x9());
    assert_eq!(size, 44);
    assert!(size * 9 <= 400);
    assert!((size + 1) * 9 > 400, "44 must be maximal");
}

#[test]
fn cap_limits_the_size_regardless_of_space() {
    let input = SizerInput {
        max_cell_size: Some(30),
        ..input_9x9()
    };
    assert_eq!(fit_cell_size(&input), 30);
}

#[test]
fn narrower_axis_wins() {
    let input = SizerInput {
        max_width: 200,
        ..input_9x9()
    };
    assert_eq!(fit_cell_size(&input), 200 / 9);
}

#[test]
fn coordinate_gutters_shrink_the_fit() {
    let input = SizerInput {
        show_coordinates: true,
        ..input_9x9()
    };
    // One gutter cell on each edge: 11 columns and rows must fit
    assert_eq!(fit_cell_size(&input), 400 / 11);
}

#[test]
fn degenerate_inputs_fail_safe_to_one() {
    let zero_cols = SizerInput {
        visible_cols: 0,
        ..input_9x9()
    };
    assert_eq!(fit_cell_size(&zero_cols), 1);

    let tiny_bounds = SizerInput {
        max_width: 3,
        max_height: 3,
        ..input_9x9()
    };
    assert_eq!(fit_cell_size(&tiny_bounds), 1);
}

#[test]
fn size_never_drops_below_one_even_with_zero_cap() {
    let input = SizerInput {
        max_cell_size: Some(0),
        ..input_9x9()
    };
    assert_eq!(fit_cell_size(&input), 1);
}

#[test]
fn memoized_fit_reports_change_only_when_size_changes() {
    let mut sizer = BoundedSizer::new();

    let first = sizer.fit(input_9x9());
    assert_eq!(first.cell_size, 44);
    assert!(first.changed, "first fit counts as a change");

    let second = sizer.fit(input_9x9());
    assert_eq!(second.cell_size, 44);
    assert!(!second.changed, "identical inputs must not re-notify");

    // Different input, same output: still no resize notification
    let jiggled = sizer.fit(SizerInput {
        max_width: 399,
        ..input_9x9()
    });
    assert_eq!(jiggled.cell_size, 44);
    assert!(!jiggled.changed);

    let shrunk = sizer.fit(SizerInput {
        max_width: 200,
        max_height: 200,
        ..input_9x9()
    });
    assert_eq!(shrunk.cell_size, 22);
    assert!(shrunk.changed);
    assert_eq!(sizer.current(), Some(22));
}
