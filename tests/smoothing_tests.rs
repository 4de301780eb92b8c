use approx::assert_relative_eq;
use tracegraph::core::{Element, LinearAxes, PlotRect, ScreenPoint, Smoothing};

fn axes(extent: f64) -> LinearAxes {
    let rect = PlotRect::new(0.0, 0.0, extent, extent).expect("rect");
    LinearAxes::new((0.0, extent), (0.0, extent), rect).expect("axes")
}

fn screen_points(element: &Element) -> Vec<ScreenPoint> {
    element.traces()[0]
        .iter(element.point_arena())
        .map(|(_, point)| point.pos)
        .collect()
}

#[test]
fn step_inserts_one_corner_per_pair() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 2.0, 4.0], vec![0.0, 4.0, 2.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Step);
    element.remap(&axes(10.0)).expect("remap");

    let points = screen_points(&element);
    assert_eq!(points.len(), 5);
    // Corners sit at (q.x, p.y) in screen space.
    assert_relative_eq!(points[1].x, 2.0);
    assert_relative_eq!(points[1].y, 10.0);
    assert_relative_eq!(points[3].x, 4.0);
    assert_relative_eq!(points[3].y, 6.0);
}

#[test]
fn step_corner_swaps_under_inverted_axes() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 2.0], vec![0.0, 4.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Step);
    let inverted = axes(10.0).with_inverted(true);
    element.remap(&inverted).expect("remap");

    let points = screen_points(&element);
    assert_eq!(points.len(), 3);
    // Under inversion the corner takes (p.x, q.y) instead.
    assert_relative_eq!(points[1].x, points[0].x);
    assert_relative_eq!(points[1].y, points[2].y);
}

#[test]
fn natural_spline_samples_one_point_per_pixel_column() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 2.0, 4.0, 6.0], vec![5.0, 5.0, 5.0, 5.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Natural);
    element.remap(&axes(10.0)).expect("remap");

    // Knot columns 0, 2, 4, 6: one sample per integer pixel strictly
    // between each adjacent pair (columns 1, 3, 5).
    let points = screen_points(&element);
    assert_eq!(points.len(), 7);

    let knot_indices: Vec<usize> = element.traces()[0]
        .iter(element.point_arena())
        .enumerate()
        .filter(|(_, (_, point))| point.flags.knot)
        .map(|(list_index, _)| list_index)
        .collect();
    assert_eq!(knot_indices, vec![0, 2, 4, 6]);
}

#[test]
fn natural_spline_requires_more_than_three_points() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 2.0, 4.0], vec![5.0, 5.0, 5.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Natural);
    element.remap(&axes(10.0)).expect("remap");
    assert_eq!(element.traces()[0].num_points, 3);
}

#[test]
fn natural_spline_aborts_on_non_monotonic_x() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 4.0, 2.0, 6.0], vec![5.0, 5.0, 5.0, 5.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Natural);
    element.remap(&axes(10.0)).expect("remap");

    // Precondition not met: the trace is left completely unmodified.
    assert_eq!(element.traces()[0].num_points, 4);
    for (_, point) in element.traces()[0].iter(element.point_arena()) {
        assert!(point.flags.knot);
    }
}

#[test]
fn parametric_spline_walks_in_two_pixel_steps() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 4.0, 8.0, 12.0], vec![10.0, 10.0, 10.0, 10.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Parametric);
    element.remap(&axes(20.0)).expect("remap");

    // Segments are 4 screen units long; a 2-unit parameter walk lands one
    // interpolated point mid-segment.
    let points = screen_points(&element);
    assert_eq!(points.len(), 7);
    assert_relative_eq!(points[1].x, 2.0, epsilon = 1e-6);
    assert_relative_eq!(points[1].y, 10.0, epsilon = 1e-6);
}

#[test]
fn parametric_spline_fails_soft_on_repeated_points() {
    let mut element = Element::new();
    // Zero-length middle segment: cumulative arc length is not strictly
    // increasing, so no spline can be built.
    element
        .set_data(vec![0.0, 4.0, 4.0, 8.0], vec![2.0, 2.0, 2.0, 2.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Parametric);
    element.remap(&axes(20.0)).expect("remap");
    assert_eq!(element.traces()[0].num_points, 4);
}

#[test]
fn catmull_rom_inserts_midpoints_on_uniform_collinear_data() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 4.0, 8.0, 12.0], vec![10.0, 10.0, 10.0, 10.0])
        .expect("set data");
    element.set_smoothing(Smoothing::CatmullRom);
    element.remap(&axes(20.0)).expect("remap");

    let points = screen_points(&element);
    assert_eq!(points.len(), 7);
    // Interior segments have full neighborhoods, so the curve reproduces the
    // straight line and the sample falls mid-segment. Boundary segments use
    // duplicated phantom neighbors and bend toward the endpoints.
    assert_relative_eq!(points[3].x, 6.0, epsilon = 1e-6);
    assert_relative_eq!(points[3].y, 10.0, epsilon = 1e-6);
    assert!(points[1].x > 0.0 && points[1].x < 4.0);
}

#[test]
fn generated_points_inherit_the_interval_start_index() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 2.0, 4.0], vec![0.0, 4.0, 2.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Step);
    element.remap(&axes(10.0)).expect("remap");

    let indices: Vec<(usize, bool)> = element.traces()[0]
        .iter(element.point_arena())
        .map(|(_, point)| (point.data_index, point.flags.knot))
        .collect();
    assert_eq!(
        indices,
        vec![(0, true), (0, false), (1, true), (1, false), (2, true)]
    );
}

#[test]
fn smoothing_skips_symbols_only_traces() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 2.0, 4.0], vec![0.0, 4.0, 2.0])
        .expect("set data");
    element.set_smoothing(Smoothing::Step);
    let symbols_only = tracegraph::core::Pen {
        line_width: 0.0,
        ..Default::default()
    };
    element
        .pen_table_mut()
        .add_pen("default", symbols_only)
        .expect("pen");
    element.remap(&axes(10.0)).expect("remap");
    assert_eq!(element.traces()[0].num_points, 3);
}
