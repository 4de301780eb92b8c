use tracegraph::core::{Element, LinearAxes, PenDirection, PlotRect};

fn axes() -> LinearAxes {
    let rect = PlotRect::new(0.0, 0.0, 1000.0, 1000.0).expect("rect");
    LinearAxes::new((0.0, 10.0), (0.0, 10.0), rect).expect("axes")
}

#[test]
fn empty_data_builds_zero_traces() {
    let mut element = Element::new();
    element.remap(&axes()).expect("remap");
    assert!(element.traces().is_empty());
}

#[test]
fn hole_splits_chain_into_two_traces() {
    let mut element = Element::new();
    element
        .set_data(
            vec![0.0, 1.0, f64::NAN, 3.0, 4.0],
            vec![0.0, 1.0, f64::NAN, 3.0, 4.0],
        )
        .expect("set data");
    element.remap(&axes()).expect("remap");

    let traces = element.traces();
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].num_points, 2);
    assert_eq!(traces[1].num_points, 2);

    // No trace spans the hole, and every emitted point is a knot.
    let points = element.point_arena();
    for trace in traces {
        for (_, point) in trace.iter(points) {
            assert!(point.flags.knot);
            assert!(point.flags.symbol);
        }
    }
    let second_indices: Vec<usize> = traces[1]
        .iter(points)
        .map(|(_, point)| point.data_index)
        .collect();
    assert_eq!(second_indices, vec![3, 4]);
}

#[test]
fn hole_in_one_coordinate_is_enough_to_break() {
    let mut element = Element::new();
    element
        .set_data(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, f64::INFINITY, 2.0, 3.0])
        .expect("set data");
    element.remap(&axes()).expect("remap");
    assert_eq!(element.traces().len(), 2);
    assert_eq!(element.traces()[0].num_points, 1);
    assert_eq!(element.traces()[1].num_points, 2);
}

#[test]
fn leading_hole_does_not_create_an_empty_trace() {
    let mut element = Element::new();
    element
        .set_data(vec![f64::NAN, 1.0, 2.0], vec![f64::NAN, 1.0, 2.0])
        .expect("set data");
    element.remap(&axes()).expect("remap");
    assert_eq!(element.traces().len(), 1);
    assert_eq!(element.traces()[0].num_points, 2);
}

#[test]
fn retrace_break_when_direction_constraint_is_violated() {
    let mut element = Element::new();
    // X goes forward, backward, forward again.
    element
        .set_data(vec![1.0, 4.0, 2.0, 5.0], vec![1.0, 2.0, 3.0, 4.0])
        .expect("set data");
    element.set_direction(PenDirection::Increasing);
    element.remap(&axes()).expect("remap");

    let traces = element.traces();
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].num_points, 2);
    assert_eq!(traces[1].num_points, 2);
}

#[test]
fn both_direction_never_breaks_on_retrace() {
    let mut element = Element::new();
    element
        .set_data(vec![1.0, 4.0, 2.0, 5.0], vec![1.0, 2.0, 3.0, 4.0])
        .expect("set data");
    element.set_direction(PenDirection::Both);
    element.remap(&axes()).expect("remap");
    assert_eq!(element.traces().len(), 1);
    assert_eq!(element.traces()[0].num_points, 4);
}

#[test]
fn mismatched_sequence_lengths_are_rejected() {
    let mut element = Element::new();
    let err = element.set_data(vec![0.0, 1.0], vec![0.0]).unwrap_err();
    assert!(err.to_string().contains("equal length"));
}

#[test]
fn off_screen_points_are_marked_not_visible() {
    let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0).expect("rect");
    let axes = LinearAxes::new((0.0, 10.0), (0.0, 10.0), rect).expect("axes");

    let mut element = Element::new();
    // y = 20 maps well above the plot rectangle.
    element
        .set_data(vec![1.0, 2.0], vec![1.0, 20.0])
        .expect("set data");
    // Zero line width keeps the viewport clipper away from this trace.
    let symbols_only = tracegraph::core::Pen {
        line_width: 0.0,
        ..Default::default()
    };
    element
        .pen_table_mut()
        .add_pen("default", symbols_only)
        .expect("pen");
    element.remap(&axes).expect("remap");

    let trace = &element.traces()[0];
    let flags: Vec<bool> = trace
        .iter(element.point_arena())
        .map(|(_, point)| point.flags.visible)
        .collect();
    assert_eq!(flags, vec![true, false]);
}
