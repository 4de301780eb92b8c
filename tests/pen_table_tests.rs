use tracegraph::core::{Color, Pen, PenDirection, PenTable, WeightRange};
use tracegraph::error::GraphError;

#[test]
fn resolve_uses_reverse_declaration_order() {
    let mut pens = PenTable::new("base", Pen::default()).expect("table");
    pens.add_pen("first", Pen::default()).expect("first");
    pens.add_pen("second", Pen::default()).expect("second");
    pens.set_weight_ranges(vec![
        WeightRange::new(0.0, 10.0, "first"),
        WeightRange::new(0.0, 10.0, "second"),
    ])
    .expect("ranges");

    // Both ranges contain 5; the later declaration wins.
    assert_eq!(pens.resolve(5.0), "second");
}

#[test]
fn membership_is_epsilon_tolerant_at_the_boundaries() {
    let mut pens = PenTable::new("base", Pen::default()).expect("table");
    pens.add_pen("band", Pen::default()).expect("band");
    pens.set_weight_ranges(vec![WeightRange::new(1.0, 2.0, "band")])
        .expect("ranges");

    assert_eq!(pens.resolve(1.0), "band");
    assert_eq!(pens.resolve(3.0), "band");
    // An accumulated rounding error at the top boundary still matches.
    assert_eq!(pens.resolve(3.0 + 1e-16), "band");
    assert_eq!(pens.resolve(3.1), "base");
    assert_eq!(pens.resolve(0.9), "base");
}

#[test]
fn negative_span_ranges_match_downward() {
    let mut pens = PenTable::new("base", Pen::default()).expect("table");
    pens.add_pen("band", Pen::default()).expect("band");
    pens.set_weight_ranges(vec![WeightRange::new(5.0, -3.0, "band")])
        .expect("ranges");

    assert_eq!(pens.resolve(3.0), "band");
    assert_eq!(pens.resolve(5.0), "band");
    assert_eq!(pens.resolve(6.0), "base");
    assert_eq!(pens.resolve(1.0), "base");
}

#[test]
fn zero_span_ranges_are_rejected() {
    let mut pens = PenTable::new("base", Pen::default()).expect("table");
    let err = pens
        .set_weight_ranges(vec![WeightRange::new(1.0, 0.0, "base")])
        .expect_err("zero span");
    assert!(matches!(err, GraphError::InvalidData(_)));
}

#[test]
fn ranges_referencing_unregistered_pens_are_rejected() {
    let mut pens = PenTable::new("base", Pen::default()).expect("table");
    let err = pens
        .set_weight_ranges(vec![WeightRange::new(0.0, 1.0, "missing")])
        .expect_err("unknown pen");
    assert!(matches!(err, GraphError::UnknownPen(name) if name == "missing"));
}

#[test]
fn pen_validation_rejects_negative_widths_and_bad_colors() {
    let negative = Pen {
        line_width: -1.0,
        ..Default::default()
    };
    assert!(negative.validate().is_err());

    let out_of_range = Pen {
        color: Color::rgb(1.5, 0.0, 0.0),
        ..Default::default()
    };
    assert!(out_of_range.validate().is_err());

    assert!(Pen::default().validate().is_ok());
}

#[test]
fn json_round_trip_preserves_pens_ranges_and_declaration_order() {
    let mut pens = PenTable::new("base", Pen::default()).expect("table");
    pens.add_pen(
        "warm",
        Pen {
            color: Color::rgb(0.9, 0.2, 0.1),
            line_width: 2.0,
            ..Default::default()
        },
    )
    .expect("warm");
    pens.set_weight_ranges(vec![WeightRange::new(0.5, 0.5, "warm")])
        .expect("ranges");

    let json = pens.to_json().expect("serialize");
    let restored = PenTable::from_json(&json).expect("deserialize");
    assert_eq!(restored, pens);
    assert_eq!(restored.resolve(0.75), "warm");
    assert_eq!(restored.default_pen_name(), "base");
}

#[test]
fn deserialization_rejects_dangling_pen_references() {
    let json = r#"{
        "pens": {"base": {
            "color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            "line_width": 1.0,
            "symbol_size": 6.0,
            "error_bar_color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            "error_bar_line_width": 1.0,
            "error_cap_width": 3.0
        }},
        "ranges": [{"min": 0.0, "range": 1.0, "pen": "ghost"}],
        "default_pen": "base"
    }"#;
    let err = PenTable::from_json(json).expect_err("dangling reference");
    assert!(matches!(err, GraphError::UnknownPen(name) if name == "ghost"));
}

#[test]
fn deserialization_enforces_pen_and_range_validation() {
    // Negative line width must be rejected just as add_pen rejects it.
    let bad_pen = r#"{
        "pens": {"base": {
            "color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            "line_width": -2.0,
            "symbol_size": 6.0,
            "error_bar_color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            "error_bar_line_width": 1.0,
            "error_cap_width": 3.0
        }},
        "ranges": [],
        "default_pen": "base"
    }"#;
    let err = PenTable::from_json(bad_pen).expect_err("negative width");
    assert!(matches!(err, GraphError::InvalidData(_)));

    // Zero-span range must be rejected just as set_weight_ranges rejects it.
    let bad_range = r#"{
        "pens": {"base": {
            "color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            "line_width": 1.0,
            "symbol_size": 6.0,
            "error_bar_color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            "error_bar_line_width": 1.0,
            "error_cap_width": 3.0
        }},
        "ranges": [{"min": 0.0, "range": 0.0, "pen": "base"}],
        "default_pen": "base"
    }"#;
    let err = PenTable::from_json(bad_range).expect_err("zero span");
    assert!(matches!(err, GraphError::InvalidData(_)));
}

#[test]
fn direction_breaks_only_against_the_configured_monotonicity() {
    assert!(PenDirection::Increasing.breaks_between(5.0, 4.0));
    assert!(!PenDirection::Increasing.breaks_between(5.0, 5.0));
    assert!(PenDirection::Decreasing.breaks_between(4.0, 5.0));
    assert!(!PenDirection::Both.breaks_between(5.0, 4.0));
    assert!(!PenDirection::Both.breaks_between(4.0, 5.0));
}
