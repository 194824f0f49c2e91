use shape_paint::geometry::{diagonal_standing, fixing_position};
use shape_paint::persistence::{decode_document, decode_line, encode_shapes};
use shape_paint::{
    BackgroundFill, FormatError, LineStyle, LoadError, Point, Rgb, Shape, ShapeKind,
    ShapeRegistry, ShapeStyle,
};

fn styled(kind: ShapeKind) -> ShapeStyle {
    ShapeStyle {
        line_style: LineStyle::ALL[kind.index()],
        line_width: kind.index() as u32 * 2,
        line_colour: Rgb::new(12, 200, kind.index() as u8),
        background_fill: if kind.index() % 2 == 0 {
            BackgroundFill::Solid
        } else {
            BackgroundFill::None
        },
        background_colour: Rgb::new(255, 128, 0),
    }
}

// One canonical shape per variant, built the way an interactive drag would
fn sample(registry: &ShapeRegistry, kind: ShapeKind) -> Shape {
    let anchor = Point::new(40, 30);
    let mut current = Point::new(-5, 70);
    if kind.is_special() {
        current = diagonal_standing(anchor, current);
    }
    let (first, second) = fixing_position(kind, anchor, current);
    registry.create(kind.index(), first, second, styled(kind))
}

#[test]
fn test_round_trip_every_variant() {
    let registry = ShapeRegistry::new();
    for kind in ShapeKind::ALL {
        let shape = sample(&registry, kind);
        assert!(shape.validate().is_ok(), "{kind} sample is not canonical");

        let text = shape.serialize();
        let parsed = decode_line(&registry, &text).unwrap();
        assert_eq!(parsed, shape, "round trip changed {text}");
    }
}

#[test]
fn test_line_scenario() {
    let registry = ShapeRegistry::new();
    let style = ShapeStyle {
        line_style: LineStyle::Solid,
        line_width: 1,
        line_colour: Rgb::BLACK,
        background_fill: BackgroundFill::None,
        background_colour: Rgb::WHITE,
    };
    let line = registry.create(0, Point::new(0, 0), Point::new(10, 10), style);

    let text = line.serialize();
    assert_eq!(text, "line: 0,0 10,10 0,1,0,0,16777215");
    assert_eq!(decode_line(&registry, &text), Ok(line));
}

#[test]
fn test_whole_document_round_trip() {
    let registry = ShapeRegistry::new();
    let shapes: Vec<Shape> = ShapeKind::ALL
        .into_iter()
        .map(|kind| sample(&registry, kind))
        .collect();

    let text = encode_shapes(&shapes);
    assert_eq!(text.lines().count(), 5);
    assert_eq!(decode_document(&registry, &text).unwrap(), shapes);
}

#[test]
fn test_malformed_bodies() {
    let registry = ShapeRegistry::new();
    let cases = [
        ("triangle: 0,0 1,1 0,1,0,0,0", "unknown type"),
        ("line: 0,0 1,1", "missing style"),
        ("line: 0,0 1 0,1,0,0,0", "short point"),
        ("line: 0,0 1,1 0,1,0,0", "short style"),
        ("line: 0,0 1,one 0,1,0,0,0", "not a number"),
        ("line: 0,0 1,1 9,1,0,0,0", "bad line style"),
        ("line: 0,0 1,1 0,1,0,7,0", "bad fill"),
        ("line: 0,0 1,1 0,1,16777216,0,0", "bad colour"),
        ("line: 0,0 1,1 0,-1,0,0,0", "negative width"),
        ("square: 0,0 10,4 0,1,0,0,0", "square that is not square"),
        ("ellipse: 10,10 0,0 0,1,0,0,0", "flipped box"),
        ("line 0,0 1,1 0,1,0,0,0", "no separator"),
    ];
    for (line, why) in cases {
        assert!(decode_line(&registry, line).is_err(), "accepted {why}: {line}");
    }
    assert_eq!(
        decode_line(&registry, "triangle: 0,0 1,1 0,1,0,0,0"),
        Err(FormatError::UnknownType("triangle".to_owned()))
    );
}

#[test]
fn test_boxes_spanning_the_whole_coordinate_range() {
    let registry = ShapeRegistry::new();

    let shapes = decode_document(
        &registry,
        "rectangle: -2147483648,0 2147483647,1 0,1,0,0,0\n",
    )
    .unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].corner1(), Point::new(i32::MIN, 0));
    assert_eq!(shapes[0].corner2(), Point::new(i32::MAX, 1));

    let err = decode_document(
        &registry,
        "line: 0,0 1,1 0,1,0,0,0\nsquare: -2147483648,0 2147483647,1 0,1,0,0,0\n",
    )
    .unwrap_err();
    match err {
        LoadError::Format { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(source, FormatError::Geometry { kind: "square", .. }));
        }
        other => panic!("expected a format error, got {other:?}"),
    }

    // Equal sides at full width are still a square
    let circle = "circle: -2147483648,-2147483648 2147483647,2147483647 0,1,0,0,0";
    assert!(decode_line(&registry, circle).is_ok());
}

#[test]
fn test_hit_test_needs_whole_shape_inside() {
    let registry = ShapeRegistry::new();
    let rect = registry.create_kind(
        ShapeKind::Rectangle,
        Point::new(10, 10),
        Point::new(30, 20),
        ShapeStyle::default(),
    );

    assert!(rect.contains(Point::new(10, 10), Point::new(30, 20)));
    assert!(rect.contains(Point::new(0, 0), Point::new(100, 100)));
    // Each corner poking out on its own
    assert!(!rect.contains(Point::new(11, 0), Point::new(100, 100)));
    assert!(!rect.contains(Point::new(0, 11), Point::new(100, 100)));
    assert!(!rect.contains(Point::new(0, 0), Point::new(29, 100)));
    assert!(!rect.contains(Point::new(0, 0), Point::new(100, 19)));
}
