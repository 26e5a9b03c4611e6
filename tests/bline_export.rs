use serde_json::json;
use synfig_lottie::lottie_data::model::ShapeValue;
use synfig_lottie::lottie_shape::{
    animate_tangent_node, BlinePoint, CanvasSize, ExportSettings, FrameWindow, ShapeError, ShapeTimeline,
    TangentParam,
};
use synfig_lottie::synfig_data::model::{Channel, ParamNode, Waypoint};
use synfig_lottie::{export_path_shape, export_path_shape_json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn tangent_node(radius: serde_json::Value, theta: serde_json::Value) -> ParamNode {
    serde_json::from_value(json!({
        "tag": "t1",
        "composite": [
            { "tag": "radius", "real": radius },
            { "tag": "theta", "angle": theta }
        ]
    }))
    .unwrap()
}

fn point(x: f32, y: f32, t1: &ParamNode, t2: &ParamNode) -> BlinePoint {
    BlinePoint {
        vertex: Channel::Static([x, y]),
        t1: TangentParam::try_from(t1).unwrap(),
        t2: TangentParam::try_from(t2).unwrap(),
        split_radius: Channel::Static(true),
        split_angle: Channel::Static(true),
    }
}

#[test]
fn test_export_square_with_animated_corner() {
    init_tracing();
    let zero = tangent_node(json!({ "static": 0.0 }), json!({ "static": 0.0 }));
    let grow = tangent_node(
        json!({ "animated": [
            { "frame": 0, "value": 0.0, "after": "linear" },
            { "frame": 4, "value": 1.0, "before": "linear" }
        ] }),
        json!({ "static": 90.0 }),
    );

    let mut corner = point(1.0, 1.0, &grow, &zero);
    corner.vertex = Channel::animated(vec![Waypoint::new(0, [1.0, 1.0]), Waypoint::new(4, [2.0, 2.0])]);
    let points = vec![
        point(-1.0, -1.0, &zero, &zero),
        point(1.0, -1.0, &zero, &zero),
        corner,
        point(-1.0, 1.0, &zero, &zero),
    ];

    let timeline = ShapeTimeline::new(ExportSettings::default());
    let mut window = FrameWindow::new();
    let shape = export_path_shape("Square", &points, &timeline, &mut window).unwrap();

    assert_eq!(window, FrameWindow::from_range(0, 4));
    assert_eq!(shape.nm.as_deref(), Some("Square"));
    assert_eq!(shape.ks.a, 1);
    let ShapeValue::Animated(blocks) = &shape.ks.k else {
        panic!("Expected animated shape");
    };
    assert_eq!(blocks.len(), 5);

    let first = blocks[0].start().unwrap();
    assert_eq!(first.v.len(), 4);
    assert_eq!(first.v[0], [-60.0, 60.0]);
    assert_eq!(first.v[2], [60.0, -60.0]);

    // frame 4: corner moved to (2, 2) and its in-tangent has radius 1 at 90 degrees
    let last = blocks[4].start().unwrap();
    assert_eq!(last.v[2], [120.0, -120.0]);
    assert!(last.i[2][0].abs() < 1e-3);
    assert!((last.i[2][1] - 60.0).abs() < 1e-3);
    assert!(blocks.iter().all(|b| b.s[0].c && b.e[0].c));
}

#[test]
fn test_export_json_layout() {
    let zero = tangent_node(json!({ "static": 0.0 }), json!({ "static": 0.0 }));
    let settings = ExportSettings {
        canvas: Some(CanvasSize { width: 480.0, height: 270.0 }),
        ..Default::default()
    };
    let timeline = ShapeTimeline::new(settings).closed(false);
    let value = export_path_shape_json(
        "Line",
        &[point(0.0, 0.0, &zero, &zero), point(1.0, 0.0, &zero, &zero)],
        &timeline,
        &mut FrameWindow::new(),
    )
    .unwrap();

    assert_eq!(value["ty"], "sh");
    assert_eq!(value["ks"]["a"], 1);
    let block = &value["ks"]["k"][0];
    assert_eq!(block["t"], json!(0.0));
    assert_eq!(block["i"], json!({ "x": 0.5, "y": 0.5 }));
    assert_eq!(block["s"][0]["v"], json!([[240.0, 135.0], [300.0, 135.0]]));
    assert_eq!(block["s"][0]["c"], json!(false));
    assert_eq!(value["ks"]["k"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_rewritten_node_feeds_back_into_export() {
    let node = tangent_node(
        json!({ "animated": [{ "frame": 2, "value": 1.0 }, { "frame": 6, "value": 1.5 }] }),
        json!({ "static": 45.0 }),
    );
    let mut window = FrameWindow::new();
    let (rewritten, animated) = animate_tangent_node(&node, &mut window).unwrap();
    assert_eq!(window, FrameWindow::from_range(2, 6));
    assert_eq!(rewritten.children().len(), 2);

    let param = TangentParam::try_from(&rewritten).unwrap();
    assert_eq!(param.radius, animated.radius);
    assert_eq!(param.theta.frames().collect::<Vec<_>>(), vec![2, 6]);
}

#[test]
fn test_missing_role_stops_export() {
    let broken: ParamNode = serde_json::from_value(json!({
        "tag": "t2",
        "composite": [{ "tag": "theta", "angle": { "static": 0.0 } }]
    }))
    .unwrap();
    let err = TangentParam::try_from(&broken).unwrap_err();
    assert!(matches!(err, ShapeError::MissingChild { role: "radius", .. }));
}
