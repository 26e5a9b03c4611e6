use lottie_data::model::{BezierPath, Keyframe, PathShape, Property, ShapeProperty};
use serde_json::json;

#[test]
fn test_static_path_shape_layout() {
    let mut path = BezierPath::new(false);
    path.push([0.0, 0.0], [0.0, 0.0], [0.0, 0.0]);
    path.push([0.0, 0.0], [0.0, 0.0], [100.0, 0.0]);
    let shape = PathShape::new(None, ShapeProperty::fixed(path));

    assert_eq!(
        serde_json::to_value(&shape).unwrap(),
        json!({
            "ty": "sh",
            "ks": {
                "a": 0,
                "k": { "i": [[0.0, 0.0], [0.0, 0.0]], "o": [[0.0, 0.0], [0.0, 0.0]], "v": [[0.0, 0.0], [100.0, 0.0]], "c": false }
            }
        })
    );
}

#[test]
fn test_value_track_layout() {
    let prop = Property::animated(vec![
        Keyframe { t: 0.0, s: Some(2.5f32), e: Some(4.0), i: Some([1.0, 1.0]), o: Some([0.0, 0.0]), h: None },
        Keyframe { t: 10.0, s: Some(4.0), e: None, i: None, o: None, h: None },
    ]);
    let v = serde_json::to_value(&prop).unwrap();
    assert_eq!(v["a"], 1);
    assert_eq!(v["k"][0], json!({ "t": 0.0, "s": 2.5, "e": 4.0, "i": [1.0, 1.0], "o": [0.0, 0.0] }));
    assert_eq!(v["k"][1], json!({ "t": 10.0, "s": 4.0 }));
    assert!(v.get("ix").is_none());
}

#[test]
fn test_default_value_is_omitted() {
    let v = serde_json::to_value(Property::<f32>::default()).unwrap();
    assert_eq!(v, json!({ "a": 0 }));
}
