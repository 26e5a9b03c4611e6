use lottie_shape::{
    animate_tangent, elevate, insert_block, resolve_tangents, update_frame_window, ExportSettings, FrameWindow,
    InsertAt, PathBuilder, PathPoint, TangentParam, Vector,
};
use synfig_data::model::{Channel, Waypoint};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn test_builder_scenario_vertex_ten_units() {
    init_tracing();
    let settings = ExportSettings::default();
    let mut blocks = Vec::new();
    let (start, _) = insert_block(&mut blocks, InsertAt::Append, 0, false).unwrap();
    PathBuilder::new(start, Vector::ZERO, &settings).emit_point(Vector::new(10.0, 0.0), Vector::ZERO, Vector::ZERO);

    let s = blocks[0].start().unwrap();
    assert_eq!(s.i, vec![[0.0, 0.0]]);
    assert_eq!(s.o, vec![[0.0, 0.0]]);
    assert_eq!(s.v[0][0], 600.0);
}

#[test]
fn test_insert_block_scenario() {
    let mut blocks = Vec::new();
    insert_block(&mut blocks, InsertAt::from_index(-1, 0).unwrap(), 5, true).unwrap();
    assert_eq!(blocks.len(), 1);
    let block = &blocks[0];
    assert_eq!(block.t, Some(5.0));
    let (s, e) = (block.start().unwrap(), block.end().unwrap());
    assert!(s.c && e.c);
    assert!(s.i.is_empty() && s.v.is_empty());
}

#[test]
fn test_paths_stay_consistent() {
    let settings = ExportSettings { pix_per_unit: 30.0, ..Default::default() };
    let points: Vec<_> = (0..5)
        .map(|n| {
            let n = n as f32;
            PathPoint::new(Vector::new(n, -n), Vector::new(0.5, n), Vector::new(-n, 0.25))
        })
        .collect();

    let mut blocks = Vec::new();
    for frame in 0..3 {
        let (s, e) = insert_block(&mut blocks, InsertAt::Append, frame, frame % 2 == 0).unwrap();
        let mut b = PathBuilder::new(s, Vector::new(1.0, 2.0), &settings);
        b.emit_moveto(points[0].vertex);
        b.build_forward(&points[1..]);
        PathBuilder::new(e, Vector::ZERO, &settings).build_reverse(&points);
    }
    for block in &blocks {
        for path in block.s.iter().chain(block.e.iter()) {
            assert!(path.is_consistent());
            assert_eq!(path.len(), 5);
        }
    }
}

#[test]
fn test_build_reverse_scenario() {
    let settings = ExportSettings { pix_per_unit: 1.0, ..Default::default() };
    let (a, b, c) = (Vector::new(1.0, 1.0), Vector::new(2.0, 2.0), Vector::new(3.0, 3.0));
    let points = [PathPoint::corner(a), PathPoint::corner(b), PathPoint::corner(c)];
    let mut blocks = Vec::new();
    let (s, _) = insert_block(&mut blocks, InsertAt::Append, 0, false).unwrap();
    PathBuilder::new(s, Vector::ZERO, &settings).build_reverse(&points);

    let s = blocks[0].start().unwrap();
    assert_eq!(s.v, vec![[3.0, -3.0], [2.0, -2.0], [1.0, -1.0]]);
    assert!(s.i.iter().all(|t| *t == [0.0, 0.0]));
    assert!(s.o.iter().all(|t| *t == [0.0, 0.0]));
}

#[test]
fn test_window_is_monotone_across_channels() {
    let mut window = FrameWindow::new();
    let channels = [
        Channel::animated(vec![Waypoint::new(2, 0.0f32), Waypoint::new(9, 1.0), Waypoint::new(5, 2.0)]),
        Channel::Static(4.0),
        Channel::animated(vec![Waypoint::new(3, 0.0), Waypoint::new(7, 0.0)]),
    ];
    let mut previous = None;
    for ch in &channels {
        update_frame_window(ch, &mut window);
        if let Some(FrameWindow { first, last }) = previous {
            assert!(window.first <= first && window.last >= last);
        }
        previous = Some(window);
    }
    assert_eq!(window, FrameWindow::from_range(2, 9));
}

#[test]
fn test_elevate_identity_for_coincident_points() {
    let p = Vector::new(-3.25, 8.0);
    assert_eq!(elevate(p, p, p), (p, p));
}

#[test]
fn test_unsplit_mirror_with_differing_raw_tangent() {
    init_tracing();
    let mut window = FrameWindow::new();
    let t1 = TangentParam {
        radius: Channel::animated(vec![Waypoint::new(0, 0.5), Waypoint::new(6, 2.0)]),
        theta: Channel::animated(vec![Waypoint::new(0, 10.0), Waypoint::new(6, 200.0)]),
    };
    let t2 = TangentParam {
        radius: Channel::animated(vec![Waypoint::new(2, 9.0), Waypoint::new(4, 1.0)]),
        theta: Channel::Static(33.0),
    };
    let t1 = animate_tangent(&t1, &mut window).unwrap();
    let t2 = animate_tangent(&t2, &mut window).unwrap();
    let off = Channel::Static(false);

    for frame in 0..=6 {
        let (tin, tout) = resolve_tangents(&t1, &t2, &off, &off, frame).unwrap();
        assert_eq!(tin, tout, "frame {}", frame);
    }
}
