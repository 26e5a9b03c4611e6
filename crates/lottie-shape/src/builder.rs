use crate::geometry::{change_axis, ToList, Vector};
use crate::settings::ExportSettings;
use lottie_data::model::BezierPath;

/// A bline point sampled at one frame, in Synfig units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub vertex: Vector,
    pub tan_in: Vector,
    pub tan_out: Vector,
}

impl PathPoint {
    pub fn new(vertex: Vector, tan_in: Vector, tan_out: Vector) -> Self {
        PathPoint { vertex, tan_in, tan_out }
    }

    pub fn corner(vertex: Vector) -> Self {
        PathPoint::new(vertex, Vector::ZERO, Vector::ZERO)
    }
}

/// Converts Synfig tangents into Lottie's relative handles.
pub fn convert_tangents(t1: Vector, t2: Vector) -> (Vector, Vector) {
    let mut t1 = t1 / 3.0;
    let mut t2 = t2 / 3.0;

    // Lottie's in-handle points back from the vertex
    t1 *= -1.0;

    // y grows downwards in Lottie
    t1[1] = -t1[1];
    t2[1] = -t2[1];
    (t1, t2)
}

/// Appends converted points to a [`BezierPath`].
///
/// `origin` is the shape's offset at the frame being built, already in
/// Lottie pixels.
pub struct PathBuilder<'a> {
    path: &'a mut BezierPath,
    origin: Vector,
    settings: &'a ExportSettings,
}

impl<'a> PathBuilder<'a> {
    pub fn new(path: &'a mut BezierPath, origin: Vector, settings: &'a ExportSettings) -> Self {
        PathBuilder { path, origin, settings }
    }

    fn position(&self, vertex: Vector) -> [f32; 2] {
        let vertex = vertex * self.settings.pix_per_unit;
        let mut pos = change_axis(vertex.x, vertex.y, self.settings.canvas.as_ref());
        for (i, p) in pos.iter_mut().enumerate() {
            *p += self.origin[i];
        }
        pos
    }

    pub fn emit_point(&mut self, vertex: Vector, tan_in: Vector, tan_out: Vector) {
        let scale = self.settings.pix_per_unit;
        let (tan_in, tan_out) = convert_tangents(3.0 * (tan_in * scale), 3.0 * (tan_out * scale));
        let pos = self.position(vertex);
        self.path.push(tan_in.to_list(), tan_out.to_list(), pos);
    }

    /// A starting point without curvature.
    pub fn emit_moveto(&mut self, vertex: Vector) {
        let pos = self.position(vertex);
        self.path.push([0.0, 0.0], [0.0, 0.0], pos);
    }

    pub fn build_forward(&mut self, points: &[PathPoint]) {
        for p in points {
            self.emit_point(p.vertex, p.tan_in, p.tan_out);
        }
    }

    /// Emits `points` last to first.
    ///
    /// The in/out tangents of each point are not swapped, which is only
    /// correct while the tangents are zero.
    pub fn build_reverse(&mut self, points: &[PathPoint]) {
        for p in points.iter().rev() {
            self.emit_point(p.vertex, p.tan_in, p.tan_out);
        }
    }
}
