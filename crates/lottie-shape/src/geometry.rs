//! # Geometry Module
//!
//! Vector helpers shared by the tangent and path code.
//!
//! ## Responsibilities
//! - **Polar tangents**: Synfig stores tangents as radius + angle (degrees).
//! - **Axis mapping**: Synfig's y axis points up, Lottie's points down.
//! - **Degree elevation**: exact quadratic to cubic conversion.

use crate::settings::CanvasSize;
use glam::Vec2;
use kurbo::{Point, QuadBez};

/// The 2D vector used throughout the conversion.
pub type Vector = Vec2;

pub trait ToList {
    fn to_list(&self) -> [f32; 2];
}

impl ToList for Vec2 {
    fn to_list(&self) -> [f32; 2] {
        self.to_array()
    }
}

/// Converts a polar tangent (radius, angle in degrees) to cartesian form.
pub fn radial_to_tangent(radius: f32, angle: f32) -> Vector {
    let (sin, cos) = angle.to_radians().sin_cos();
    Vec2::new(radius * cos, radius * sin)
}

/// Inverse of [`radial_to_tangent`]; the angle is in degrees within (-180, 180].
pub fn tangent_to_radial(tangent: Vector) -> (f32, f32) {
    (tangent.length(), tangent.y.atan2(tangent.x).to_degrees())
}

/// Maps a Synfig point into Lottie's y-down space, optionally centring it on
/// the canvas.
pub fn change_axis(x: f32, y: f32, canvas: Option<&CanvasSize>) -> [f32; 2] {
    match canvas {
        Some(c) => [x + c.width / 2.0, -y + c.height / 2.0],
        None => [x, -y],
    }
}

/// Raises a quadratic segment to the equivalent cubic, returning the two
/// inner control points. The endpoints are unchanged.
pub fn elevate(qp0: Vector, qp1: Vector, qp2: Vector) -> (Vector, Vector) {
    let cubic = QuadBez::new(to_point(qp0), to_point(qp1), to_point(qp2)).raise();
    (from_point(cubic.p1), from_point(cubic.p2))
}

fn to_point(v: Vector) -> Point {
    Point::new(v.x as f64, v.y as f64)
}

fn from_point(p: Point) -> Vector {
    Vec2::new(p.x as f32, p.y as f32)
}
