//! # Synfig Lottie
//!
//! Converts the bline of a Synfig shape into the animated `ks` of a Lottie
//! path shape.
//!
//! The work is split like the rest of the workspace:
//! - `synfig_data`: parsed Synfig channels and parameter nodes.
//! - `lottie_shape`: tangent animation, tangent resolution and path building.
//! - `lottie_data`: the Lottie output records.

pub use lottie_data;
pub use lottie_shape;
pub use synfig_data;

use lottie_data::model::{PathShape, ShapeProperty};
use lottie_shape::{BlinePoint, FrameWindow, ShapeError, ShapeTimeline};
use tracing::info;

/// Builds a named Lottie path shape for `points`, keyed over every frame the
/// bline's channels touch (and any frames already in `window`).
pub fn export_path_shape(
    name: &str,
    points: &[BlinePoint],
    timeline: &ShapeTimeline,
    window: &mut FrameWindow,
) -> Result<PathShape, ShapeError> {
    let blocks = timeline.build(points, window)?;
    info!(shape = name, blocks = blocks.len(), "exported path shape");
    Ok(PathShape::new(Some(name.to_string()), ShapeProperty::animated(blocks)))
}

/// Same as [`export_path_shape`], serialized to a JSON value ready to embed
/// in a shape layer's `shapes` array.
pub fn export_path_shape_json(
    name: &str,
    points: &[BlinePoint],
    timeline: &ShapeTimeline,
    window: &mut FrameWindow,
) -> Result<serde_json::Value, ShapeError> {
    let shape = export_path_shape(name, points, timeline, window)?;
    Ok(serde_json::to_value(shape)?)
}
