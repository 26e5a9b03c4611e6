//! Synfig bline tangents to Lottie animated shape keyframes.
//!
//! The crate takes already-parsed Synfig channels (see `synfig-data`) and
//! produces the `{i, o, v, c}` paths and per-frame shape blocks of
//! `lottie-data`.

pub mod animatable;
pub mod builder;
pub mod errors;
pub mod geometry;
pub mod keyframes;
pub mod settings;
pub mod tangent;
pub mod timeline;
pub mod track;
pub mod window;

pub use builder::{convert_tangents, PathBuilder, PathPoint};
pub use errors::ShapeError;
pub use geometry::{change_axis, elevate, radial_to_tangent, tangent_to_radial, ToList, Vector};
pub use keyframes::{insert_block, InsertAt};
pub use settings::{CanvasSize, ExportSettings};
pub use tangent::{animate_tangent, animate_tangent_node, resolve_tangents, AnimatedTangent, TangentParam};
pub use timeline::{BlinePoint, ShapeTimeline};
pub use window::{update_frame_window, FrameWindow};
