//! # Timeline Module
//!
//! Builds the per-frame shape blocks of a bline.
//!
//! ## Responsibilities
//! - **Window**: widens the frame window with every keyed channel of the bline.
//! - **Tangents**: animates both tangents of every point over that window.
//! - **Blocks**: one block per frame, `s` at the frame and `e` at the next.

use crate::animatable::Animator;
use crate::builder::{PathBuilder, PathPoint};
use crate::errors::ShapeError;
use crate::geometry::Vector;
use crate::keyframes::{insert_block, InsertAt};
use crate::settings::ExportSettings;
use crate::tangent::{animate_tangent, resolve_tangents, AnimatedTangent, TangentParam};
use crate::track::value_path;
use crate::window::{update_frame_window, FrameWindow};
use lottie_data::model::{BezierPath, Property, ShapeKeyframe};
use synfig_data::model::Channel;
use tracing::{debug, instrument};

/// One vertex of a Synfig bline with its two tangents and split flags.
#[derive(Debug, Clone, PartialEq)]
pub struct BlinePoint {
    pub vertex: Channel<[f32; 2]>,
    pub t1: TangentParam,
    pub t2: TangentParam,
    pub split_radius: Channel<bool>,
    pub split_angle: Channel<bool>,
}

struct AnimatedPoint<'a> {
    vertex: Property<[f32; 2]>,
    t1: AnimatedTangent,
    t2: AnimatedTangent,
    split_radius: &'a Channel<bool>,
    split_angle: &'a Channel<bool>,
}

impl AnimatedPoint<'_> {
    fn sample(&self, frame: i32) -> Result<PathPoint, ShapeError> {
        let vertex = Animator::resolve(&self.vertex, frame as f32, [0.0, 0.0]);
        let (tan_in, tan_out) = resolve_tangents(&self.t1, &self.t2, self.split_radius, self.split_angle, frame)?;
        Ok(PathPoint::new(Vector::from_array(vertex), tan_in, tan_out))
    }
}

pub struct ShapeTimeline {
    settings: ExportSettings,
    closed: bool,
    origin: Channel<[f32; 2]>,
}

impl ShapeTimeline {
    pub fn new(settings: ExportSettings) -> Self {
        ShapeTimeline {
            settings,
            closed: true,
            origin: Channel::Static([0.0, 0.0]),
        }
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Offset added to every point, in Lottie pixels.
    pub fn origin(mut self, origin: Channel<[f32; 2]>) -> Self {
        self.origin = origin;
        self
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Appends one block per frame of the (widened) window to `blocks`.
    #[instrument(level = "debug", skip_all, fields(points = points.len()))]
    pub fn build_into(
        &self,
        points: &[BlinePoint],
        window: &mut FrameWindow,
        blocks: &mut Vec<ShapeKeyframe>,
    ) -> Result<(), ShapeError> {
        update_frame_window(&self.origin, window);
        for p in points {
            update_frame_window(&p.vertex, window);
            update_frame_window(&p.split_radius, window);
            update_frame_window(&p.split_angle, window);
            for t in [&p.t1, &p.t2] {
                update_frame_window(&t.radius, window);
                update_frame_window(&t.theta, window);
            }
        }

        // The window is final here, so every tangent is keyed over the same span.
        let animated = points
            .iter()
            .map(|p| -> Result<AnimatedPoint, ShapeError> {
                Ok(AnimatedPoint {
                    vertex: value_path(&p.vertex),
                    t1: animate_tangent(&p.t1, window)?,
                    t2: animate_tangent(&p.t2, window)?,
                    split_radius: &p.split_radius,
                    split_angle: &p.split_angle,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let origin = value_path(&self.origin);
        let frames = window.frames();
        debug!(first = frames.start(), last = frames.end(), "building shape blocks");

        for frame in frames {
            let (start, end) = insert_block(blocks, InsertAt::Append, frame, self.closed)?;
            self.fill(start, &animated, &origin, frame)?;
            self.fill(end, &animated, &origin, frame.saturating_add(1))?;
        }
        Ok(())
    }

    pub fn build(&self, points: &[BlinePoint], window: &mut FrameWindow) -> Result<Vec<ShapeKeyframe>, ShapeError> {
        let mut blocks = Vec::new();
        self.build_into(points, window, &mut blocks)?;
        Ok(blocks)
    }

    fn fill(
        &self,
        path: &mut BezierPath,
        points: &[AnimatedPoint<'_>],
        origin: &Property<[f32; 2]>,
        frame: i32,
    ) -> Result<(), ShapeError> {
        let origin = Vector::from_array(Animator::resolve(origin, frame as f32, [0.0, 0.0]));
        let samples = points
            .iter()
            .map(|p| p.sample(frame))
            .collect::<Result<Vec<_>, _>>()?;
        PathBuilder::new(path, origin, &self.settings).build_forward(&samples);
        Ok(())
    }
}
