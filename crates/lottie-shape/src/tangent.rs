//! # Tangent Module
//!
//! Radial-composite tangents: decoding, animation over a frame window and
//! per-frame resolution of a bline point's in/out tangents.
//!
//! ## Key Types
//! - `TangentParam`: decoded radius + theta channels.
//! - `AnimatedTangent`: the same channels keyed over the window, plus their
//!   generated `radius_path` / `theta_path` tracks.

use crate::animatable::Animator;
use crate::errors::ShapeError;
use crate::geometry::{radial_to_tangent, Vector};
use crate::track::{hold_over_window, value_path};
use crate::window::{update_frame_window, FrameWindow};
use lottie_data::model::Property;
use synfig_data::model::{Channel, NodeValue, ParamNode};
use tracing::{debug, instrument};

pub const RADIUS_TAG: &str = "radius";
pub const THETA_TAG: &str = "theta";

/// A tangent authored as radius + angle (degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct TangentParam {
    pub radius: Channel<f32>,
    pub theta: Channel<f32>,
}

impl TryFrom<&ParamNode> for TangentParam {
    type Error = ShapeError;

    fn try_from(node: &ParamNode) -> Result<Self, Self::Error> {
        if !matches!(node.value, NodeValue::Composite(_)) {
            return Err(ShapeError::UnexpectedNode {
                expected: "radial composite",
                found: format!("{} ({})", node.tag, node.value.kind()),
            });
        }

        let mut radius = None;
        let mut theta = None;
        for child in node.children() {
            match (child.tag.as_str(), &child.value) {
                (RADIUS_TAG, NodeValue::Real(ch)) => radius = Some(ch.clone()),
                (THETA_TAG, NodeValue::Angle(ch) | NodeValue::Real(ch)) => theta = Some(ch.clone()),
                (RADIUS_TAG | THETA_TAG, other) => {
                    return Err(ShapeError::UnexpectedNode {
                        expected: "real",
                        found: format!("{} ({})", child.tag, other.kind()),
                    })
                }
                _ => {}
            }
        }

        let missing = |role| ShapeError::MissingChild {
            parent: node.tag.clone(),
            role,
        };
        Ok(TangentParam {
            radius: radius.ok_or_else(|| missing(RADIUS_TAG))?,
            theta: theta.ok_or_else(|| missing(THETA_TAG))?,
        })
    }
}

/// A tangent whose channels are keyed over the whole frame window.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedTangent {
    pub radius: Channel<f32>,
    pub theta: Channel<f32>,
    pub radius_path: Property<f32>,
    pub theta_path: Property<f32>,
}

impl AnimatedTangent {
    /// Polar value (radius, angle) at `frame`.
    pub fn polar_at(&self, frame: i32) -> (f32, f32) {
        (
            Animator::resolve(&self.radius_path, frame as f32, 0.0),
            Animator::resolve(&self.theta_path, frame as f32, 0.0),
        )
    }

    pub fn tangent_at(&self, frame: i32) -> Vector {
        let (r, a) = self.polar_at(frame);
        radial_to_tangent(r, a)
    }
}

/// Widens `window` with the tangent's keyed frames and returns the tangent
/// re-keyed over the resulting window.
#[instrument(level = "debug", skip_all)]
pub fn animate_tangent(tangent: &TangentParam, window: &mut FrameWindow) -> Result<AnimatedTangent, ShapeError> {
    update_frame_window(&tangent.radius, window);
    update_frame_window(&tangent.theta, window);
    debug!(first = window.first, last = window.last, "animating radial tangent");

    let radius = hold_over_window(&tangent.radius, window, RADIUS_TAG)?;
    let theta = hold_over_window(&tangent.theta, window, THETA_TAG)?;
    let radius_path = value_path(&radius);
    let theta_path = value_path(&theta);

    Ok(AnimatedTangent {
        radius,
        theta,
        radius_path,
        theta_path,
    })
}

/// Decodes a radial-composite node, animates it and returns a copy of the node
/// whose radius and theta children are the re-keyed channels.
pub fn animate_tangent_node(
    node: &ParamNode,
    window: &mut FrameWindow,
) -> Result<(ParamNode, AnimatedTangent), ShapeError> {
    let param = TangentParam::try_from(node)?;
    let animated = animate_tangent(&param, window)?;

    let mut rewritten = node.clone();
    rewritten.replace_child(
        ParamNode::new(RADIUS_TAG, NodeValue::Real(animated.radius.clone())),
        None,
    )?;
    rewritten.replace_child(
        ParamNode::new(THETA_TAG, NodeValue::Angle(animated.theta.clone())),
        None,
    )?;
    Ok((rewritten, animated))
}

/// In and out tangents of a bline point at `frame`.
///
/// Where a split flag is off, `t2` borrows that component (radius or angle)
/// from `t1`. The two flags are independent.
pub fn resolve_tangents(
    t1: &AnimatedTangent,
    t2: &AnimatedTangent,
    split_radius: &Channel<bool>,
    split_angle: &Channel<bool>,
    frame: i32,
) -> Result<(Vector, Vector), ShapeError> {
    let sp_r = split_radius
        .bool_at(frame)
        .ok_or(ShapeError::EmptyChannel("split_radius"))?;
    let sp_a = split_angle
        .bool_at(frame)
        .ok_or(ShapeError::EmptyChannel("split_angle"))?;

    let (r1, a1) = t1.polar_at(frame);
    let (mut r2, mut a2) = t2.polar_at(frame);
    if !sp_r {
        r2 = r1;
    }
    if !sp_a {
        a2 = a1;
    }

    Ok((radial_to_tangent(r1, a1), radial_to_tangent(r2, a2)))
}
