//! # Track Module
//!
//! Turns Synfig channels into Lottie value tracks.
//!
//! ## Responsibilities
//! - **Hold synthesis**: stretches a channel over a frame window, holding the
//!   nearest keyed value at the edges.
//! - **Value paths**: one Lottie keyframe per waypoint with easing handles
//!   derived from the waypoint interpolation.

use crate::errors::ShapeError;
use crate::window::FrameWindow;
use lottie_data::model::{Keyframe, Property, Vec2};
use synfig_data::model::{Channel, Interpolation, Waypoint};

const EASE_OUT: Vec2 = [0.42, 0.0];
const EASE_IN: Vec2 = [0.58, 1.0];
const LINEAR_OUT: Vec2 = [0.0, 0.0];
const LINEAR_IN: Vec2 = [1.0, 1.0];

fn held<T>(frame: i32, value: T) -> Waypoint<T> {
    Waypoint::new(frame, value).with_interpolation(Interpolation::Linear, Interpolation::Linear)
}

/// Returns an animated copy of `channel` keyed across the whole of `window`.
///
/// Literal channels become a flat track; keyed channels gain a held waypoint
/// at each window edge they do not already reach.
pub fn hold_over_window<T: Clone>(
    channel: &Channel<T>,
    window: &FrameWindow,
    role: &'static str,
) -> Result<Channel<T>, ShapeError> {
    let frames = window.frames();
    let (start, end) = (*frames.start(), *frames.end());

    match channel {
        Channel::Static(v) => {
            let mut wps = vec![held(start, v.clone())];
            if end != start {
                wps.push(held(end, v.clone()));
            }
            Ok(Channel::Animated(wps))
        }
        Channel::Animated(wps) => {
            let (Some(first), Some(last)) = (wps.first(), wps.last()) else {
                return Err(ShapeError::EmptyChannel(role));
            };
            let mut out = Vec::with_capacity(wps.len() + 2);
            if first.frame > start {
                out.push(held(start, first.value.clone()));
            }
            out.extend(wps.iter().cloned());
            if last.frame < end {
                out.push(held(end, last.value.clone()));
            }
            Ok(Channel::Animated(out))
        }
    }
}

/// Generates the Lottie value track of a channel.
pub fn value_path<T: Clone>(channel: &Channel<T>) -> Property<T> {
    let wps = match channel {
        Channel::Static(v) => return Property::fixed(v.clone()),
        Channel::Animated(wps) => wps,
    };

    let mut keyframes: Vec<Keyframe<T>> = wps
        .windows(2)
        .map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            let hold = a.after == Interpolation::Constant;
            Keyframe {
                t: a.frame as f32,
                s: Some(a.value.clone()),
                e: Some(b.value.clone()),
                o: Some(if a.after == Interpolation::Ease { EASE_OUT } else { LINEAR_OUT }),
                i: Some(if b.before == Interpolation::Ease { EASE_IN } else { LINEAR_IN }),
                h: hold.then_some(1),
            }
        })
        .collect();

    if let Some(last) = wps.last() {
        keyframes.push(Keyframe {
            t: last.frame as f32,
            s: Some(last.value.clone()),
            e: None,
            i: None,
            o: None,
            h: None,
        });
    }

    Property::animated(keyframes)
}
