use crate::DataError;
use serde::{Deserialize, Deserializer, Serialize};

/// Synfig interpolation kinds attached to either side of a waypoint.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Clamped,
    Tcb,
    Constant,
    Ease,
    Linear,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Waypoint<T> {
    pub frame: i32,
    pub value: T,
    #[serde(default)]
    pub before: Interpolation,
    #[serde(default)]
    pub after: Interpolation,
}

impl<T> Waypoint<T> {
    pub fn new(frame: i32, value: T) -> Self {
        Waypoint {
            frame,
            value,
            before: Interpolation::default(),
            after: Interpolation::default(),
        }
    }

    /// Waypoint at `time` seconds, snapped to the nearest frame.
    pub fn from_seconds(time: f32, fps: f32, value: T) -> Self {
        Waypoint::new((time * fps).round() as i32, value)
    }

    pub fn with_interpolation(mut self, before: Interpolation, after: Interpolation) -> Self {
        self.before = before;
        self.after = after;
        self
    }
}

/// How much of a channel is keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnimationLevel {
    /// A literal value.
    None,
    /// An animated node holding a single waypoint.
    Single,
    /// Two or more waypoints.
    Full,
}

/// A parameter value as delivered by the parser: literal or waypoint list.
///
/// Waypoints are kept in ascending frame order, both when built with
/// [`Channel::animated`] and when decoded.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Channel<T> {
    Static(T),
    Animated(Vec<Waypoint<T>>),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawChannel<T> {
    Static(T),
    Animated(Vec<Waypoint<T>>),
}

impl<'de, T> Deserialize<'de> for Channel<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawChannel::deserialize(deserializer)? {
            RawChannel::Static(v) => Channel::Static(v),
            RawChannel::Animated(wps) => Channel::animated(wps),
        })
    }
}

impl<T> Channel<T> {
    /// Builds an animated channel, sorting the waypoints by frame.
    pub fn animated(mut waypoints: Vec<Waypoint<T>>) -> Self {
        waypoints.sort_by_key(|w| w.frame);
        Channel::Animated(waypoints)
    }

    pub fn animation_level(&self) -> AnimationLevel {
        match self {
            Channel::Static(_) => AnimationLevel::None,
            Channel::Animated(wps) if wps.len() < 2 => AnimationLevel::Single,
            Channel::Animated(_) => AnimationLevel::Full,
        }
    }

    pub fn waypoints(&self) -> &[Waypoint<T>] {
        match self {
            Channel::Static(_) => &[],
            Channel::Animated(wps) => wps,
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = i32> + '_ {
        self.waypoints().iter().map(|w| w.frame)
    }
}

impl<T: Clone> Channel<T> {
    /// Value held at `frame` with step semantics: the last waypoint at or
    /// before the frame, or the first waypoint when the frame precedes them all.
    pub fn step_at(&self, frame: i32) -> Option<T> {
        match self {
            Channel::Static(v) => Some(v.clone()),
            Channel::Animated(wps) => {
                let idx = wps.partition_point(|w| w.frame <= frame);
                let wp = if idx == 0 { wps.first() } else { wps.get(idx - 1) };
                wp.map(|w| w.value.clone())
            }
        }
    }

    pub fn first_value(&self) -> Option<T> {
        match self {
            Channel::Static(v) => Some(v.clone()),
            Channel::Animated(wps) => wps.first().map(|w| w.value.clone()),
        }
    }

    pub fn last_value(&self) -> Option<T> {
        match self {
            Channel::Static(v) => Some(v.clone()),
            Channel::Animated(wps) => wps.last().map(|w| w.value.clone()),
        }
    }
}

impl Channel<bool> {
    pub fn bool_at(&self, frame: i32) -> Option<bool> {
        self.step_at(frame)
    }
}

/// Typed payload of a parameter node.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NodeValue {
    Real(Channel<f32>),
    Angle(Channel<f32>),
    Bool(Channel<bool>),
    Vector(Channel<[f32; 2]>),
    Composite(Vec<ParamNode>),
}

impl NodeValue {
    pub fn kind(&self) -> &'static str {
        match self {
            NodeValue::Real(_) => "real",
            NodeValue::Angle(_) => "angle",
            NodeValue::Bool(_) => "bool",
            NodeValue::Vector(_) => "vector",
            NodeValue::Composite(_) => "composite",
        }
    }
}

/// A node of the Synfig parameter tree.
///
/// `tag` is the node's role inside its parent (`radius`, `theta`, `t1`, ...);
/// `name` tells same-tagged siblings apart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParamNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub value: NodeValue,
}

impl ParamNode {
    pub fn new(tag: impl Into<String>, value: NodeValue) -> Self {
        ParamNode {
            tag: tag.into(),
            name: None,
            value,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn children(&self) -> &[ParamNode] {
        match &self.value {
            NodeValue::Composite(children) => children,
            _ => &[],
        }
    }

    pub fn child(&self, tag: &str) -> Option<&ParamNode> {
        self.children().iter().find(|c| c.tag == tag)
    }

    /// Removes every child tagged `new_child.tag` (restricted to `name` when
    /// given) and inserts `new_child` as the first child.
    pub fn replace_child(&mut self, new_child: ParamNode, name: Option<&str>) -> Result<(), DataError> {
        let tag = self.tag.clone();
        let NodeValue::Composite(children) = &mut self.value else {
            return Err(DataError::NotComposite(tag));
        };
        children.retain(|c| {
            let same_tag = c.tag == new_child.tag;
            match name {
                Some(n) => !(same_tag && c.name.as_deref() == Some(n)),
                None => !same_tag,
            }
        });
        children.insert(0, new_child);
        Ok(())
    }
}
