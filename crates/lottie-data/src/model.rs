use serde::{Serialize, Serializer};

pub type Vec2 = [f32; 2];

/// Animated property wrapper (`{"a": .., "k": ..}`).
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Property<T> {
    pub a: u8,
    #[serde(skip_serializing_if = "Value::is_default")]
    pub k: Value<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ix: Option<u32>,
}

impl<T> Default for Property<T> {
    fn default() -> Self {
        Property {
            a: 0,
            k: Value::Default,
            ix: None,
        }
    }
}

impl<T> Property<T> {
    pub fn fixed(value: T) -> Self {
        Property {
            a: 0,
            k: Value::Static(value),
            ix: None,
        }
    }

    pub fn animated(keyframes: Vec<Keyframe<T>>) -> Self {
        Property {
            a: 1,
            k: Value::Animated(keyframes),
            ix: None,
        }
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        match &self.k {
            Value::Animated(kfs) => kfs,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Default,
    Static(T),
    Animated(Vec<Keyframe<T>>),
}

impl<T> Value<T> {
    pub fn is_default(&self) -> bool {
        matches!(self, Value::Default)
    }
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Default
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Default => serializer.serialize_none(),
            Value::Static(v) => v.serialize(serializer),
            Value::Animated(kfs) => kfs.serialize(serializer),
        }
    }
}

/// A value keyframe. Easing handles live on the keyframe that starts the
/// segment: `o` leaves this key, `i` arrives at the next one.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Keyframe<T> {
    pub t: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i: Option<Vec2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o: Option<Vec2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u8>,
}

/// Bezier path data of a shape: in-tangents, out-tangents, vertices, closed flag.
///
/// `i[n]`, `o[n]` and `v[n]` always describe the same point.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct BezierPath {
    pub i: Vec<Vec2>,
    pub o: Vec<Vec2>,
    pub v: Vec<Vec2>,
    pub c: bool,
}

impl BezierPath {
    pub fn new(closed: bool) -> Self {
        BezierPath {
            c: closed,
            ..Default::default()
        }
    }

    pub fn push(&mut self, tan_in: Vec2, tan_out: Vec2, vertex: Vec2) {
        self.i.push(tan_in);
        self.o.push(tan_out);
        self.v.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// True when the three point arrays line up.
    pub fn is_consistent(&self) -> bool {
        self.i.len() == self.v.len() && self.o.len() == self.v.len()
    }
}

/// Scalar easing handle of a shape keyframe (`{"x": .., "y": ..}`).
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Easing {
    pub x: f32,
    pub y: f32,
}

impl Easing {
    pub const fn splat(v: f32) -> Self {
        Easing { x: v, y: v }
    }
}

/// One segment of an animated shape: the path at the start (`s`) and at the
/// end (`e`) of the span beginning at frame `t`.
///
/// `t` is absent until the block is stamped.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ShapeKeyframe {
    pub i: Easing,
    pub o: Easing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<f32>,
    pub s: Vec<BezierPath>,
    pub e: Vec<BezierPath>,
}

impl ShapeKeyframe {
    pub fn start(&self) -> Option<&BezierPath> {
        self.s.first()
    }

    pub fn end(&self) -> Option<&BezierPath> {
        self.e.first()
    }
}

/// `ks` of a Lottie path shape: either a single path or a list of shape keyframes.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ShapeProperty {
    pub a: u8,
    pub k: ShapeValue,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ShapeValue {
    Animated(Vec<ShapeKeyframe>),
    Static(BezierPath),
}

impl ShapeProperty {
    pub fn fixed(path: BezierPath) -> Self {
        ShapeProperty {
            a: 0,
            k: ShapeValue::Static(path),
        }
    }

    pub fn animated(blocks: Vec<ShapeKeyframe>) -> Self {
        ShapeProperty {
            a: 1,
            k: ShapeValue::Animated(blocks),
        }
    }
}

/// Lottie path shape item (`"ty": "sh"`).
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PathShape {
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nm: Option<String>,
    pub ks: ShapeProperty,
}

impl PathShape {
    pub fn new(nm: Option<String>, ks: ShapeProperty) -> Self {
        PathShape {
            ty: "sh".to_string(),
            nm,
            ks,
        }
    }
}
