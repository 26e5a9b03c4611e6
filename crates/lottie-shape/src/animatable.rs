use glam::Vec2;
use lottie_data::model::{Property, Value};

pub trait Interpolatable: Sized + Clone {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolatable for [f32; 2] {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::from_array(*self)
            .lerp(Vec2::from_array(*other), t)
            .to_array()
    }
}

/// Eased progress for linear progress `x` on the timing curve through
/// (0,0), `p1`, `p2`, (1,1).
///
/// `x` is clamped to `[0, 1]`; the curve parameter is found by Newton
/// iteration on the x polynomial.
pub fn solve_cubic_bezier(p1: Vec2, p2: Vec2, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson
    let mut t = x;
    for _ in 0..8 {
        let one_minus_t = 1.0 - t;
        let x_est = 3.0 * one_minus_t * one_minus_t * t * p1.x
            + 3.0 * one_minus_t * t * t * p2.x
            + t * t * t;

        let err = x_est - x;
        if err.abs() < 1e-4 {
            break;
        }

        let dx_dt = 3.0 * one_minus_t * one_minus_t * p1.x
            + 6.0 * one_minus_t * t * (p2.x - p1.x)
            + 3.0 * t * t * (1.0 - p2.x);

        if dx_dt.abs() < 1e-6 {
            break;
        }
        t -= err / dx_dt;
    }

    let one_minus_t = 1.0 - t;
    3.0 * one_minus_t * one_minus_t * t * p1.y + 3.0 * one_minus_t * t * t * p2.y + t * t * t
}

/// Evaluates generated value tracks.
pub struct Animator;

impl Animator {
    /// Value of `prop` at `frame`; held before the first and after the last key.
    pub fn resolve<T>(prop: &Property<T>, frame: f32, default: T) -> T
    where
        T: Interpolatable,
    {
        match &prop.k {
            Value::Default => default,
            Value::Static(v) => v.clone(),
            Value::Animated(keyframes) => {
                if keyframes.is_empty() {
                    return default;
                }

                // First keyframe with kf.t > frame; the segment is [idx-1, idx].
                let idx = keyframes.partition_point(|kf| kf.t <= frame);

                if idx == 0 {
                    return keyframes[0].s.clone().unwrap_or(default);
                }

                let len = keyframes.len();
                if idx >= len {
                    let last = &keyframes[len - 1];
                    return last.e.clone().or_else(|| last.s.clone()).unwrap_or(default);
                }

                let kf_start = &keyframes[idx - 1];
                let kf_end = &keyframes[idx];

                let start_val = kf_start.s.clone().unwrap_or(default);
                let end_val = kf_start
                    .e
                    .clone()
                    .or_else(|| kf_end.s.clone())
                    .unwrap_or_else(|| start_val.clone());

                if kf_start.h == Some(1) {
                    return start_val;
                }

                let duration = kf_end.t - kf_start.t;
                if duration <= 0.0 {
                    return start_val;
                }

                let p1 = kf_start.o.map(Vec2::from_array).unwrap_or(Vec2::ZERO);
                let p2 = kf_start.i.map(Vec2::from_array).unwrap_or(Vec2::ONE);
                let local_t = solve_cubic_bezier(p1, p2, (frame - kf_start.t) / duration);

                start_val.lerp(&end_val, local_t)
            }
        }
    }
}
