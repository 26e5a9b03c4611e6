use synfig_data::model::{AnimationLevel, Channel};

/// Smallest and largest keyed frame seen so far. Only ever widens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameWindow {
    pub first: i32,
    pub last: i32,
}

impl Default for FrameWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameWindow {
    /// A window that has absorbed no frames yet.
    pub fn new() -> Self {
        FrameWindow {
            first: i32::MAX,
            last: i32::MIN,
        }
    }

    pub fn from_range(first: i32, last: i32) -> Self {
        FrameWindow {
            first: first.min(last),
            last: first.max(last),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn include(&mut self, frame: i32) {
        self.first = self.first.min(frame);
        self.last = self.last.max(frame);
    }

    /// Frames covered, or just frame 0 when nothing has been keyed.
    pub fn frames(&self) -> std::ops::RangeInclusive<i32> {
        if self.is_empty() {
            0..=0
        } else {
            self.first..=self.last
        }
    }
}

/// Widens `window` with every waypoint of a fully animated channel.
/// Literal and single-waypoint channels leave it untouched.
pub fn update_frame_window<T>(channel: &Channel<T>, window: &mut FrameWindow) {
    if channel.animation_level() != AnimationLevel::Full {
        return;
    }
    for frame in channel.frames() {
        window.include(frame);
    }
}
