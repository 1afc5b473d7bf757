//! Sprite animations
//!
//! A clip is immutable static data shared by any number of concurrent
//! plays. A play only remembers when it was started and resolves the
//! current frame from the elapsed time.

use crate::color::Rgb;

/// Single image shown for a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    /// How long the image stays on screen, in milliseconds
    pub duration: u32,
    pub image: &'static [Rgb],
}

impl Sprite {
    pub const fn new(duration: u32, image: &'static [Rgb]) -> Self {
        Self { duration, image }
    }
}

/// Ordered sequence of timed sprites
#[derive(Debug, Clone, Copy)]
pub struct AnimationClip {
    frames: &'static [Sprite],
}

impl AnimationClip {
    pub const fn new(frames: &'static [Sprite]) -> Self {
        Self { frames }
    }

    pub const fn frames(&self) -> &'static [Sprite] {
        self.frames
    }

    /// Number of pixels covered by the clip
    ///
    /// All frames are expected to share the size of the first one.
    pub fn image_len(&self) -> usize {
        self.frames.first().map_or(0, |frame| frame.image.len())
    }

    /// Sum of all frame durations
    pub fn total_duration(&self) -> u32 {
        self.frames
            .iter()
            .fold(0u32, |total, frame| total.saturating_add(frame.duration))
    }
}

/// One playback of a clip
///
/// Idle until [`AnimationPlay::start`] is called; expires by itself once the
/// elapsed time passes the clip duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationPlay {
    start: Option<u32>,
}

impl AnimationPlay {
    pub const fn new() -> Self {
        Self { start: None }
    }

    /// Start (or restart) playback at `now`
    pub fn start(&mut self, now: u32) {
        self.start = Some(now);
    }

    pub const fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// Image to show at `now`, or `None` when idle or expired
    ///
    /// Elapsed time uses wrapping subtraction, so a play survives the
    /// millisecond clock rolling over.
    pub fn current_image(&self, clip: &AnimationClip, now: u32) -> Option<&'static [Rgb]> {
        let mut remaining = now.wrapping_sub(self.start?);
        for frame in clip.frames {
            if remaining < frame.duration {
                return Some(frame.image);
            }
            remaining -= frame.duration;
        }
        None
    }
}
