//! Moving pattern actors
//!
//! A pattern is a short run of colors that travels along the strip. It is
//! drawn either once or tiled over the whole strip with an optional gap
//! between copies.

use super::{Actor, ActorTimer, Reschedule, wrap_offset};
use crate::{
    color::{BLACK, Pattern, Rgb, smooth_apply},
    random::RandomSource,
};

const PATTERN_PERIOD_MS: u32 = 50;
const SMOOTH_PERIOD_MS: u32 = 1;

/// Number of blend sub-steps per pixel of movement
pub const SMOOTH_LEVEL: u8 = 20;

/// Paint `pattern` into `leds` starting at `origin`
///
/// With `repeat`, copies are laid out back to back over the whole strip,
/// leaving `gap` untouched pixels after each copy.
pub(crate) fn paint_pattern<const N: usize>(
    leds: &mut [Rgb; N],
    pattern: &[Rgb],
    origin: usize,
    repeat: bool,
    gap: usize,
) {
    if N == 0 || pattern.is_empty() {
        return;
    }
    if !repeat {
        for (offset, &color) in pattern.iter().enumerate() {
            leds[(origin + offset) % N] = color;
        }
        return;
    }
    let mut offset = 0;
    while offset < N {
        for &color in pattern {
            if offset >= N {
                break;
            }
            leds[(origin + offset) % N] = color;
            offset += 1;
        }
        offset += gap;
    }
}

/// Pattern that jumps `step` pixels every period
#[derive(Debug, Clone)]
pub struct PatternActor<const N: usize> {
    timer: ActorTimer,
    pattern: Pattern,
    position: usize,
    step: i32,
    repeat: bool,
    gap: usize,
}

impl<const N: usize> PatternActor<N> {
    /// Single pattern moving forward one pixel per period
    pub const fn new(pattern: Pattern) -> Self {
        Self {
            timer: ActorTimer::new(PATTERN_PERIOD_MS),
            pattern,
            position: 0,
            step: 1,
            repeat: false,
            gap: 0,
        }
    }

    /// Set the movement per period (negative moves backward)
    #[must_use]
    pub const fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    /// Tile the pattern over the strip with `gap` pixels between copies
    #[must_use]
    pub const fn with_repeat(mut self, gap: usize) -> Self {
        self.repeat = true;
        self.gap = gap;
        self
    }

    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<const N: usize> Actor<N> for PatternActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, _rng: &mut R) -> Reschedule {
        self.position = wrap_offset(self.position, self.step, N);
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        paint_pattern(leds, &self.pattern, self.position, self.repeat, self.gap);
    }
}

/// Pattern that glides one pixel forward in [`SMOOTH_LEVEL`] blended sub-steps
#[derive(Debug, Clone)]
pub struct SmoothPatternActor<const N: usize> {
    timer: ActorTimer,
    pattern: Pattern,
    desired: [Rgb; N],
    position: usize,
    phase: u8,
    repeat: bool,
}

impl<const N: usize> SmoothPatternActor<N> {
    pub fn new(pattern: Pattern) -> Self {
        Self::build(pattern, false)
    }

    /// Tile the pattern over the whole strip
    pub fn repeating(pattern: Pattern) -> Self {
        Self::build(pattern, true)
    }

    fn build(pattern: Pattern, repeat: bool) -> Self {
        let mut desired = [BLACK; N];
        paint_pattern(&mut desired, &pattern, 0, repeat, 0);
        Self {
            timer: ActorTimer::new(SMOOTH_PERIOD_MS),
            pattern,
            desired,
            position: 0,
            phase: 0,
            repeat,
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<const N: usize> Actor<N> for SmoothPatternActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, _rng: &mut R) -> Reschedule {
        self.phase = (self.phase + 1) % SMOOTH_LEVEL;
        if self.phase == 0 {
            self.position = wrap_offset(self.position, 1, N);
            paint_pattern(
                &mut self.desired,
                &self.pattern,
                self.position,
                self.repeat,
                0,
            );
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        let transition = f32::from(self.phase) / f32::from(SMOOTH_LEVEL);
        smooth_apply(leds, &self.desired, transition);
    }
}
