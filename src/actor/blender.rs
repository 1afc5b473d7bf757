//! Cross-fading actors
//!
//! Both blenders start from whatever is currently on the strip, so
//! switching to them never produces a hard cut.

use super::{Actor, ActorTimer, Reschedule};
use crate::{
    color::{BLACK, Palette, Rgb, blend},
    random::{RandomSource, pick, pick_other},
};

const RANDOM_BLEND_PERIOD_MS: u32 = 100;
const SINGLE_BLEND_PERIOD_MS: u32 = 10;

/// Number of sub-steps of a per-pixel cross-fade
pub const RANDOM_BLEND_STEPS: u8 = 50;

/// Number of sub-steps of a whole-strip cross-fade
pub const SINGLE_BLEND_STEPS: u8 = 250;

/// Extra pause after a whole-strip cross-fade completes
pub const SINGLE_BLEND_HOLD_MS: u32 = 10_000;

/// Every pixel fades toward its own random palette color
#[derive(Debug, Clone)]
pub struct RandomSmoothBlenderActor<const N: usize> {
    timer: ActorTimer,
    palette: Palette,
    current: [Rgb; N],
    desired: [Rgb; N],
    shift: u8,
}

impl<const N: usize> RandomSmoothBlenderActor<N> {
    /// Create a blender fading out of `seed`
    pub fn new<R: RandomSource>(palette: Palette, seed: &[Rgb; N], rng: &mut R) -> Self {
        let mut actor = Self {
            timer: ActorTimer::new(RANDOM_BLEND_PERIOD_MS),
            palette,
            current: *seed,
            desired: [BLACK; N],
            shift: 0,
        };
        actor.pick_desired(rng);
        actor
    }

    fn pick_desired<R: RandomSource>(&mut self, rng: &mut R) {
        for pixel in &mut self.desired {
            *pixel = pick(self.palette.as_slice(), rng).unwrap_or(BLACK);
        }
    }
}

impl<const N: usize> Actor<N> for RandomSmoothBlenderActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        self.shift = (self.shift + 1) % RANDOM_BLEND_STEPS;
        if self.shift == 0 {
            self.current = self.desired;
            self.pick_desired(rng);
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        let transition = f32::from(self.shift) / f32::from(RANDOM_BLEND_STEPS);
        for ((led, &from), &to) in leds.iter_mut().zip(&self.current).zip(&self.desired) {
            *led = blend(from, to, transition);
        }
    }
}

/// Whole strip fades to one palette color, holds, then moves to another
#[derive(Debug, Clone)]
pub struct SingleRandomSmoothBlenderActor<const N: usize> {
    timer: ActorTimer,
    palette: Palette,
    pixels: [Rgb; N],
    target: Rgb,
    shift: u8,
}

impl<const N: usize> SingleRandomSmoothBlenderActor<N> {
    /// Create a blender fading out of `seed`
    pub fn new<R: RandomSource>(palette: Palette, seed: &[Rgb; N], rng: &mut R) -> Self {
        let target = pick(palette.as_slice(), rng).unwrap_or(BLACK);
        Self {
            timer: ActorTimer::new(SINGLE_BLEND_PERIOD_MS),
            palette,
            pixels: *seed,
            target,
            shift: 0,
        }
    }

    pub const fn target(&self) -> Rgb {
        self.target
    }
}

impl<const N: usize> Actor<N> for SingleRandomSmoothBlenderActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        self.shift = (self.shift + 1) % SINGLE_BLEND_STEPS;
        if self.shift != 0 {
            return Reschedule::Period;
        }
        self.pixels = [self.target; N];
        self.target = pick_other(self.palette.as_slice(), Some(self.target), rng)
            .unwrap_or(self.target);
        Reschedule::After(SINGLE_BLEND_HOLD_MS)
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        let transition = f32::from(self.shift) / f32::from(SINGLE_BLEND_STEPS - 1);
        for (led, &from) in leds.iter_mut().zip(&self.pixels) {
            *led = blend(from, self.target, transition);
        }
    }
}
