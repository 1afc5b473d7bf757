//! Random fill and shifting actors

use super::{Actor, ActorTimer, Reschedule};
use crate::{
    color::{BLACK, Palette, Rgb, rotate_right, smooth_apply},
    random::{RandomSource, pick, random_rgb},
};

const FILL_PERIOD_MS: u32 = 5000;
const SHIFTER_PERIOD_MS: u32 = 5;
const SELECTOR_PERIOD_MS: u32 = 10;

/// Number of blend sub-steps per pixel of rotation
pub const MAX_SHIFT: u8 = 10;

const FULL_CHANNEL: u16 = 256;

fn palette_fill<const N: usize, R: RandomSource>(palette: &Palette, rng: &mut R) -> [Rgb; N] {
    let mut pixels = [BLACK; N];
    for pixel in &mut pixels {
        *pixel = pick(palette.as_slice(), rng).unwrap_or(BLACK);
    }
    pixels
}

fn draw_stored<const N: usize>(leds: &mut [Rgb; N], pixels: &[Rgb; N]) {
    leds.copy_from_slice(pixels);
}

/// Whole strip of random colors, regenerated every few seconds
#[derive(Debug, Clone)]
pub struct RandomFillActor<const N: usize> {
    timer: ActorTimer,
    pixels: [Rgb; N],
}

impl<const N: usize> RandomFillActor<N> {
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut actor = Self {
            timer: ActorTimer::new(FILL_PERIOD_MS),
            pixels: [BLACK; N],
        };
        actor.regenerate(rng);
        actor
    }

    fn regenerate<R: RandomSource>(&mut self, rng: &mut R) {
        for pixel in &mut self.pixels {
            *pixel = random_rgb(rng, FULL_CHANNEL);
        }
    }
}

impl<const N: usize> Actor<N> for RandomFillActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        self.regenerate(rng);
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        draw_stored(leds, &self.pixels);
    }
}

/// Stream of random colors entering at the start of the strip
#[derive(Debug, Clone)]
pub struct RandomShifterActor<const N: usize> {
    timer: ActorTimer,
    pixels: [Rgb; N],
}

impl<const N: usize> RandomShifterActor<N> {
    pub const fn new() -> Self {
        Self {
            timer: ActorTimer::new(SHIFTER_PERIOD_MS),
            pixels: [BLACK; N],
        }
    }
}

impl<const N: usize> Default for RandomShifterActor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Actor<N> for RandomShifterActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        if N > 0 {
            self.pixels.copy_within(..N - 1, 1);
            self.pixels[0] = random_rgb(rng, FULL_CHANNEL);
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        draw_stored(leds, &self.pixels);
    }
}

/// Random palette picks rotating around the strip
#[derive(Debug, Clone)]
pub struct RandomSelectorShifterActor<const N: usize> {
    timer: ActorTimer,
    pixels: [Rgb; N],
}

impl<const N: usize> RandomSelectorShifterActor<N> {
    pub fn new<R: RandomSource>(palette: &Palette, rng: &mut R) -> Self {
        Self {
            timer: ActorTimer::new(SELECTOR_PERIOD_MS),
            pixels: palette_fill(palette, rng),
        }
    }
}

impl<const N: usize> Actor<N> for RandomSelectorShifterActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, _rng: &mut R) -> Reschedule {
        rotate_right(&mut self.pixels);
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        draw_stored(leds, &self.pixels);
    }
}

/// Random palette picks gliding around the strip in blended sub-steps
#[derive(Debug, Clone)]
pub struct RandomSelectorSmoothShifterActor<const N: usize> {
    timer: ActorTimer,
    desired: [Rgb; N],
    shift: u8,
}

impl<const N: usize> RandomSelectorSmoothShifterActor<N> {
    pub fn new<R: RandomSource>(palette: &Palette, rng: &mut R) -> Self {
        Self {
            timer: ActorTimer::new(SELECTOR_PERIOD_MS),
            desired: palette_fill(palette, rng),
            shift: 0,
        }
    }
}

impl<const N: usize> Actor<N> for RandomSelectorSmoothShifterActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, _rng: &mut R) -> Reschedule {
        self.shift = (self.shift + 1) % MAX_SHIFT;
        if self.shift == 0 {
            rotate_right(&mut self.desired);
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        let transition = f32::from(self.shift) / f32::from(MAX_SHIFT);
        smooth_apply(leds, &self.desired, transition);
    }
}
