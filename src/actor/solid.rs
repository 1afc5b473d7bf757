//! Static color actors
//!
//! These never change on their own; their step only keeps the timer
//! running.

use super::{Actor, ActorTimer, Reschedule, STATIC_PERIOD_MS};
use crate::{
    color::{BLACK, Palette, Rgb, blend},
    random::RandomSource,
};

/// Fills the whole strip with one color
#[derive(Debug, Clone)]
pub struct SingleColorActor<const N: usize> {
    timer: ActorTimer,
    color: Rgb,
}

impl<const N: usize> SingleColorActor<N> {
    pub const fn new(color: Rgb) -> Self {
        Self {
            timer: ActorTimer::new(STATIC_PERIOD_MS),
            color,
        }
    }
}

impl<const N: usize> Actor<N> for SingleColorActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, _rng: &mut R) -> Reschedule {
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        leds.fill(self.color);
    }
}

/// Spatial gradient from black at the start to the color at the end
#[derive(Debug, Clone)]
pub struct SingleColorGradientActor<const N: usize> {
    timer: ActorTimer,
    color: Rgb,
}

impl<const N: usize> SingleColorGradientActor<N> {
    pub const fn new(color: Rgb) -> Self {
        Self {
            timer: ActorTimer::new(STATIC_PERIOD_MS),
            color,
        }
    }
}

impl<const N: usize> Actor<N> for SingleColorGradientActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, _rng: &mut R) -> Reschedule {
        Reschedule::Period
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = blend(BLACK, self.color, i as f32 / N as f32);
        }
    }
}

/// Palette spread over the strip as consecutive linear gradients
///
/// The strip is split into `len - 1` equal segments, each fading from one
/// palette color to the next. A single-color palette fills the strip.
#[derive(Debug, Clone)]
pub struct ProportionalColorsActor<const N: usize> {
    timer: ActorTimer,
    palette: Palette,
}

impl<const N: usize> ProportionalColorsActor<N> {
    pub const fn new(palette: Palette) -> Self {
        Self {
            timer: ActorTimer::new(STATIC_PERIOD_MS),
            palette,
        }
    }
}

impl<const N: usize> Actor<N> for ProportionalColorsActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, _rng: &mut R) -> Reschedule {
        Reschedule::Period
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        let colors = self.palette.as_slice();
        if colors.len() < 2 {
            leds.fill(colors.first().copied().unwrap_or(BLACK));
            return;
        }
        let segments = colors.len() - 1;
        let segment_len = N as f32 / segments as f32;
        for (i, led) in leds.iter_mut().enumerate() {
            let segment = ((i as f32 / segment_len) as usize).min(segments - 1);
            let offset = i as f32 - segment_len * segment as f32;
            *led = blend(colors[segment], colors[segment + 1], offset / segment_len);
        }
    }
}
