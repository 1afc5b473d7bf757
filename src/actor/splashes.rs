//! Decaying splashes
//!
//! Random pixels light up in palette colors and slowly fade to black.

use super::{Actor, ActorTimer, Reschedule};
use crate::{
    color::{Palette, Rgb, decay},
    random::{RandomSource, pick},
};

const SPLASH_PERIOD_MS: u32 = 5;

#[derive(Debug, Clone)]
pub struct DecayingSplashesActor<const N: usize> {
    timer: ActorTimer,
    palette: Palette,
    pixels: [Rgb; N],
    /// Splashes added per step
    amount: u32,
    /// Channel decrease per step
    speed: u8,
}

impl<const N: usize> DecayingSplashesActor<N> {
    /// Create splashes fading out of `seed`
    pub const fn new(amount: u32, speed: u8, palette: Palette, seed: &[Rgb; N]) -> Self {
        Self {
            timer: ActorTimer::new(SPLASH_PERIOD_MS),
            palette,
            pixels: *seed,
            amount,
            speed,
        }
    }
}

impl<const N: usize> Actor<N> for DecayingSplashesActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        for pixel in &mut self.pixels {
            *pixel = decay(*pixel, self.speed);
        }
        if N == 0 {
            return Reschedule::Period;
        }
        for _ in 0..self.amount {
            let index = rng.index(N);
            if let Some(color) = pick(self.palette.as_slice(), rng) {
                self.pixels[index] = color;
            }
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        leds.copy_from_slice(&self.pixels);
    }
}
