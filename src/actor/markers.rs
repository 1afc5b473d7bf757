//! Shifting color markers
//!
//! The strip is split into segments of [`MARKER_DISTANCE`] pixels. In each
//! segment a marker swings out from the middle, alternating sides, and
//! paints over the previous color. Once a segment is covered a new color
//! is picked.

use super::{Actor, ActorTimer, Reschedule};
use crate::{
    color::{BLACK, Palette, Rgb},
    random::{RandomSource, pick, pick_other},
};

const MARKER_PERIOD_MS: u32 = 50;

/// Length of one marker segment
pub const MARKER_DISTANCE: usize = 50;

#[derive(Debug, Clone)]
pub struct ShiftRandomColorsActor<const N: usize> {
    timer: ActorTimer,
    palette: Palette,
    color: Rgb,
    position: usize,
}

impl<const N: usize> ShiftRandomColorsActor<N> {
    pub fn new<R: RandomSource>(palette: Palette, rng: &mut R) -> Self {
        let color = pick(palette.as_slice(), rng).unwrap_or(BLACK);
        Self {
            timer: ActorTimer::new(MARKER_PERIOD_MS),
            palette,
            color,
            position: 0,
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Marker offset inside a segment for the current position
    const fn marker_offset(&self) -> usize {
        let half = MARKER_DISTANCE / 2;
        if self.position % 2 == 0 {
            half + self.position / 2
        } else {
            half - self.position / 2 - 1
        }
    }
}

impl<const N: usize> Actor<N> for ShiftRandomColorsActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        self.position += 1;
        if self.position >= MARKER_DISTANCE {
            self.position = 0;
            self.color =
                pick_other(self.palette.as_slice(), Some(self.color), rng).unwrap_or(self.color);
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        let offset = self.marker_offset();
        for segment in (0..N).step_by(MARKER_DISTANCE) {
            if let Some(led) = leds.get_mut(segment + offset) {
                *led = self.color;
            }
        }
    }
}
