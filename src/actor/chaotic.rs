//! Chaotic pattern movement
//!
//! The pattern walks pixel by pixel toward a random target, rests there
//! for a moment and then heads to a new target.

use core::cmp::Ordering;

use super::{Actor, ActorTimer, Reschedule, wrap_offset};
use crate::{
    color::{BLACK, Pattern, Rgb},
    random::{RandomSource, random_rgb},
};

const MOVE_PERIOD_MS: u32 = 1;
const REST_PERIOD_MS: u32 = 100;
const TRAIL_REST_PERIOD_MS: u32 = 10;

/// Channel bound for trail colors, keeps the trail dim
const TRAIL_CHANNEL_BOUND: u16 = 0x10;

fn direction(from: usize, to: usize) -> Option<i32> {
    match to.cmp(&from) {
        Ordering::Greater => Some(1),
        Ordering::Less => Some(-1),
        Ordering::Equal => None,
    }
}

fn paint_once<const N: usize>(leds: &mut [Rgb; N], pattern: &[Rgb], origin: usize) {
    if N == 0 {
        return;
    }
    for (offset, &color) in pattern.iter().enumerate() {
        leds[(origin + offset) % N] = color;
    }
}

/// Pattern wandering between random targets
#[derive(Debug, Clone)]
pub struct ChaoticPatternMovementActor<const N: usize> {
    timer: ActorTimer,
    pattern: Pattern,
    position: usize,
    step: i32,
    target: usize,
}

impl<const N: usize> ChaoticPatternMovementActor<N> {
    pub const fn new(pattern: Pattern) -> Self {
        Self {
            timer: ActorTimer::new(MOVE_PERIOD_MS),
            pattern,
            position: 0,
            step: 0,
            target: 0,
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn target(&self) -> usize {
        self.target
    }
}

impl<const N: usize> Actor<N> for ChaoticPatternMovementActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        self.timer.period = MOVE_PERIOD_MS;
        self.position = wrap_offset(self.position, self.step, N);
        if self.position == self.target {
            self.target = rng.index(N);
            self.step = direction(self.position, self.target).unwrap_or(0);
            self.timer.period = REST_PERIOD_MS;
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        paint_once(leds, &self.pattern, self.position);
    }
}

/// Wandering pattern that leaves a dim random pixel behind it
#[derive(Debug, Clone)]
pub struct ChaoticPatternMovementWithRandomTrailActor<const N: usize> {
    timer: ActorTimer,
    pattern: Pattern,
    position: usize,
    step: i32,
    target: usize,
    trail: Rgb,
}

impl<const N: usize> ChaoticPatternMovementWithRandomTrailActor<N> {
    pub const fn new(pattern: Pattern) -> Self {
        Self {
            timer: ActorTimer::new(MOVE_PERIOD_MS),
            pattern,
            position: 0,
            step: 0,
            target: 0,
            trail: BLACK,
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn trail(&self) -> Rgb {
        self.trail
    }
}

impl<const N: usize> Actor<N> for ChaoticPatternMovementWithRandomTrailActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, _now: u32, rng: &mut R) -> Reschedule {
        self.timer.period = MOVE_PERIOD_MS;
        // Keep the previous heading while standing on the target
        if let Some(step) = direction(self.position, self.target) {
            self.step = step;
        }
        self.position = wrap_offset(self.position, self.step, N);
        if self.position == self.target {
            self.target = rng.index(N);
            self.trail = random_rgb(rng, TRAIL_CHANNEL_BOUND);
            self.timer.period = TRAIL_REST_PERIOD_MS;
        }
        Reschedule::Period
    }

    fn draw(&self, _now: u32, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        paint_once(leds, &self.pattern, self.position);
        match self.step.cmp(&0) {
            Ordering::Less => {
                leds[(self.position + self.pattern.len()) % N] = self.trail;
            }
            Ordering::Greater => {
                leds[(self.position + N - 1) % N] = self.trail;
            }
            Ordering::Equal => {}
        }
    }
}
