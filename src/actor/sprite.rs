//! Sprite animation actor
//!
//! Keeps a fixed number of independent plays of one clip. Every period
//! the next play in round-robin order is restarted at a random position,
//! so several copies of the animation overlap at different stages.

use super::{Actor, ActorTimer, Reschedule};
use crate::{
    animation::{AnimationClip, AnimationPlay},
    color::Rgb,
    random::RandomSource,
};

const ANIMATION_PERIOD_MS: u32 = 20;

/// Maximum number of plays an actor keeps alive at once
pub const MAX_CONCURRENT_PLAYS: usize = 16;

#[derive(Debug, Clone, Copy, Default)]
struct Placement {
    play: AnimationPlay,
    position: usize,
}

#[derive(Debug, Clone)]
pub struct AnimationActor<const N: usize> {
    timer: ActorTimer,
    clip: &'static AnimationClip,
    plays: [Placement; MAX_CONCURRENT_PLAYS],
    count: usize,
    next: usize,
}

impl<const N: usize> AnimationActor<N> {
    /// Create an actor running up to `concurrency` plays of `clip`
    ///
    /// `concurrency` is clamped to 1..=[`MAX_CONCURRENT_PLAYS`].
    pub fn new(clip: &'static AnimationClip, concurrency: usize) -> Self {
        Self {
            timer: ActorTimer::new(ANIMATION_PERIOD_MS),
            clip,
            plays: [Placement::default(); MAX_CONCURRENT_PLAYS],
            count: concurrency.clamp(1, MAX_CONCURRENT_PLAYS),
            next: 0,
        }
    }

    pub const fn concurrency(&self) -> usize {
        self.count
    }

    fn active(&self) -> &[Placement] {
        &self.plays[..self.count]
    }
}

impl<const N: usize> Actor<N> for AnimationActor<N> {
    fn timer(&self) -> &ActorTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut ActorTimer {
        &mut self.timer
    }

    fn step<R: RandomSource>(&mut self, now: u32, rng: &mut R) -> Reschedule {
        let size = self.clip.image_len();
        if size > N {
            return Reschedule::Period;
        }
        let placement = &mut self.plays[self.next];
        placement.play.start(now);
        placement.position = rng.index(N - size + 1);
        self.next = (self.next + 1) % self.count;
        Reschedule::Period
    }

    fn draw(&self, now: u32, leds: &mut [Rgb; N]) {
        for placement in self.active() {
            let Some(image) = placement.play.current_image(self.clip, now) else {
                continue;
            };
            let Some(area) = leds.get_mut(placement.position..placement.position + image.len())
            else {
                continue;
            };
            area.copy_from_slice(image);
        }
    }
}
