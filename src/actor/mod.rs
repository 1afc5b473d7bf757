//! Actor system with compile-time known actor variants
//!
//! An actor is a self-timed unit that owns one visual behavior. Every
//! outer tick the current actor is advanced: when its period has elapsed
//! it performs one logical step, and in all cases it redraws itself.
//!
//! All actors are stored in [`ActorSlot`] to avoid heap allocations.

mod blender;
mod chaotic;
mod markers;
mod pattern;
mod shifter;
mod solid;
mod splashes;
mod sprite;

pub use blender::{
    RANDOM_BLEND_STEPS, RandomSmoothBlenderActor, SINGLE_BLEND_HOLD_MS, SINGLE_BLEND_STEPS,
    SingleRandomSmoothBlenderActor,
};
pub use chaotic::{ChaoticPatternMovementActor, ChaoticPatternMovementWithRandomTrailActor};
pub use markers::{MARKER_DISTANCE, ShiftRandomColorsActor};
pub use pattern::{PatternActor, SMOOTH_LEVEL, SmoothPatternActor};
pub use shifter::{
    MAX_SHIFT, RandomFillActor, RandomSelectorShifterActor, RandomSelectorSmoothShifterActor,
    RandomShifterActor,
};
pub use solid::{ProportionalColorsActor, SingleColorActor, SingleColorGradientActor};
pub use splashes::DecayingSplashesActor;
pub use sprite::{AnimationActor, MAX_CONCURRENT_PLAYS};

use crate::{color::Rgb, random::RandomSource};

/// Period used by actors that never change on their own
const STATIC_PERIOD_MS: u32 = 1000;

/// How an actor wants to be timed after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reschedule {
    /// Wait one regular period
    Period,
    /// Wait one regular period plus the given pause in milliseconds
    After(u32),
}

/// Period bookkeeping shared by all actors
///
/// Times are wrapping millisecond counters; elapsed time is always taken
/// with wrapping subtraction so the check stays correct when the clock
/// rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorTimer {
    /// Minimum time between logical steps
    pub period: u32,
    last_fire: u32,
    pause: u32,
}

impl ActorTimer {
    pub const fn new(period: u32) -> Self {
        Self::starting_at(period, 0)
    }

    /// Timer that last fired at `last_fire`
    pub const fn starting_at(period: u32, last_fire: u32) -> Self {
        Self {
            period,
            last_fire,
            pause: 0,
        }
    }

    pub const fn last_fire(&self) -> u32 {
        self.last_fire
    }

    /// Check if a step is due at `now`
    pub const fn is_due(&self, now: u32) -> bool {
        now.wrapping_sub(self.last_fire) >= self.period.saturating_add(self.pause)
    }

    /// Record a step at `now`
    pub fn mark_fired(&mut self, now: u32) {
        self.last_fire = now;
        self.pause = 0;
    }

    /// Record a step at `now` and hold the next one back by `ahead` ms
    pub fn postpone(&mut self, now: u32, ahead: u32) {
        self.last_fire = now;
        self.pause = ahead;
    }
}

/// Common actor contract
pub trait Actor<const N: usize> {
    fn timer(&self) -> &ActorTimer;

    fn timer_mut(&mut self) -> &mut ActorTimer;

    /// Perform one logical step
    ///
    /// Called only when the timer is due. Must not draw.
    fn step<R: RandomSource>(&mut self, now: u32, rng: &mut R) -> Reschedule;

    /// Render the current state
    ///
    /// Must be idempotent: drawing twice without a step in between
    /// produces the same buffer.
    fn draw(&self, now: u32, leds: &mut [Rgb; N]);

    /// Step if due, then redraw
    fn advance<R: RandomSource>(&mut self, now: u32, leds: &mut [Rgb; N], rng: &mut R) {
        if self.timer().is_due(now) {
            match self.step(now, rng) {
                Reschedule::Period => self.timer_mut().mark_fired(now),
                Reschedule::After(ahead) => self.timer_mut().postpone(now, ahead),
            }
        }
        self.draw(now, leds);
    }
}

/// Move `position` by `step` around a ring of `len` pixels
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub(crate) fn wrap_offset(position: usize, step: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (position as i64 + i64::from(step)).rem_euclid(len as i64) as usize
}

/// Actor slot - enum containing all possible actors
#[derive(Debug, Clone)]
pub enum ActorSlot<const N: usize> {
    Pattern(PatternActor<N>),
    SmoothPattern(SmoothPatternActor<N>),
    ChaoticPatternMovement(ChaoticPatternMovementActor<N>),
    ChaoticPatternMovementWithRandomTrail(ChaoticPatternMovementWithRandomTrailActor<N>),
    RandomFill(RandomFillActor<N>),
    RandomShifter(RandomShifterActor<N>),
    RandomSelectorShifter(RandomSelectorShifterActor<N>),
    RandomSelectorSmoothShifter(RandomSelectorSmoothShifterActor<N>),
    RandomSmoothBlender(RandomSmoothBlenderActor<N>),
    SingleRandomSmoothBlender(SingleRandomSmoothBlenderActor<N>),
    SingleColorGradient(SingleColorGradientActor<N>),
    DecayingSplashes(DecayingSplashesActor<N>),
    SingleColor(SingleColorActor<N>),
    ShiftRandomColors(ShiftRandomColorsActor<N>),
    ProportionalColors(ProportionalColorsActor<N>),
    Animation(AnimationActor<N>),
}

macro_rules! for_each_actor {
    ($slot:expr, $actor:ident => $body:expr) => {
        match $slot {
            ActorSlot::Pattern($actor) => $body,
            ActorSlot::SmoothPattern($actor) => $body,
            ActorSlot::ChaoticPatternMovement($actor) => $body,
            ActorSlot::ChaoticPatternMovementWithRandomTrail($actor) => $body,
            ActorSlot::RandomFill($actor) => $body,
            ActorSlot::RandomShifter($actor) => $body,
            ActorSlot::RandomSelectorShifter($actor) => $body,
            ActorSlot::RandomSelectorSmoothShifter($actor) => $body,
            ActorSlot::RandomSmoothBlender($actor) => $body,
            ActorSlot::SingleRandomSmoothBlender($actor) => $body,
            ActorSlot::SingleColorGradient($actor) => $body,
            ActorSlot::DecayingSplashes($actor) => $body,
            ActorSlot::SingleColor($actor) => $body,
            ActorSlot::ShiftRandomColors($actor) => $body,
            ActorSlot::ProportionalColors($actor) => $body,
            ActorSlot::Animation($actor) => $body,
        }
    };
}

impl<const N: usize> ActorSlot<N> {
    /// Step the current actor if due, then redraw it
    pub fn advance<R: RandomSource>(&mut self, now: u32, leds: &mut [Rgb; N], rng: &mut R) {
        for_each_actor!(self, actor => actor.advance(now, leds, rng));
    }

    /// Redraw the current actor without stepping
    pub fn draw(&self, now: u32, leds: &mut [Rgb; N]) {
        for_each_actor!(self, actor => actor.draw(now, leds));
    }

    pub fn timer(&self) -> &ActorTimer {
        for_each_actor!(self, actor => actor.timer())
    }

    /// Actor name for external observation
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pattern(_) => "pattern",
            Self::SmoothPattern(_) => "smooth_pattern",
            Self::ChaoticPatternMovement(_) => "chaotic_pattern",
            Self::ChaoticPatternMovementWithRandomTrail(_) => "chaotic_pattern_trail",
            Self::RandomFill(_) => "random_fill",
            Self::RandomShifter(_) => "random_shifter",
            Self::RandomSelectorShifter(_) => "random_selector_shifter",
            Self::RandomSelectorSmoothShifter(_) => "random_selector_smooth_shifter",
            Self::RandomSmoothBlender(_) => "random_smooth_blender",
            Self::SingleRandomSmoothBlender(_) => "single_random_smooth_blender",
            Self::SingleColorGradient(_) => "single_color_gradient",
            Self::DecayingSplashes(_) => "decaying_splashes",
            Self::SingleColor(_) => "single_color",
            Self::ShiftRandomColors(_) => "shift_random_colors",
            Self::ProportionalColors(_) => "proportional_colors",
            Self::Animation(_) => "animation",
        }
    }
}

macro_rules! impl_from_actor {
    ($($variant:ident($ty:ident)),* $(,)?) => {
        $(
            impl<const N: usize> From<$ty<N>> for ActorSlot<N> {
                fn from(actor: $ty<N>) -> Self {
                    Self::$variant(actor)
                }
            }
        )*
    };
}

impl_from_actor!(
    Pattern(PatternActor),
    SmoothPattern(SmoothPatternActor),
    ChaoticPatternMovement(ChaoticPatternMovementActor),
    ChaoticPatternMovementWithRandomTrail(ChaoticPatternMovementWithRandomTrailActor),
    RandomFill(RandomFillActor),
    RandomShifter(RandomShifterActor),
    RandomSelectorShifter(RandomSelectorShifterActor),
    RandomSelectorSmoothShifter(RandomSelectorSmoothShifterActor),
    RandomSmoothBlender(RandomSmoothBlenderActor),
    SingleRandomSmoothBlender(SingleRandomSmoothBlenderActor),
    SingleColorGradient(SingleColorGradientActor),
    DecayingSplashes(DecayingSplashesActor),
    SingleColor(SingleColorActor),
    ShiftRandomColors(ShiftRandomColorsActor),
    ProportionalColors(ProportionalColorsActor),
    Animation(AnimationActor),
);
