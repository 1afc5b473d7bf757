//! Random number capability
//!
//! Actors never talk to a generator directly. They ask a [`RandomSource`]
//! for integers below a bound, so tests can script the exact sequence.

use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};

use crate::color::Rgb;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Returns an integer in `[0, bound)`, or 0 when `bound` is 0
    fn below(&mut self, bound: u32) -> u32;

    /// Returns an index in `[0, len)`, or 0 when `len` is 0
    #[allow(clippy::cast_possible_truncation)]
    fn index(&mut self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.below(bound) as usize
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    /// Small fast generator seeded from a fixed value
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Deterministic source that replays a fixed sequence
///
/// Each value is reduced modulo the requested bound. The sequence
/// restarts once exhausted; an empty sequence always yields 0.
#[derive(Debug, Clone)]
pub struct ScriptedSource<'a> {
    values: &'a [u32],
    position: usize,
}

impl<'a> ScriptedSource<'a> {
    pub const fn new(values: &'a [u32]) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for ScriptedSource<'_> {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position = (self.position + 1) % self.values.len();
        value % bound
    }
}

/// Pick a uniformly random element
///
/// Returns `None` only when `choices` is empty.
pub fn pick<T: Copy, R: RandomSource>(choices: &[T], rng: &mut R) -> Option<T> {
    if choices.is_empty() {
        return None;
    }
    Some(choices[rng.index(choices.len())])
}

/// Pick a random element different from `current`
///
/// Rejection-samples until another value comes up. A single-element set
/// returns its only element without sampling.
pub fn pick_other<T: Copy + PartialEq, R: RandomSource>(
    choices: &[T],
    current: Option<T>,
    rng: &mut R,
) -> Option<T> {
    match choices {
        [] => None,
        [only] => Some(*only),
        _ => loop {
            let candidate = choices[rng.index(choices.len())];
            if Some(candidate) != current {
                return Some(candidate);
            }
        },
    }
}

/// Random color with every channel in `[0, bound)`
#[allow(clippy::cast_possible_truncation)]
pub fn random_rgb<R: RandomSource>(rng: &mut R, bound: u16) -> Rgb {
    let bound = u32::from(bound.min(256));
    Rgb {
        r: rng.below(bound) as u8,
        g: rng.below(bound) as u8,
        b: rng.below(bound) as u8,
    }
}
