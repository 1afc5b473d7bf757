//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use core::fmt;

use embassy_time::{Duration, Instant};

use crate::{Controller, random::RandomSource, strip::PixelSink};

/// Default target frame rate (200 FPS).
///
/// The fastest actors step every millisecond, so the loop runs well above
/// the usual animation rates.
pub const DEFAULT_FPS: u32 = 200;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Convert an instant to the wrapping millisecond clock used by actors
#[allow(clippy::cast_possible_truncation)]
pub const fn wrapping_millis(now: Instant) -> u32 {
    now.as_millis() as u32
}

/// Portable frame scheduler around a [`Controller`].
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(controller);
///
/// loop {
///     let result = scheduler.tick(Instant::now(), &mut serial)?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, S, R, const N: usize, const QUEUE_SIZE: usize>
where
    S: PixelSink<N>,
    R: RandomSource,
{
    controller: Controller<'a, S, R, N, QUEUE_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, S, R, const N: usize, const QUEUE_SIZE: usize> FrameScheduler<'a, S, R, N, QUEUE_SIZE>
where
    S: PixelSink<N>,
    R: RandomSource,
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` for frame timing.
    pub fn new(controller: Controller<'a, S, R, N, QUEUE_SIZE>) -> Self {
        Self::with_frame_duration(controller, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        controller: Controller<'a, S, R, N, QUEUE_SIZE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            controller,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Ticks the controller and presents the strip
    /// 3. Returns the deadline for the next frame
    pub fn tick<W: fmt::Write>(
        &mut self,
        now: Instant,
        console: &mut W,
    ) -> Result<FrameResult, fmt::Error> {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let reported = self.controller.tick(wrapping_millis(now), console);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        reported.map(|()| FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the controller.
    pub fn controller(&self) -> &Controller<'a, S, R, N, QUEUE_SIZE> {
        &self.controller
    }

    /// Get a mutable reference to the controller.
    pub fn controller_mut(&mut self) -> &mut Controller<'a, S, R, N, QUEUE_SIZE> {
        &mut self.controller
    }
}
