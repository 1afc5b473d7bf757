use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::actor::{SingleColorGradientActor, SingleRandomSmoothBlenderActor};
use crate::channel::CommandReceiver;
use crate::color::Palette;
use crate::command::{Command, dump_pixels};
use crate::random::RandomSource;
use crate::strategy::{RotationConfig, Scheduler, Strategy};
use crate::strip::PixelSink;

/// Brightness applied at boot
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Strategy rotation settings
    pub rotation: RotationConfig,
    /// Initial global brightness
    pub brightness: u8,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            rotation: RotationConfig::default(),
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

/// Controller - the main loop step
///
/// One [`Controller::tick`] handles at most one pending command byte,
/// rotates the strategy when due, advances the current actor and presents
/// the strip. Human-readable responses go to the console passed to `tick`.
pub struct Controller<'a, S, R, const N: usize, const QUEUE_SIZE: usize>
where
    S: PixelSink<N>,
    R: RandomSource,
{
    // External dependencies
    commands: CommandReceiver<'a, QUEUE_SIZE>,
    strip: S,
    rng: R,

    // Internal state
    scheduler: Scheduler<N>,
}

impl<'a, S, R, const N: usize, const QUEUE_SIZE: usize> Controller<'a, S, R, N, QUEUE_SIZE>
where
    S: PixelSink<N>,
    R: RandomSource,
{
    pub fn new(
        commands: CommandReceiver<'a, QUEUE_SIZE>,
        mut strip: S,
        rng: R,
        config: ControllerConfig,
    ) -> Self {
        strip.set_brightness(config.brightness);
        Self {
            commands,
            strip,
            rng,
            scheduler: Scheduler::new(config.rotation),
        }
    }

    pub const fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    pub const fn scheduler(&self) -> &Scheduler<N> {
        &self.scheduler
    }

    /// Process one frame at `now` (wrapping milliseconds)
    ///
    /// The frame is always presented; console write failures are reported
    /// afterwards.
    pub fn tick<W: fmt::Write>(&mut self, now: u32, console: &mut W) -> fmt::Result {
        let commands = self.process_command(now, console);
        let rotation = self.rotate(now, console);

        self.scheduler
            .advance(now, self.strip.pixels_mut(), &mut self.rng);
        self.strip.present();

        commands.and(rotation)
    }

    /// Take one pending byte from the channel (non-blocking)
    fn process_command<W: fmt::Write>(&mut self, now: u32, console: &mut W) -> fmt::Result {
        let Ok(byte) = self.commands.try_receive() else {
            return Ok(());
        };
        // Any input counts as activity, even if it is not understood
        self.scheduler.touch(now);
        match Command::parse(byte) {
            Ok(command) => self.execute(command, now, console),
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller.process_command] {}", _err);
                writeln!(console, "Unknown command")
            }
        }
    }

    fn rotate<W: fmt::Write>(&mut self, now: u32, console: &mut W) -> fmt::Result {
        let Some(strategy) = self
            .scheduler
            .update(now, self.strip.pixels(), &mut self.rng)
        else {
            return Ok(());
        };
        Self::report_strategy(strategy, console)
    }

    fn report_strategy<W: fmt::Write>(strategy: Strategy, console: &mut W) -> fmt::Result {
        writeln!(console, "Switching to strategy {}", strategy.id())
    }

    /// Apply a command immediately
    pub fn execute<W: fmt::Write>(
        &mut self,
        command: Command,
        now: u32,
        console: &mut W,
    ) -> fmt::Result {
        #[cfg(feature = "esp32-log")]
        println!("[Controller.execute] {:?}", command);

        match command {
            Command::Fade(color) => {
                self.scheduler.set_single_color(color.rgb());
                let actor = SingleRandomSmoothBlenderActor::new(
                    Palette::single(color.rgb()),
                    self.strip.pixels(),
                    &mut self.rng,
                );
                self.scheduler.replace(actor.into(), now);
                writeln!(console, "{}", color.as_str())
            }
            Command::Gradient(color) => {
                let actor = SingleColorGradientActor::new(color.rgb());
                self.scheduler.replace(actor.into(), now);
                writeln!(console, "{}", color.as_upper_str())
            }
            Command::Brightness(brightness) => {
                self.strip.set_brightness(brightness);
                writeln!(console, "Setting brightness to {brightness}")
            }
            Command::Dump => dump_pixels(console, self.strip.pixels()),
            Command::Clear => {
                self.scheduler.clear();
                Ok(())
            }
        }
    }
}
