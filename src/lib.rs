#![no_std]

pub mod actor;
pub mod animation;
pub mod channel;
pub mod color;
pub mod command;
pub mod controller;
pub mod frame_scheduler;
pub mod math8;
pub mod presets;
pub mod random;
pub mod strategy;
pub mod strip;

pub use actor::{Actor, ActorSlot, ActorTimer, Reschedule};
pub use animation::{AnimationClip, AnimationPlay, Sprite};
pub use channel::{CommandChannel, CommandReceiver, CommandSender};
pub use command::{Command, NamedColor, UnknownCommand};
pub use controller::{Controller, ControllerConfig};
pub use frame_scheduler::FrameScheduler;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use strategy::{RotationConfig, Scheduler, Strategy};
pub use strip::{PixelSink, Strip};

pub use color::{Palette, Pattern, Rgb};
pub use embassy_time::{Duration, Instant};

/// Strip length of the reference installation
pub const DEFAULT_LED_COUNT: usize = 300;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The strip is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
