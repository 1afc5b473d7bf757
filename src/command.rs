//! Serial command protocol
//!
//! Every command is a single byte:
//! - lowercase color letter: fade the whole strip to that color
//! - uppercase color letter: static gradient in that color
//! - digit `0`-`9`: global brightness, scaled to 0-255
//! - `p`: dump all pixels as hex
//! - `n`: drop the current actor

use core::fmt;

use crate::{
    color::{Rgb, rgb_to_u32},
    math8::digit_to_u8,
    presets,
};

/// Pixels per line in a dump
pub const DUMP_COLUMNS: usize = 16;

/// Colors that can be requested by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    White,
    Pink,
}

impl NamedColor {
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => presets::RED,
            Self::Green => presets::GREEN,
            Self::Blue => presets::BLUE,
            Self::White => presets::WHITE,
            Self::Pink => presets::PINK,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::White => "white",
            Self::Pink => "pink",
        }
    }

    /// Upper-case name, used when reporting gradients
    pub const fn as_upper_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::White => "WHITE",
            Self::Pink => "PINK",
        }
    }

    const fn from_letter(letter: u8) -> Option<Self> {
        Some(match letter {
            b'r' => Self::Red,
            b'g' => Self::Green,
            b'b' => Self::Blue,
            b'w' => Self::White,
            b'i' => Self::Pink,
            _ => return None,
        })
    }
}

/// Live override requested over the command channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fade the whole strip to a color and stay there
    Fade(NamedColor),
    /// Show a static black-to-color gradient
    Gradient(NamedColor),
    /// Set global brightness (0-255)
    Brightness(u8),
    /// Print every pixel
    Dump,
    /// Drop the current actor
    Clear,
}

/// Error returned for a byte that is not a known command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCommand(pub u8);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command byte 0x{:02X}", self.0)
    }
}

impl Command {
    /// Decode a command byte
    pub fn parse(byte: u8) -> Result<Self, UnknownCommand> {
        match byte {
            b'p' => Ok(Self::Dump),
            b'n' => Ok(Self::Clear),
            b'0'..=b'9' => Ok(Self::Brightness(digit_to_u8(byte - b'0'))),
            _ if byte.is_ascii_uppercase() => NamedColor::from_letter(byte.to_ascii_lowercase())
                .map(Self::Gradient)
                .ok_or(UnknownCommand(byte)),
            _ => NamedColor::from_letter(byte)
                .map(Self::Fade)
                .ok_or(UnknownCommand(byte)),
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = UnknownCommand;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::parse(byte)
    }
}

/// Write every pixel as six hex digits, [`DUMP_COLUMNS`] per line
///
/// Values on a line are separated by a space. The dump ends with an empty
/// line.
pub fn dump_pixels<W: fmt::Write>(out: &mut W, leds: &[Rgb]) -> fmt::Result {
    for (i, led) in leds.iter().enumerate() {
        write!(out, "{:06X}", rgb_to_u32(*led))?;
        if i % DUMP_COLUMNS == DUMP_COLUMNS - 1 {
            out.write_str("\n")?;
        } else {
            out.write_str(" ")?;
        }
    }
    out.write_str("\n")
}
