mod blend;
mod list;

pub use blend::{blend, decay, mask_pattern, rotate_right, smooth_apply};
pub use list::{ColorList, PALETTE_CAPACITY, PATTERN_CAPACITY, Palette, PaletteError, Pattern};
use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Create a color array from a list of hex colors (0xRRGGBB format)
#[macro_export]
macro_rules! hex_colors {
    ($($color:expr),* $(,)?) => {
        [
            $($crate::color::rgb_from_u32($color)),*
        ]
    };
}
