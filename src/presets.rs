//! Built-in palettes, patterns and animations

use crate::{
    animation::{AnimationClip, Sprite},
    color::{Palette, Pattern, Rgb, rgb_from_u32},
    hex_colors,
};

pub const RED: Rgb = rgb_from_u32(0xFF0000);
pub const GREEN: Rgb = rgb_from_u32(0x00FF00);
pub const BLUE: Rgb = rgb_from_u32(0x0000FF);
pub const WHITE: Rgb = rgb_from_u32(0xFFFFFF);
pub const PINK: Rgb = rgb_from_u32(0xFFC0CB);

/// Default palette: primaries, secondaries, pink and orange
#[allow(clippy::unreadable_literal)]
pub const COLORS: Palette = Palette::from_array(hex_colors![
    0xFF0000, // Red
    0x00FF00, // Green
    0x0000FF, // Blue
    0xFFFF00, // Yellow
    0x00FFFF, // Cyan
    0xFF00FF, // Magenta
    0xFFC0CB, // Pink
    0xFFA500  // Orange
]);

#[allow(clippy::unreadable_literal)]
pub const RAINBOW: Palette = Palette::from_array(hex_colors![
    0xFF0000, // Red
    0xFF7F00, // Orange
    0xFFFF00, // Yellow
    0x00FF00, // Green
    0x0000FF, // Blue
    0x2E2B5F, // Indigo
    0x8B00FF  // Violet
]);

/// White comet with soft edges on both sides
#[allow(clippy::unreadable_literal)]
pub const COMET: Pattern = Pattern::from_array(hex_colors![
    0x000000, 0x010101, 0x101010, 0x202020, 0x404040, 0x808080, 0xC0C0C0, 0xFFFFFF, 0xFFFFFF,
    0xFFFFFF, 0xFFFFFF, 0xFFFFFF, 0xFFFFFF, 0xC0C0C0, 0x808080, 0x404040, 0x202020, 0x101010,
    0x010101, 0x000000
]);

/// Short dim blip, seven pixels wide
#[allow(clippy::unreadable_literal)]
pub const BLIP: Pattern = Pattern::from_array(hex_colors![
    0x000000, 0x010101, 0x101010, 0x404040, 0x101010, 0x010101, 0x000000
]);

#[allow(clippy::unreadable_literal)]
static FIREWORK_FRAMES: [[Rgb; 9]; 10] = [
    hex_colors![
        0x000000, 0x000000, 0x000000, 0x000000, 0xFFFFFF, 0x000000, 0x000000, 0x000000, 0x000000,
    ],
    hex_colors![
        0x000000, 0x000000, 0x000000, 0xC0C0C0, 0xFFFFFF, 0xC0C0C0, 0x000000, 0x000000, 0x000000,
    ],
    hex_colors![
        0x000000, 0x000000, 0x000000, 0xFFFFFF, 0xC0C0C0, 0xFFFFFF, 0x000000, 0x000000, 0x000000,
    ],
    hex_colors![
        0x000000, 0x000000, 0xC0C0C0, 0xC0C0C0, 0x808080, 0xC0C0C0, 0xC0C0C0, 0x000000, 0x000000,
    ],
    hex_colors![
        0x000000, 0x000000, 0xC0C0C0, 0x808080, 0x404040, 0x808080, 0xC0C0C0, 0x000000, 0x000000,
    ],
    hex_colors![
        0x000000, 0x000000, 0x808080, 0x404040, 0x202020, 0x404040, 0x808080, 0x000000, 0x000000,
    ],
    hex_colors![
        0x000000, 0x404040, 0x202020, 0x101010, 0x080808, 0x101010, 0x202020, 0x404040, 0x000000,
    ],
    hex_colors![
        0x202020, 0x101010, 0x080808, 0x040404, 0x040004, 0x040404, 0x080808, 0x101010, 0x202020,
    ],
    hex_colors![
        0x101010, 0x080808, 0x040404, 0x040004, 0x040004, 0x000004, 0x040404, 0x080808, 0x101010,
    ],
    hex_colors![
        0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
    ],
];

static FIREWORK_SPRITES: [Sprite; 10] = [
    Sprite::new(8, &FIREWORK_FRAMES[0]),
    Sprite::new(8, &FIREWORK_FRAMES[1]),
    Sprite::new(8, &FIREWORK_FRAMES[2]),
    Sprite::new(5, &FIREWORK_FRAMES[3]),
    Sprite::new(5, &FIREWORK_FRAMES[4]),
    Sprite::new(5, &FIREWORK_FRAMES[5]),
    Sprite::new(8, &FIREWORK_FRAMES[6]),
    Sprite::new(8, &FIREWORK_FRAMES[7]),
    Sprite::new(8, &FIREWORK_FRAMES[8]),
    Sprite::new(8, &FIREWORK_FRAMES[9]),
];

/// Small white burst blooming out and fading
pub static FIREWORK: AnimationClip = AnimationClip::new(&FIREWORK_SPRITES);
