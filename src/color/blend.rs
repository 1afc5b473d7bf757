//! Color blending primitives
//!
//! All per-pixel composition used by the actors goes through these helpers.

use super::Rgb;

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix_channel(a: u8, b: u8, amount_a: f32, amount_b: f32) -> u8 {
    let mixed = libm::roundf(f32::from(a) * amount_a + f32::from(b) * amount_b);
    mixed.clamp(0.0, 255.0) as u8
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor, clamped to 0.0-1.0 (0 = all a, 1 = all b)
///
/// Each channel is rounded once from the weighted sum, so blending a
/// color with itself returns it unchanged for any factor.
pub fn blend(a: Rgb, b: Rgb, amount_of_b: f32) -> Rgb {
    let amount_b = if amount_of_b.is_nan() {
        0.0
    } else {
        amount_of_b.clamp(0.0, 1.0)
    };
    let amount_a = 1.0 - amount_b;
    Rgb {
        r: mix_channel(a.r, b.r, amount_a, amount_b),
        g: mix_channel(a.g, b.g, amount_a, amount_b),
        b: mix_channel(a.b, b.b, amount_a, amount_b),
    }
}

/// Blend every pixel of `desired` with its backward neighbour into `leds`
///
/// `leds[i] = blend(desired[i], desired[i - 1], transition)`, where index 0
/// wraps to the last pixel. Advancing `transition` from 0 to 1 slides the
/// desired picture one pixel forward.
pub fn smooth_apply<const N: usize>(leds: &mut [Rgb; N], desired: &[Rgb; N], transition: f32) {
    if N == 0 {
        return;
    }
    let mut previous = desired[N - 1];
    for (led, &current) in leds.iter_mut().zip(desired.iter()) {
        *led = blend(current, previous, transition);
        previous = current;
    }
}

/// Tint every color of `source` with `mask` into `target`
///
/// Each channel becomes `channel * mask_channel / 255`. Only the common
/// prefix of the two slices is written.
#[allow(clippy::cast_possible_truncation)]
pub fn mask_pattern(source: &[Rgb], target: &mut [Rgb], mask: Rgb) {
    let tint = |value: u8, factor: u8| (u16::from(value) * u16::from(factor) / 255) as u8;
    for (dst, src) in target.iter_mut().zip(source) {
        *dst = Rgb {
            r: tint(src.r, mask.r),
            g: tint(src.g, mask.g),
            b: tint(src.b, mask.b),
        };
    }
}

/// Rotate a buffer one position forward, moving the last color to the front
pub fn rotate_right(leds: &mut [Rgb]) {
    if !leds.is_empty() {
        leds.rotate_right(1);
    }
}

/// Fade every channel toward zero by `speed`, stopping at zero
pub const fn decay(color: Rgb, speed: u8) -> Rgb {
    Rgb {
        r: color.r.saturating_sub(speed),
        g: color.g.saturating_sub(speed),
        b: color.b.saturating_sub(speed),
    }
}
