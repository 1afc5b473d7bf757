/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Map a digit (0-9) onto the full 8-bit range
#[allow(clippy::cast_possible_truncation)]
pub const fn digit_to_u8(digit: u8) -> u8 {
    let digit = if digit > 9 { 9 } else { digit };
    (digit as u16 * 255 / 9) as u8
}
