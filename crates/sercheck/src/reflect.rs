//! Bit-order reversal.
//!
//! CRC parameter sets express bit ordering through "reflection": reflected
//! variants reverse each input byte before folding it into the register
//! (`refin`) and reverse the final register before the output XOR (`refout`).
//! This module provides the one primitive both uses share.

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// Bit `i` of the input becomes bit `width - 1 - i` of the output for every
/// `i` in `[0, width)`. Bits at positions `width` and above are ignored, so
/// the result always fits in `width` bits. Reflection is self-inverse:
/// `reflect_bits(reflect_bits(x, w), w) == x` for all `x < 2^w`.
///
/// Callers must pass `width <= 32`.
///
/// # Examples
///
/// ```
/// use sercheck::reflect_bits;
///
/// assert_eq!(reflect_bits(0b1010, 4), 0b0101);
/// assert_eq!(reflect_bits(0x80, 8), 0x01);
/// assert_eq!(reflect_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[must_use]
pub const fn reflect_bits(value: u32, width: u8) -> u32 {
  debug_assert!(width <= 32);
  let mut result = 0u32;
  let mut i = 0u8;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width.wrapping_sub(1).wrapping_sub(i));
    }
    i = i.wrapping_add(1);
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reflect_small_values() {
    assert_eq!(reflect_bits(0b1010, 4), 0b0101);
    assert_eq!(reflect_bits(0b1100, 4), 0b0011);
    assert_eq!(reflect_bits(0xFF, 8), 0xFF);
    assert_eq!(reflect_bits(0x80, 8), 0x01);
    assert_eq!(reflect_bits(0x01, 8), 0x80);
  }

  #[test]
  fn reflect_known_polynomials() {
    // The reflected forms published alongside the normal ones in the catalog.
    assert_eq!(reflect_bits(0x07, 8), 0xE0);
    assert_eq!(reflect_bits(0x31, 8), 0x8C);
    assert_eq!(reflect_bits(0x8005, 16), 0xA001);
    assert_eq!(reflect_bits(0x1021, 16), 0x8408);
    assert_eq!(reflect_bits(0x3D65, 16), 0xA6BC);
    assert_eq!(reflect_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
  }

  #[test]
  fn reflect_is_self_inverse() {
    for width in 1u8..=32 {
      let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
      for value in [0u32, 1, 0x31, 0xFF, 0xABCD, 0xDEAD_BEEF, u32::MAX] {
        let value = value & mask;
        assert_eq!(
          reflect_bits(reflect_bits(value, width), width),
          value,
          "involution failed for value {value:#X} at width {width}"
        );
      }
    }
  }

  #[test]
  fn reflect_ignores_bits_above_width() {
    assert_eq!(reflect_bits(0xFF, 4), reflect_bits(0x0F, 4));
    assert_eq!(reflect_bits(0xFF, 4), 0xF);
    assert_eq!(reflect_bits(0x8C, 5), reflect_bits(0x0C, 5));
  }

  #[test]
  fn reflect_edge_widths() {
    assert_eq!(reflect_bits(0, 32), 0);
    assert_eq!(reflect_bits(1, 1), 1);
    assert_eq!(reflect_bits(1, 32), 0x8000_0000);
    assert_eq!(reflect_bits(u32::MAX, 32), u32::MAX);
  }
}
