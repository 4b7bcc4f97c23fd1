//! Checksum rendering: hex and binary strings.
//!
//! The hex renderer is byte-order aware so multi-byte checksums can be
//! displayed the way they travel on the wire. Protocols that transmit the
//! low byte first (MODBUS RTU being the usual case) want the swapped form.

use alloc::{format, string::String, vec::Vec};
use core::fmt::Write as _;

/// Byte order for rendering multi-byte checksums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ByteOrder {
  /// Most significant byte first.
  #[default]
  Normal,
  /// Least significant byte first.
  Swapped,
}

/// Render `value` as `byte_count` uppercase hex byte pairs.
///
/// Swapping reorders whole bytes, never nibbles: MODBUS `0x4B37` renders as
/// `"4B37"` normal and `"374B"` swapped. Values narrower than one byte
/// ignore the order and render as a single zero-padded pair.
///
/// # Examples
///
/// ```
/// use sercheck::{hex_string, ByteOrder};
///
/// assert_eq!(hex_string(0x4B37, 2, ByteOrder::Normal), "4B37");
/// assert_eq!(hex_string(0x4B37, 2, ByteOrder::Swapped), "374B");
/// assert_eq!(hex_string(0x0C, 1, ByteOrder::Swapped), "0C");
/// ```
#[must_use]
pub fn hex_string(value: u32, byte_count: usize, order: ByteOrder) -> String {
  if byte_count <= 1 {
    return format!("{:02X}", value as u8);
  }

  let mut bytes = Vec::with_capacity(byte_count);
  let mut rest = value;
  for _ in 0..byte_count {
    bytes.push((rest & 0xFF) as u8);
    rest >>= 8;
  }
  // Extraction above is least significant first.
  if order == ByteOrder::Normal {
    bytes.reverse();
  }

  let mut out = String::with_capacity(byte_count * 2);
  for byte in bytes {
    // Writing to a String cannot fail.
    let _ = write!(out, "{byte:02X}");
  }
  out
}

/// Render `value` as exactly `width` binary digits.
///
/// Byte order does not apply here; the binary form always reads most
/// significant bit first.
///
/// # Examples
///
/// ```
/// use sercheck::bin_string;
///
/// assert_eq!(bin_string(0x4B37, 16), "0100101100110111");
/// assert_eq!(bin_string(0xC, 4), "1100");
/// ```
#[must_use]
pub fn bin_string(value: u32, width: u8) -> String {
  let width = usize::from(width);
  format!("{value:0width$b}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hex_normal_is_most_significant_first() {
    assert_eq!(hex_string(0xABCD, 2, ByteOrder::Normal), "ABCD");
    assert_eq!(hex_string(0xCBF4_3926, 4, ByteOrder::Normal), "CBF43926");
  }

  #[test]
  fn hex_swapped_reverses_bytes_not_nibbles() {
    assert_eq!(hex_string(0xABCD, 2, ByteOrder::Swapped), "CDAB");
    assert_eq!(hex_string(0xCBF4_3926, 4, ByteOrder::Swapped), "2639F4CB");
  }

  #[test]
  fn hex_single_byte_ignores_order() {
    assert_eq!(hex_string(0x5A, 1, ByteOrder::Normal), "5A");
    assert_eq!(hex_string(0x5A, 1, ByteOrder::Swapped), "5A");
    assert_eq!(hex_string(0x07, 1, ByteOrder::Normal), "07");
  }

  #[test]
  fn hex_preserves_leading_zeros() {
    assert_eq!(hex_string(0x0001, 2, ByteOrder::Normal), "0001");
    assert_eq!(hex_string(0x0001, 2, ByteOrder::Swapped), "0100");
    assert_eq!(hex_string(0, 4, ByteOrder::Normal), "00000000");
  }

  #[test]
  fn hex_length_is_two_per_byte() {
    for byte_count in 1..=4 {
      for order in [ByteOrder::Normal, ByteOrder::Swapped] {
        assert_eq!(hex_string(0xDEAD_BEEF, byte_count, order).len(), byte_count * 2);
      }
    }
  }

  #[test]
  fn bin_has_exactly_width_digits() {
    assert_eq!(bin_string(0x4B37, 16), "0100101100110111");
    assert_eq!(bin_string(0xC, 4), "1100");
    assert_eq!(bin_string(0x03, 5), "00011");
    assert_eq!(bin_string(0, 7), "0000000");
    for width in [4u8, 5, 6, 7, 8, 16, 32] {
      assert_eq!(bin_string(u32::MAX >> (32 - u32::from(width)), width).len(), usize::from(width));
    }
  }

  #[test]
  fn bin_parses_back_to_value() {
    for value in [0u32, 1, 0x4B37, 0xFFFF, 0xCBF4_3926] {
      let rendered = bin_string(value, 32);
      assert_eq!(u32::from_str_radix(&rendered, 2).unwrap(), value);
    }
  }

  #[test]
  fn default_order_is_normal() {
    assert_eq!(ByteOrder::default(), ByteOrder::Normal);
  }
}
