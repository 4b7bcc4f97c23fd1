//! Input decoding: operator text to byte sequences.
//!
//! Two modes mirror what a serial console offers. Text mode maps every
//! character to one byte, its code point truncated to the low 8 bits; it is
//! not a general text encoding, see [`decode_text`]. Hex mode strips whitespace
//! and consumes the remaining characters as hex digit pairs, rejecting the
//! first character that is not a hex digit.

use alloc::vec::Vec;

use crate::error::DecodeError;

/// How raw input text is interpreted as bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InputMode {
  /// One byte per character: the code point truncated to its low 8 bits.
  Text,
  /// Whitespace-separated hex digit pairs.
  #[default]
  Hex,
}

/// Decode `input` under `mode`.
///
/// An empty result is not an error; it signals "nothing to compute" to the
/// caller.
///
/// # Errors
///
/// Hex mode fails with [`DecodeError`] on the first non-hex, non-whitespace
/// character. Text mode is infallible.
pub fn decode(input: &str, mode: InputMode) -> Result<Vec<u8>, DecodeError> {
  match mode {
    InputMode::Text => Ok(decode_text(input)),
    InputMode::Hex => decode_hex(input),
  }
}

/// Decode text input: one byte per character.
///
/// Each character contributes its code point truncated to the low 8 bits.
/// This is deliberately not UTF-8: characters above U+00FF silently lose
/// their high bits, matching what existing checksum workflows expect from
/// this input mode.
///
/// # Examples
///
/// ```
/// use sercheck::decode_text;
///
/// assert_eq!(decode_text("123"), [0x31, 0x32, 0x33]);
/// assert_eq!(decode_text("é"), [0xE9]);
/// assert_eq!(decode_text("中"), [0x2D]); // U+4E2D truncated
/// ```
#[must_use]
pub fn decode_text(input: &str) -> Vec<u8> {
  input.chars().map(|ch| ch as u32 as u8).collect()
}

/// Decode hex input: whitespace-separated hex digit pairs.
///
/// All whitespace is stripped first, then the remaining characters are
/// consumed two at a time as base-16 bytes (either nibble case). A single
/// trailing digit becomes the high nibble of a final byte whose low nibble
/// is zero.
///
/// # Errors
///
/// Any character that is neither whitespace nor a hex digit fails with a
/// [`DecodeError`] naming the character and its position; no partial byte
/// sequence is produced.
///
/// # Examples
///
/// ```
/// use sercheck::decode_hex;
///
/// assert_eq!(decode_hex("DE AD be ef").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
/// assert_eq!(decode_hex("A").unwrap(), [0xA0]);
/// assert!(decode_hex("GG").is_err());
/// ```
pub fn decode_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
  let mut bytes = Vec::new();
  // High nibble waiting for its partner.
  let mut pending: Option<u8> = None;

  for (position, ch) in input.chars().enumerate() {
    if ch.is_whitespace() {
      continue;
    }
    let nibble = match ch.to_digit(16) {
      Some(value) => value as u8,
      None => return Err(DecodeError::new(ch, position)),
    };
    match pending.take() {
      Some(high) => bytes.push((high << 4) | nibble),
      None => pending = Some(nibble),
    }
  }

  // Odd trailing digit pads the low nibble: "A" decodes to 0xA0.
  if let Some(high) = pending {
    bytes.push(high << 4);
  }
  Ok(bytes)
}
