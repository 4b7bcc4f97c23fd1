//! End-to-end pipeline: raw input text to rendered checksum.
//!
//! [`calculate`] is the one call a frontend needs per keystroke. It decodes,
//! computes and renders in one pass, and distinguishes "nothing to show"
//! (empty input) from "bad input" (hex decode failure).

use alloc::string::String;

use crate::{
  algorithm::Algorithm,
  crc::{ChecksumResult, compute},
  decode::{InputMode, decode},
  error::DecodeError,
  format::{ByteOrder, bin_string, hex_string},
};

/// One complete checksum readout, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
  /// Algorithm that produced this readout.
  pub algorithm: Algorithm,
  /// Raw value and width.
  pub result: ChecksumResult,
  /// Uppercase hex rendering, two digits per byte, in the requested order.
  pub hex: String,
  /// Binary rendering, exactly `result.width` digits.
  pub bin: String,
}

/// Decode `input`, run `algorithm` over it and render the result.
///
/// Returns `Ok(None)` when the input decodes to zero bytes (empty string,
/// or whitespace-only hex): there is nothing to compute and a frontend
/// should blank its readout rather than show a checksum of nothing.
///
/// # Errors
///
/// [`DecodeError`] if hex decoding rejects a character. Nothing is computed
/// on error.
///
/// # Examples
///
/// ```
/// use sercheck::{calculate, Algorithm, ByteOrder, InputMode};
///
/// let readout = calculate("123456789", InputMode::Text, Algorithm::Crc16Modbus, ByteOrder::Normal)
///   .unwrap()
///   .unwrap();
/// assert_eq!(readout.hex, "4B37");
/// assert_eq!(readout.bin, "0100101100110111");
/// ```
pub fn calculate(
  input: &str,
  mode: InputMode,
  algorithm: Algorithm,
  byte_order: ByteOrder,
) -> Result<Option<Readout>, DecodeError> {
  let data = decode(input, mode)?;
  if data.is_empty() {
    return Ok(None);
  }

  let result = compute(algorithm, &data);
  let hex = hex_string(result.value, result.byte_count(), byte_order);
  let bin = bin_string(result.value, result.width);
  Ok(Some(Readout {
    algorithm,
    result,
    hex,
    bin,
  }))
}
