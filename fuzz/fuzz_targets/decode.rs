//! Fuzz target for the input decoders.
//!
//! Tests that:
//! - No panics on arbitrary text in either mode
//! - Text mode maps exactly one byte per character
//! - Hex mode either consumes every digit or names a real offender

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sercheck::{InputMode, decode, decode_hex, decode_text};

#[derive(Arbitrary, Debug)]
struct Input {
  text: String,
  hex_mode: bool,
}

fuzz_target!(|input: Input| {
  let mode = if input.hex_mode { InputMode::Hex } else { InputMode::Text };

  let first = decode(&input.text, mode);
  let second = decode(&input.text, mode);
  assert_eq!(first, second, "decode is not deterministic");

  let bytes = decode_text(&input.text);
  assert_eq!(bytes.len(), input.text.chars().count(), "text mode must map 1:1");

  match decode_hex(&input.text) {
    Ok(bytes) => {
      // Success means every non-whitespace character was a hex digit.
      let digits = input.text.chars().filter(char::is_ascii_hexdigit).count();
      assert_eq!(bytes.len(), digits.div_ceil(2), "hex byte count mismatch");
    }
    Err(err) => {
      let offender = input.text.chars().nth(err.position);
      assert_eq!(offender, Some(err.ch), "error names the wrong character");
      assert!(!err.ch.is_whitespace(), "whitespace can never be the offender");
      assert!(err.ch.to_digit(16).is_none(), "hex digits can never be the offender");
    }
  }
});
