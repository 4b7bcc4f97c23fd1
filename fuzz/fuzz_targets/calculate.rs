//! Fuzz target for the full calculation pipeline.
//!
//! Tests that:
//! - No panics for any input, algorithm or byte order
//! - Readout shape always matches the algorithm
//! - Results are deterministic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sercheck::{Algorithm, ByteOrder, InputMode, calculate};

#[derive(Arbitrary, Debug)]
struct Input {
  text: String,
  algorithm: u8,
  hex_mode: bool,
  swapped: bool,
}

fuzz_target!(|input: Input| {
  let algorithm = Algorithm::ALL[usize::from(input.algorithm) % Algorithm::ALL.len()];
  let mode = if input.hex_mode { InputMode::Hex } else { InputMode::Text };
  let order = if input.swapped { ByteOrder::Swapped } else { ByteOrder::Normal };

  match calculate(&input.text, mode, algorithm, order) {
    Ok(Some(readout)) => {
      assert_eq!(readout.hex.len(), algorithm.byte_count() * 2, "hex length");
      assert_eq!(readout.bin.len(), usize::from(algorithm.width()), "bin length");

      let width = u32::from(algorithm.width());
      let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
      assert_eq!(readout.result.value & !mask, 0, "value leaked past width");

      let again = calculate(&input.text, mode, algorithm, order);
      assert_eq!(again, Ok(Some(readout)), "calculate is not deterministic");
    }
    Ok(None) => {
      // Only an empty decode produces no readout.
      match mode {
        InputMode::Text => assert!(input.text.is_empty()),
        InputMode::Hex => assert!(input.text.chars().all(char::is_whitespace)),
      }
    }
    Err(_) => assert_eq!(mode, InputMode::Hex, "text mode cannot fail"),
  }
});
