//! Error types for the calculation engine.
//!
//! Both errors are small `Copy` values that render a user-visible message via
//! `Display`. They are resolved at the engine boundary; nothing here panics.

use core::fmt;

/// Hex decoding hit a character that is not a hex digit.
///
/// Whitespace is stripped before pairing, so only genuinely malformed input
/// produces this error. `position` is the 0-based character index in the raw
/// input string (whitespace included), letting hosts point at the offender.
///
/// # Examples
///
/// ```
/// use sercheck::{decode, DecodeError, InputMode};
///
/// let err = decode("12 G4", InputMode::Hex).unwrap_err();
/// assert_eq!(err, DecodeError::new('G', 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeError {
  /// The offending character.
  pub ch: char,
  /// 0-based character index in the raw input.
  pub position: usize,
}

impl DecodeError {
  /// Create a decode error for the character at `position`.
  #[inline]
  #[must_use]
  pub const fn new(ch: char, position: usize) -> Self {
    Self { ch, position }
  }
}

impl fmt::Display for DecodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "invalid hex character {:?} at position {}", self.ch, self.position)
  }
}

impl core::error::Error for DecodeError {}

/// An algorithm identifier string matched no catalog entry.
///
/// Produced only by [`Algorithm::from_id`](crate::Algorithm::from_id) and the
/// matching `FromStr` impl. Inside the engine the closed [`Algorithm`] enum
/// makes the state unrepresentable, so computation never has to handle it.
///
/// [`Algorithm`]: crate::Algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UnknownAlgorithm;

impl UnknownAlgorithm {
  /// Create a new unknown-algorithm error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for UnknownAlgorithm {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown checksum algorithm identifier")
  }
}

impl core::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn decode_error_display() {
    let err = DecodeError::new('G', 3);
    assert_eq!(err.to_string(), "invalid hex character 'G' at position 3");
  }

  #[test]
  fn decode_error_fields() {
    let err = DecodeError::new('z', 7);
    assert_eq!(err.ch, 'z');
    assert_eq!(err.position, 7);
  }

  #[test]
  fn decode_error_equality() {
    assert_eq!(DecodeError::new('G', 0), DecodeError::new('G', 0));
    assert_ne!(DecodeError::new('G', 0), DecodeError::new('G', 1));
    assert_ne!(DecodeError::new('G', 0), DecodeError::new('H', 0));
  }

  #[test]
  fn unknown_algorithm_display() {
    assert_eq!(UnknownAlgorithm::new().to_string(), "unknown checksum algorithm identifier");
  }

  #[test]
  fn unknown_algorithm_debug() {
    assert_eq!(format!("{:?}", UnknownAlgorithm::new()), "UnknownAlgorithm");
  }

  #[test]
  fn unknown_algorithm_default() {
    let err: UnknownAlgorithm = Default::default();
    assert_eq!(err, UnknownAlgorithm::new());
  }

  #[test]
  fn unknown_algorithm_is_zero_sized() {
    assert_eq!(core::mem::size_of::<UnknownAlgorithm>(), 0);
  }

  #[test]
  fn errors_are_copy() {
    let a = DecodeError::new('x', 1);
    let b = a; // Copy
    assert_eq!(a, b);

    let c = UnknownAlgorithm::new();
    let d = c; // Copy
    assert_eq!(c, d);
  }

  #[test]
  fn error_trait_impls() {
    use core::error::Error;

    fn assert_error<T: Error>() {}
    assert_error::<DecodeError>();
    assert_error::<UnknownAlgorithm>();

    assert!(DecodeError::new('G', 0).source().is_none());
    assert!(UnknownAlgorithm::new().source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<DecodeError>();
    assert_sync::<DecodeError>();
    assert_send::<UnknownAlgorithm>();
    assert_sync::<UnknownAlgorithm>();
  }
}
