//! Basic engine usage: readouts, input modes and byte orders.
//!
//! Run with: `cargo run --example basic -p sercheck`

use sercheck::{Algorithm, ByteOrder, InputMode, calculate, decode_hex, decode_text};

fn main() {
  println!("=== Checksum Engine Examples ===\n");

  readout_examples();
  input_mode_examples();
  byte_order_examples();
  catalog_tour();
  error_example();
}

/// Full pipeline: input text to rendered checksum.
fn readout_examples() {
  println!("--- Readouts ---\n");

  // CRC-16/MODBUS over the ASCII digits "123456789"
  let modbus = calculate("123456789", InputMode::Text, Algorithm::Crc16Modbus, ByteOrder::Normal)
    .unwrap()
    .unwrap();
  println!("CRC-16/MODBUS hex: {}", modbus.hex);
  println!("CRC-16/MODBUS bin: {}", modbus.bin);
  assert_eq!(modbus.hex, "4B37");

  // CRC-32 over the same bytes
  let crc32 = calculate("123456789", InputMode::Text, Algorithm::Crc32, ByteOrder::Normal)
    .unwrap()
    .unwrap();
  println!("CRC-32 hex:        {}", crc32.hex);
  assert_eq!(crc32.hex, "CBF43926");

  println!();
}

/// The two input modes produce the same bytes for ASCII data.
fn input_mode_examples() {
  println!("--- Input Modes ---\n");

  let from_text = decode_text("123456789");
  let from_hex = decode_hex("31 32 33 34 35 36 37 38 39").unwrap();
  println!("text bytes: {from_text:02X?}");
  println!("hex bytes:  {from_hex:02X?}");
  assert_eq!(from_text, from_hex);

  // Hex mode tolerates loose spacing and an odd trailing digit
  assert_eq!(decode_hex("DE AD BE EF").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
  assert_eq!(decode_hex("ABC").unwrap(), [0xAB, 0xC0]);

  println!();
}

/// Byte order matters once a checksum is wider than one byte.
fn byte_order_examples() {
  println!("--- Byte Orders ---\n");

  let normal = calculate("123456789", InputMode::Text, Algorithm::Crc16Modbus, ByteOrder::Normal)
    .unwrap()
    .unwrap();
  let swapped = calculate("123456789", InputMode::Text, Algorithm::Crc16Modbus, ByteOrder::Swapped)
    .unwrap()
    .unwrap();

  // Modbus RTU transmits the low CRC byte first, so the swapped form is
  // what actually trails the frame on the wire.
  println!("register order: {}", normal.hex);
  println!("wire order:     {}", swapped.hex);
  assert_eq!(swapped.hex, "374B");

  println!();
}

/// Every algorithm in the catalog, with its parameters.
fn catalog_tour() {
  println!("--- Catalog ---\n");

  for algorithm in Algorithm::ALL {
    match algorithm.params() {
      Some(params) => println!("{:18} {:20} {params}", algorithm.id(), algorithm.label()),
      None => println!("{:18} {:20} {}", algorithm.id(), algorithm.label(), algorithm.notation()),
    }
  }

  println!();
}

/// Hex decode failures name the offending character and its position.
fn error_example() {
  println!("--- Errors ---\n");

  match calculate("12 G4", InputMode::Hex, Algorithm::Crc32, ByteOrder::Normal) {
    Err(err) => {
      println!("rejected: {err}");
      assert_eq!(err.ch, 'G');
      assert_eq!(err.position, 3);
    }
    Ok(_) => unreachable!("'G' is not a hex digit"),
  }

  println!();
}
