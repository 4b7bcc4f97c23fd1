//! Bit-exact checksum engine for serial debug traffic.
//!
//! This crate turns the text an operator types into a serial console into a
//! rendered checksum: decode the text to bytes, run one of 23 checksum
//! algorithms over them, and format the result as hex (in either byte
//! order) and binary. It reproduces, bit for bit, the readouts of the
//! terminal tool it was extracted from, so a value computed here can be
//! pasted straight into a frame on the wire.
//!
//! # Supported Algorithms
//!
//! | Identifier | Algorithm | Width | Polynomial |
//! |------------|-----------|-------|------------|
//! | `sum` | Sum | 8 | - |
//! | `xor` | XOR | 8 | - |
//! | `crc4-itu` | CRC-4/ITU | 4 | 0x03 |
//! | `crc5-epc` | CRC-5/EPC | 5 | 0x09 |
//! | `crc5-itu` | CRC-5/ITU | 5 | 0x15 |
//! | `crc5-usb` | CRC-5/USB | 5 | 0x05 |
//! | `crc6-itu` | CRC-6/ITU | 6 | 0x03 |
//! | `crc7-mmc` | CRC-7/MMC | 7 | 0x09 |
//! | `crc8` | CRC-8 | 8 | 0x07 |
//! | `crc8-itu` | CRC-8/ITU | 8 | 0x07 |
//! | `crc8-rohc` | CRC-8/ROHC | 8 | 0x07 |
//! | `crc8-maxim` | CRC-8/MAXIM | 8 | 0x31 |
//! | `crc16-ibm` | CRC-16/IBM | 16 | 0x8005 |
//! | `crc16-maxim` | CRC-16/MAXIM | 16 | 0x8005 |
//! | `crc16-usb` | CRC-16/USB | 16 | 0x8005 |
//! | `crc16-modbus` | CRC-16/MODBUS | 16 | 0x8005 |
//! | `crc16-ccitt` | CRC-16/CCITT | 16 | 0x1021 |
//! | `crc16-ccitt-false` | CRC-16/CCITT-FALSE | 16 | 0x1021 |
//! | `crc16-x25` | CRC-16/X25 | 16 | 0x1021 |
//! | `crc16-xmodem` | CRC-16/XMODEM | 16 | 0x1021 |
//! | `crc16-dnp` | CRC-16/DNP | 16 | 0x3D65 |
//! | `crc32` | CRC-32 | 32 | 0x04C11DB7 |
//! | `crc32-mpeg2` | CRC-32/MPEG-2 | 32 | 0x04C11DB7 |
//!
//! The 16- and 32-bit CRC variants match their published check values over
//! `"123456789"`. The 4- to 8-bit variants follow the fixed register policy
//! documented at [`crc_bitwise`], which differs from the catalog for those
//! widths; their outputs are pinned by this crate's own test vectors.
//!
//! # Example
//!
//! ```
//! use sercheck::{calculate, Algorithm, ByteOrder, InputMode};
//!
//! // Hex input: bytes 31 32 .. 39, the standard CRC check string.
//! let crc = calculate(
//!   "31 32 33 34 35 36 37 38 39",
//!   InputMode::Hex,
//!   Algorithm::Crc32,
//!   ByteOrder::Normal,
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(crc.hex, "CBF43926");
//!
//! // Text input, low byte first for a MODBUS RTU frame tail.
//! let modbus = calculate("123456789", InputMode::Text, Algorithm::Crc16Modbus, ByteOrder::Swapped)
//!   .unwrap()
//!   .unwrap();
//! assert_eq!(modbus.hex, "374B");
//! assert_eq!(modbus.bin, "0100101100110111");
//! ```
//!
//! # `no_std`
//!
//! The crate is `no_std` and allocates only for decoded byte buffers and
//! rendered strings (`alloc` is required). There is no I/O, no global
//! state and no platform dependence.
//!
//! # Feature Flags
//!
//! - `serde` (off by default): `Serialize`/`Deserialize` for the
//!   configuration enums ([`Algorithm`], [`InputMode`], [`ByteOrder`]),
//!   using the same kebab-case identifiers as [`Algorithm::id`].

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

mod algorithm;
mod crc;
mod decode;
mod engine;
mod error;
mod format;
mod params;
mod reflect;

// Re-export public types
pub use algorithm::Algorithm;
pub use crc::{ChecksumResult, compute, crc_bitwise, sum8, xor8};
pub use decode::{InputMode, decode, decode_hex, decode_text};
pub use engine::{Readout, calculate};
pub use error::{DecodeError, UnknownAlgorithm};
pub use format::{ByteOrder, bin_string, hex_string};
pub use params::{ALL_PARAMS, CrcParams};
pub use reflect::reflect_bits;
