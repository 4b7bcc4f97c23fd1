//! CRC parameter records.
//!
//! Each supported CRC variant is defined by one immutable record following
//! the conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//! register width, generator polynomial, initial value, final XOR mask, and
//! the two reflection flags.
//!
//! The whole table is `const` and verified at compile time: every record's
//! `poly`, `init` and `xor_out` must fit in its declared `width`, and `width`
//! must be in `[4, 32]`.

use core::fmt;

use crate::reflect::reflect_bits;

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: number of significant bits in the register and result (4–32)
/// - `poly`: the generator polynomial (without the implicit high bit)
/// - `init`: initial value for the CRC register
/// - `xor_out`: value XORed into the final register
/// - `reflect_in`: if true, reflect each input byte before folding it in
/// - `reflect_out`: if true, reflect the final register before the XOR
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most wire protocols (Modbus, X.25, the
/// Ethernet CRC-32) use reflected input and output, which corresponds to
/// LSB-first bit transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits (4–32).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub poly: u32,
  /// Initial value for the CRC register.
  pub init: u32,
  /// XOR value applied to the final register.
  pub xor_out: u32,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect the final register before XOR.
  pub reflect_out: bool,
}

impl CrcParams {
  /// CRC-4/ITU - ITU-T G.704 framing.
  pub const CRC4_ITU: Self = Self {
    width: 4,
    poly: 0x03,
    init: 0x00,
    xor_out: 0x00,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-5/EPC - EPC Gen2 RFID tags.
  pub const CRC5_EPC: Self = Self {
    width: 5,
    poly: 0x09,
    init: 0x09,
    xor_out: 0x00,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-5/ITU - ITU-T G.704.
  pub const CRC5_ITU: Self = Self {
    width: 5,
    poly: 0x15,
    init: 0x00,
    xor_out: 0x00,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-5/USB - USB token packets.
  pub const CRC5_USB: Self = Self {
    width: 5,
    poly: 0x05,
    init: 0x1F,
    xor_out: 0x1F,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-6/ITU - ITU-T G.704.
  pub const CRC6_ITU: Self = Self {
    width: 6,
    poly: 0x03,
    init: 0x00,
    xor_out: 0x00,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-7/MMC - MMC/SD card command frames.
  pub const CRC7_MMC: Self = Self {
    width: 7,
    poly: 0x09,
    init: 0x00,
    xor_out: 0x00,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-8 - plain 0x07 polynomial, no reflection.
  pub const CRC8: Self = Self {
    width: 8,
    poly: 0x07,
    init: 0x00,
    xor_out: 0x00,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-8/ITU - ATM HEC (ITU-T I.432.1); CRC-8 with a 0x55 output mask.
  pub const CRC8_ITU: Self = Self {
    width: 8,
    poly: 0x07,
    init: 0x00,
    xor_out: 0x55,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-8/ROHC - RObust Header Compression (RFC 3095).
  pub const CRC8_ROHC: Self = Self {
    width: 8,
    poly: 0x07,
    init: 0xFF,
    xor_out: 0x00,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-8/MAXIM - 1-Wire, iButton, sensor networks.
  pub const CRC8_MAXIM: Self = Self {
    width: 8,
    poly: 0x31,
    init: 0x00,
    xor_out: 0x00,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-16/IBM - ARC; legacy IBM protocols.
  pub const CRC16_IBM: Self = Self {
    width: 16,
    poly: 0x8005,
    init: 0x0000,
    xor_out: 0x0000,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-16/MAXIM - MAXIM-DOW; CRC-16/IBM with an inverted output.
  pub const CRC16_MAXIM: Self = Self {
    width: 16,
    poly: 0x8005,
    init: 0x0000,
    xor_out: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-16/USB - USB data packets.
  pub const CRC16_USB: Self = Self {
    width: 16,
    poly: 0x8005,
    init: 0xFFFF,
    xor_out: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-16/MODBUS - Modbus RTU frames.
  pub const CRC16_MODBUS: Self = Self {
    width: 16,
    poly: 0x8005,
    init: 0xFFFF,
    xor_out: 0x0000,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-16/CCITT - Kermit, PPP; the reflected CCITT form.
  pub const CRC16_CCITT: Self = Self {
    width: 16,
    poly: 0x1021,
    init: 0x0000,
    xor_out: 0x0000,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-16/CCITT-FALSE - the unreflected, 0xFFFF-initialized CCITT form.
  pub const CRC16_CCITT_FALSE: Self = Self {
    width: 16,
    poly: 0x1021,
    init: 0xFFFF,
    xor_out: 0x0000,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-16/X25 - X.25, HDLC frame check sequence.
  pub const CRC16_X25: Self = Self {
    width: 16,
    poly: 0x1021,
    init: 0xFFFF,
    xor_out: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-16/XMODEM - XMODEM, ZMODEM file transfer.
  pub const CRC16_XMODEM: Self = Self {
    width: 16,
    poly: 0x1021,
    init: 0x0000,
    xor_out: 0x0000,
    reflect_in: false,
    reflect_out: false,
  };

  /// CRC-16/DNP - DNP3 SCADA telemetry.
  pub const CRC16_DNP: Self = Self {
    width: 16,
    poly: 0x3D65,
    init: 0x0000,
    xor_out: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG.
  pub const CRC32: Self = Self {
    width: 32,
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xor_out: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
  };

  /// CRC-32/MPEG-2 - MPEG-2 transport streams; CRC-32 without reflection or
  /// output inversion.
  pub const CRC32_MPEG2: Self = Self {
    width: 32,
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xor_out: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
  };

  /// Mask with the low `width` bits set.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    if self.width >= 32 { u32::MAX } else { (1u32 << self.width) - 1 }
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the canonical LSB-first formulation processes the
  /// polynomial in this bit-reversed form.
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u32 {
    reflect_bits(self.poly, self.width)
  }
}

impl fmt::Display for CrcParams {
  /// Catalog-style one-liner, hex fields padded to the width's digit count.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = usize::from(self.width.div_ceil(4));
    write!(
      f,
      "width={} poly=0x{:0digits$X} init=0x{:0digits$X} xorout=0x{:0digits$X} refin={} refout={}",
      self.width, self.poly, self.init, self.xor_out, self.reflect_in, self.reflect_out,
    )
  }
}

/// Every record in the table, in catalog order.
///
/// Used for compile-time validation and table-driven tests; algorithm
/// dispatch goes through [`Algorithm::params`](crate::Algorithm::params)
/// instead.
pub const ALL_PARAMS: [CrcParams; 21] = [
  CrcParams::CRC4_ITU,
  CrcParams::CRC5_EPC,
  CrcParams::CRC5_ITU,
  CrcParams::CRC5_USB,
  CrcParams::CRC6_ITU,
  CrcParams::CRC7_MMC,
  CrcParams::CRC8,
  CrcParams::CRC8_ITU,
  CrcParams::CRC8_ROHC,
  CrcParams::CRC8_MAXIM,
  CrcParams::CRC16_IBM,
  CrcParams::CRC16_MAXIM,
  CrcParams::CRC16_USB,
  CrcParams::CRC16_MODBUS,
  CrcParams::CRC16_CCITT,
  CrcParams::CRC16_CCITT_FALSE,
  CrcParams::CRC16_X25,
  CrcParams::CRC16_XMODEM,
  CrcParams::CRC16_DNP,
  CrcParams::CRC32,
  CrcParams::CRC32_MPEG2,
];

// Compile-time table validation: a record whose fields leak past its width
// would silently corrupt every checksum computed from it.
// Bounds: `i` stays below `ALL_PARAMS.len()`.
#[allow(clippy::indexing_slicing)]
const _: () = {
  let mut i = 0;
  while i < ALL_PARAMS.len() {
    let p = ALL_PARAMS[i];
    assert!(p.width >= 4 && p.width <= 32);
    let mask = p.mask();
    assert!(p.poly & !mask == 0);
    assert!(p.init & !mask == 0);
    assert!(p.xor_out & !mask == 0);
    i += 1;
  }
};
