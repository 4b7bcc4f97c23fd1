//! The algorithm catalog.
//!
//! [`Algorithm`] is a closed enum: dispatch inside the engine is an
//! exhaustive `match`, so an unknown algorithm is unrepresentable past the
//! text boundary. Identifier strings (the form hosts persist and display)
//! enter through [`Algorithm::from_id`] / `FromStr`, which is the only place
//! [`UnknownAlgorithm`] can surface.

use core::{fmt, str::FromStr};

use crate::{error::UnknownAlgorithm, params::CrcParams};

/// A checksum algorithm selectable by the operator.
///
/// The catalog covers the two trivial byte checksums plus 21 published CRC
/// variants from 4 to 32 bits. Variant metadata (identifier, display label,
/// polynomial notation, width) is `const` and allocation-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
  /// 8-bit additive checksum (wrapping sum of all bytes).
  Sum,
  /// 8-bit exclusive-or checksum.
  Xor,
  /// CRC-4/ITU.
  Crc4Itu,
  /// CRC-5/EPC.
  Crc5Epc,
  /// CRC-5/ITU.
  Crc5Itu,
  /// CRC-5/USB.
  Crc5Usb,
  /// CRC-6/ITU.
  Crc6Itu,
  /// CRC-7/MMC.
  Crc7Mmc,
  /// CRC-8.
  Crc8,
  /// CRC-8/ITU.
  Crc8Itu,
  /// CRC-8/ROHC.
  Crc8Rohc,
  /// CRC-8/MAXIM.
  Crc8Maxim,
  /// CRC-16/IBM.
  Crc16Ibm,
  /// CRC-16/MAXIM.
  Crc16Maxim,
  /// CRC-16/USB.
  Crc16Usb,
  /// CRC-16/MODBUS.
  Crc16Modbus,
  /// CRC-16/CCITT (Kermit).
  Crc16Ccitt,
  /// CRC-16/CCITT-FALSE.
  Crc16CcittFalse,
  /// CRC-16/X25.
  Crc16X25,
  /// CRC-16/XMODEM.
  Crc16Xmodem,
  /// CRC-16/DNP.
  Crc16Dnp,
  /// CRC-32 (ISO-HDLC).
  Crc32,
  /// CRC-32/MPEG-2.
  Crc32Mpeg2,
}

impl Algorithm {
  /// Every algorithm in catalog order: the two simple checksums, then CRCs
  /// from narrowest to widest. This is the order hosts present in selection
  /// lists.
  pub const ALL: [Self; 23] = [
    Self::Sum,
    Self::Xor,
    Self::Crc4Itu,
    Self::Crc5Epc,
    Self::Crc5Itu,
    Self::Crc5Usb,
    Self::Crc6Itu,
    Self::Crc7Mmc,
    Self::Crc8,
    Self::Crc8Itu,
    Self::Crc8Rohc,
    Self::Crc8Maxim,
    Self::Crc16Ibm,
    Self::Crc16Maxim,
    Self::Crc16Usb,
    Self::Crc16Modbus,
    Self::Crc16Ccitt,
    Self::Crc16CcittFalse,
    Self::Crc16X25,
    Self::Crc16Xmodem,
    Self::Crc16Dnp,
    Self::Crc32,
    Self::Crc32Mpeg2,
  ];

  /// Stable kebab-case identifier, the form hosts persist in settings.
  ///
  /// Round-trips through [`Algorithm::from_id`].
  #[must_use]
  pub const fn id(self) -> &'static str {
    match self {
      Self::Sum => "sum",
      Self::Xor => "xor",
      Self::Crc4Itu => "crc4-itu",
      Self::Crc5Epc => "crc5-epc",
      Self::Crc5Itu => "crc5-itu",
      Self::Crc5Usb => "crc5-usb",
      Self::Crc6Itu => "crc6-itu",
      Self::Crc7Mmc => "crc7-mmc",
      Self::Crc8 => "crc8",
      Self::Crc8Itu => "crc8-itu",
      Self::Crc8Rohc => "crc8-rohc",
      Self::Crc8Maxim => "crc8-maxim",
      Self::Crc16Ibm => "crc16-ibm",
      Self::Crc16Maxim => "crc16-maxim",
      Self::Crc16Usb => "crc16-usb",
      Self::Crc16Modbus => "crc16-modbus",
      Self::Crc16Ccitt => "crc16-ccitt",
      Self::Crc16CcittFalse => "crc16-ccitt-false",
      Self::Crc16X25 => "crc16-x25",
      Self::Crc16Xmodem => "crc16-xmodem",
      Self::Crc16Dnp => "crc16-dnp",
      Self::Crc32 => "crc32",
      Self::Crc32Mpeg2 => "crc32-mpeg2",
    }
  }

  /// Display label.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Sum => "Sum",
      Self::Xor => "XOR",
      Self::Crc4Itu => "CRC-4/ITU",
      Self::Crc5Epc => "CRC-5/EPC",
      Self::Crc5Itu => "CRC-5/ITU",
      Self::Crc5Usb => "CRC-5/USB",
      Self::Crc6Itu => "CRC-6/ITU",
      Self::Crc7Mmc => "CRC-7/MMC",
      Self::Crc8 => "CRC-8",
      Self::Crc8Itu => "CRC-8/ITU",
      Self::Crc8Rohc => "CRC-8/ROHC",
      Self::Crc8Maxim => "CRC-8/MAXIM",
      Self::Crc16Ibm => "CRC-16/IBM",
      Self::Crc16Maxim => "CRC-16/MAXIM",
      Self::Crc16Usb => "CRC-16/USB",
      Self::Crc16Modbus => "CRC-16/MODBUS",
      Self::Crc16Ccitt => "CRC-16/CCITT",
      Self::Crc16CcittFalse => "CRC-16/CCITT-FALSE",
      Self::Crc16X25 => "CRC-16/X25",
      Self::Crc16Xmodem => "CRC-16/XMODEM",
      Self::Crc16Dnp => "CRC-16/DNP",
      Self::Crc32 => "CRC-32",
      Self::Crc32Mpeg2 => "CRC-32/MPEG-2",
    }
  }

  /// Generator polynomial in algebraic notation, or a one-line description
  /// for the non-CRC checksums.
  #[must_use]
  pub const fn notation(self) -> &'static str {
    match self {
      Self::Sum => "8-bit additive checksum",
      Self::Xor => "8-bit exclusive-or checksum",
      Self::Crc4Itu => "x4 + x + 1",
      Self::Crc5Epc => "x5 + x3 + 1",
      Self::Crc5Itu => "x5 + x4 + x2 + 1",
      Self::Crc5Usb => "x5 + x2 + 1",
      Self::Crc6Itu => "x6 + x + 1",
      Self::Crc7Mmc => "x7 + x3 + 1",
      Self::Crc8 | Self::Crc8Itu | Self::Crc8Rohc => "x8 + x2 + x + 1",
      Self::Crc8Maxim => "x8 + x5 + x4 + 1",
      Self::Crc16Ibm | Self::Crc16Maxim | Self::Crc16Usb | Self::Crc16Modbus => "x16 + x15 + x2 + 1",
      Self::Crc16Ccitt | Self::Crc16CcittFalse | Self::Crc16X25 | Self::Crc16Xmodem => "x16 + x12 + x5 + 1",
      Self::Crc16Dnp => "x16 + x13 + x12 + x11 + x10 + x8 + x6 + x5 + x2 + 1",
      Self::Crc32 | Self::Crc32Mpeg2 => {
        "x32 + x26 + x23 + x22 + x16 + x12 + x11 + x10 + x8 + x7 + x5 + x4 + x2 + x + 1"
      }
    }
  }

  /// The CRC parameter record, or `None` for [`Sum`](Self::Sum) and
  /// [`Xor`](Self::Xor).
  #[must_use]
  pub const fn params(self) -> Option<CrcParams> {
    match self {
      Self::Sum | Self::Xor => None,
      Self::Crc4Itu => Some(CrcParams::CRC4_ITU),
      Self::Crc5Epc => Some(CrcParams::CRC5_EPC),
      Self::Crc5Itu => Some(CrcParams::CRC5_ITU),
      Self::Crc5Usb => Some(CrcParams::CRC5_USB),
      Self::Crc6Itu => Some(CrcParams::CRC6_ITU),
      Self::Crc7Mmc => Some(CrcParams::CRC7_MMC),
      Self::Crc8 => Some(CrcParams::CRC8),
      Self::Crc8Itu => Some(CrcParams::CRC8_ITU),
      Self::Crc8Rohc => Some(CrcParams::CRC8_ROHC),
      Self::Crc8Maxim => Some(CrcParams::CRC8_MAXIM),
      Self::Crc16Ibm => Some(CrcParams::CRC16_IBM),
      Self::Crc16Maxim => Some(CrcParams::CRC16_MAXIM),
      Self::Crc16Usb => Some(CrcParams::CRC16_USB),
      Self::Crc16Modbus => Some(CrcParams::CRC16_MODBUS),
      Self::Crc16Ccitt => Some(CrcParams::CRC16_CCITT),
      Self::Crc16CcittFalse => Some(CrcParams::CRC16_CCITT_FALSE),
      Self::Crc16X25 => Some(CrcParams::CRC16_X25),
      Self::Crc16Xmodem => Some(CrcParams::CRC16_XMODEM),
      Self::Crc16Dnp => Some(CrcParams::CRC16_DNP),
      Self::Crc32 => Some(CrcParams::CRC32),
      Self::Crc32Mpeg2 => Some(CrcParams::CRC32_MPEG2),
    }
  }

  /// Result width in bits (8 for the simple checksums).
  #[inline]
  #[must_use]
  pub const fn width(self) -> u8 {
    match self.params() {
      Some(params) => params.width,
      None => 8,
    }
  }

  /// Bytes needed to carry a result of this width.
  #[inline]
  #[must_use]
  pub const fn byte_count(self) -> usize {
    self.width().div_ceil(8) as usize
  }

  /// Parse a kebab-case identifier (case-sensitive).
  ///
  /// Identifiers are machine-stable settings keys, not user input, so no
  /// case folding is applied.
  ///
  /// # Errors
  ///
  /// Returns [`UnknownAlgorithm`] when `id` names no catalog entry.
  pub fn from_id(id: &str) -> Result<Self, UnknownAlgorithm> {
    match id {
      "sum" => Ok(Self::Sum),
      "xor" => Ok(Self::Xor),
      "crc4-itu" => Ok(Self::Crc4Itu),
      "crc5-epc" => Ok(Self::Crc5Epc),
      "crc5-itu" => Ok(Self::Crc5Itu),
      "crc5-usb" => Ok(Self::Crc5Usb),
      "crc6-itu" => Ok(Self::Crc6Itu),
      "crc7-mmc" => Ok(Self::Crc7Mmc),
      "crc8" => Ok(Self::Crc8),
      "crc8-itu" => Ok(Self::Crc8Itu),
      "crc8-rohc" => Ok(Self::Crc8Rohc),
      "crc8-maxim" => Ok(Self::Crc8Maxim),
      "crc16-ibm" => Ok(Self::Crc16Ibm),
      "crc16-maxim" => Ok(Self::Crc16Maxim),
      "crc16-usb" => Ok(Self::Crc16Usb),
      "crc16-modbus" => Ok(Self::Crc16Modbus),
      "crc16-ccitt" => Ok(Self::Crc16Ccitt),
      "crc16-ccitt-false" => Ok(Self::Crc16CcittFalse),
      "crc16-x25" => Ok(Self::Crc16X25),
      "crc16-xmodem" => Ok(Self::Crc16Xmodem),
      "crc16-dnp" => Ok(Self::Crc16Dnp),
      "crc32" => Ok(Self::Crc32),
      "crc32-mpeg2" => Ok(Self::Crc32Mpeg2),
      _ => Err(UnknownAlgorithm::new()),
    }
  }
}

impl Default for Algorithm {
  /// The selection hosts start from.
  #[inline]
  fn default() -> Self {
    Self::Crc16Modbus
  }
}

impl FromStr for Algorithm {
  type Err = UnknownAlgorithm;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_id(s)
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
