//! Channel width of a scanned network

use core::fmt;

use crate::{
    errors::{SignalError, SignalResult},
    Megahertz,
};

/// Bandwidth class of a WiFi channel
///
/// Variants are declared in the order of the scan API's width codes, so
/// [`ChannelWidth::from_code`] indexes straight into [`ChannelWidth::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelWidth {
    /// 20 MHz
    #[default]
    Mhz20,
    /// 40 MHz (HT40)
    Mhz40,
    /// 80 MHz (VHT80)
    Mhz80,
    /// 160 MHz (VHT160)
    Mhz160,
    /// Two non-contiguous 80 MHz segments
    Mhz80Plus,
}

impl ChannelWidth {
    /// Every width, indexed by scan API width code
    pub const ALL: [ChannelWidth; 5] = [
        ChannelWidth::Mhz20,
        ChannelWidth::Mhz40,
        ChannelWidth::Mhz80,
        ChannelWidth::Mhz160,
        ChannelWidth::Mhz80Plus,
    ];

    /// Convert a scan result width code (Android `ScanResult.channelWidth`)
    pub fn from_code(code: u8) -> SignalResult<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(SignalError::UnknownWidthCode { code })
    }

    /// Convert a contiguous width in MHz
    ///
    /// 80 MHz maps to [`ChannelWidth::Mhz80`]; the 80+80 layout cannot be
    /// told apart by width alone and must come from a width code.
    pub fn from_mhz(mhz: u32) -> SignalResult<Self> {
        match mhz {
            20 => Ok(ChannelWidth::Mhz20),
            40 => Ok(ChannelWidth::Mhz40),
            80 => Ok(ChannelWidth::Mhz80),
            160 => Ok(ChannelWidth::Mhz160),
            _ => Err(SignalError::UnsupportedWidth { mhz }),
        }
    }

    /// Scan API width code
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Width of one frequency segment in MHz
    pub const fn mhz(&self) -> Megahertz {
        match self {
            ChannelWidth::Mhz20 => 20,
            ChannelWidth::Mhz40 => 40,
            ChannelWidth::Mhz80 | ChannelWidth::Mhz80Plus => 80,
            ChannelWidth::Mhz160 => 160,
        }
    }

    /// Half of [`ChannelWidth::mhz`], the span either side of the primary frequency
    pub const fn half_width(&self) -> Megahertz {
        self.mhz() / 2
    }
}

impl fmt::Display for ChannelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelWidth::Mhz80Plus => f.write_str("80+80 MHz"),
            width => write!(f, "{} MHz", width.mhz()),
        }
    }
}
