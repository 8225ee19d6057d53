//! WiFi Bands, Channels and Channel Widths
//!
//! ## Overview
//!
//! A scan result reports a primary frequency in MHz. Everything a user sees
//! about the network's position in the spectrum is derived from it:
//!
//! ```text
//! primary frequency ──► Band ──► ChannelTable ──► Channel
//!        │
//!        └── ± ChannelWidth::half_width() ──► occupied span
//! ```
//!
//! ## Band Classification
//!
//! | Band      | Range (MHz)  | Channels                         |
//! |-----------|--------------|----------------------------------|
//! | 2.4 GHz   | 2400 - 2499  | 1-13 (5 MHz grid), 14 at 2484    |
//! | 5 GHz     | 4900 - 5899  | 8-16, 36-64, 100-144, 149-165    |
//! | 6 GHz     | 5925 - 7125  | 1-233                            |
//! | Unknown   | anything else| none                             |
//!
//! Classification never fails. Frequencies outside every band map to
//! [`Band::Unknown`], whose channel table is empty, so every channel lookup
//! on it yields [`Channel::UNKNOWN`].
//!
//! ## Usage Example
//!
//! ```rust
//! use wifiscope_core::band::{Band, Channel};
//!
//! let band = Band::from_frequency(5180);
//! assert_eq!(band, Band::Ghz5);
//! assert_eq!(band.channel_table().channel_by_frequency(5180).number(), 36);
//!
//! let nowhere = Band::from_frequency(900);
//! assert_eq!(nowhere, Band::Unknown);
//! assert_eq!(nowhere.channel_table().channel_by_frequency(900), Channel::UNKNOWN);
//! ```

mod channels;
mod width;

pub use channels::{
    Channel, ChannelRange, ChannelTable,
    GHZ2_CHANNELS, GHZ5_CHANNELS, GHZ6_CHANNELS, NO_CHANNELS,
};
pub use width::ChannelWidth;

use core::fmt;

use crate::{
    constants::bands::{
        GHZ2_FREQUENCY_MAX_MHZ, GHZ2_FREQUENCY_MIN_MHZ,
        GHZ5_FREQUENCY_MAX_MHZ, GHZ5_FREQUENCY_MIN_MHZ,
        GHZ6_FREQUENCY_MAX_MHZ, GHZ6_FREQUENCY_MIN_MHZ,
    },
    Megahertz,
};

/// WiFi spectrum band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    /// 2.4 GHz ISM band
    Ghz2,
    /// 5 GHz U-NII bands
    Ghz5,
    /// 6 GHz U-NII-5 to U-NII-8
    Ghz6,
    /// Frequency outside every known band
    Unknown,
}

impl Band {
    /// Every band that has a channel plan
    pub const KNOWN: [Band; 3] = [Band::Ghz2, Band::Ghz5, Band::Ghz6];

    /// Classify a frequency into a band
    ///
    /// Pure and deterministic; unknown frequencies map to [`Band::Unknown`].
    pub const fn from_frequency(frequency: Megahertz) -> Self {
        if frequency >= GHZ2_FREQUENCY_MIN_MHZ && frequency <= GHZ2_FREQUENCY_MAX_MHZ {
            Band::Ghz2
        } else if frequency >= GHZ5_FREQUENCY_MIN_MHZ && frequency <= GHZ5_FREQUENCY_MAX_MHZ {
            Band::Ghz5
        } else if frequency >= GHZ6_FREQUENCY_MIN_MHZ && frequency <= GHZ6_FREQUENCY_MAX_MHZ {
            Band::Ghz6
        } else {
            Band::Unknown
        }
    }

    /// Channel table for this band
    pub fn channel_table(&self) -> &'static ChannelTable {
        match self {
            Band::Ghz2 => &GHZ2_CHANNELS,
            Band::Ghz5 => &GHZ5_CHANNELS,
            Band::Ghz6 => &GHZ6_CHANNELS,
            Band::Unknown => &NO_CHANNELS,
        }
    }

    /// Inclusive frequency limits of the band, `None` for [`Band::Unknown`]
    pub const fn frequency_range(&self) -> Option<(Megahertz, Megahertz)> {
        match self {
            Band::Ghz2 => Some((GHZ2_FREQUENCY_MIN_MHZ, GHZ2_FREQUENCY_MAX_MHZ)),
            Band::Ghz5 => Some((GHZ5_FREQUENCY_MIN_MHZ, GHZ5_FREQUENCY_MAX_MHZ)),
            Band::Ghz6 => Some((GHZ6_FREQUENCY_MIN_MHZ, GHZ6_FREQUENCY_MAX_MHZ)),
            Band::Unknown => None,
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Band::Ghz2 => "2.4 GHz",
            Band::Ghz5 => "5 GHz",
            Band::Ghz6 => "6 GHz",
            Band::Unknown => "Unknown",
        }
    }

    /// True for the 5 GHz band
    pub const fn is_ghz5(&self) -> bool {
        matches!(self, Band::Ghz5)
    }

    /// True for the 6 GHz band
    pub const fn is_ghz6(&self) -> bool {
        matches!(self, Band::Ghz6)
    }

    /// True unless the band is [`Band::Unknown`]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Band::Unknown)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
