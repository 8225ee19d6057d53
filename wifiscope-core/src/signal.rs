//! One observed WiFi signal
//!
//! A [`SignalReading`] is what a scan reports for a single access point:
//! where it sits in the spectrum and how loud it is. The band is classified
//! once from the primary frequency when the reading is built; every other
//! derived value (span, channel, strength, distance) is computed on access.
//!
//! ## Identity
//!
//! Two readings are equal when they occupy the same channel slot, meaning
//! the same primary frequency and width. Level and center frequency are not
//! part of identity, so a set of readings holds one entry per slot:
//!
//! ```rust
//! use std::collections::HashSet;
//! use wifiscope_core::{ChannelWidth, SignalReading};
//!
//! let mut slots = HashSet::new();
//! slots.insert(SignalReading::new(2412, ChannelWidth::Mhz20, -50, 2412));
//! slots.insert(SignalReading::new(2412, ChannelWidth::Mhz20, -80, 2422));
//! slots.insert(SignalReading::new(2412, ChannelWidth::Mhz40, -80, 2422));
//!
//! assert_eq!(slots.len(), 2);
//! ```

use core::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    band::{Band, Channel, ChannelWidth},
    distance::calculate_distance,
    strength::{Strength, StrengthScale},
    traits::DistanceEstimator,
    Dbm, Megahertz,
};

/// Immutable record of one WiFi signal observation
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ReadingFields", into = "ReadingFields")
)]
pub struct SignalReading {
    primary_frequency: Megahertz,
    width: ChannelWidth,
    /// Always `Band::from_frequency(primary_frequency)`
    band: Band,
    level: Dbm,
    center_frequency: Megahertz,
}

impl SignalReading {
    /// Placeholder for an absent reading
    pub const EMPTY: SignalReading = SignalReading::new(0, ChannelWidth::Mhz20, 0, 0);

    /// Build a reading from scan values
    ///
    /// Never fails. Frequencies outside every band produce [`Band::Unknown`].
    pub const fn new(
        primary_frequency: Megahertz,
        width: ChannelWidth,
        level: Dbm,
        center_frequency: Megahertz,
    ) -> Self {
        Self {
            primary_frequency,
            width,
            band: Band::from_frequency(primary_frequency),
            level,
            center_frequency,
        }
    }

    /// Center frequency of the primary 20 MHz channel
    pub const fn primary_frequency(&self) -> Megahertz {
        self.primary_frequency
    }

    /// Center frequency of the whole occupied span
    pub const fn center_frequency(&self) -> Megahertz {
        self.center_frequency
    }

    /// Lower edge of the span around the primary frequency
    pub const fn frequency_start(&self) -> Megahertz {
        self.primary_frequency.saturating_sub(self.width.half_width())
    }

    /// Upper edge of the span around the primary frequency
    pub const fn frequency_end(&self) -> Megahertz {
        self.primary_frequency.saturating_add(self.width.half_width())
    }

    /// Band of the primary frequency
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Channel width
    pub const fn width(&self) -> ChannelWidth {
        self.width
    }

    /// Channel of the primary frequency, [`Channel::UNKNOWN`] if none matches
    pub fn channel(&self) -> Channel {
        self.band
            .channel_table()
            .channel_by_frequency(self.primary_frequency)
    }

    /// Received level in dBm
    pub const fn level(&self) -> Dbm {
        self.level
    }

    /// Strength tier on the default scale
    pub fn strength(&self) -> Strength {
        Strength::calculate(self.level)
    }

    /// Strength tier on a custom scale
    pub fn strength_with(&self, scale: &StrengthScale) -> Strength {
        Strength::calculate_with(self.level, scale)
    }

    /// Free-space estimate of the distance to the transmitter, in meters
    pub fn distance(&self) -> f64 {
        calculate_distance(self.primary_frequency, self.level)
    }

    /// Distance to the transmitter using another propagation model
    pub fn distance_with<E: DistanceEstimator + ?Sized>(&self, estimator: &E) -> f64 {
        estimator.estimate_distance(self.primary_frequency, self.level)
    }

    /// True if `frequency` lies within the span, both edges included
    pub const fn is_in_range(&self, frequency: Megahertz) -> bool {
        frequency >= self.frequency_start() && frequency <= self.frequency_end()
    }
}

impl Default for SignalReading {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for SignalReading {
    fn eq(&self, other: &Self) -> bool {
        self.primary_frequency == other.primary_frequency && self.width == other.width
    }
}

impl Eq for SignalReading {}

impl Hash for SignalReading {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.primary_frequency.hash(state);
        self.width.hash(state);
    }
}

impl fmt::Display for SignalReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} MHz [{}-{} MHz] width {} band {} level {} dBm center {} MHz",
            self.primary_frequency,
            self.frequency_start(),
            self.frequency_end(),
            self.width,
            self.band,
            self.level,
            self.center_frequency,
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SignalReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} MHz width {} band {} level {} dBm center {} MHz",
            self.primary_frequency,
            self.width.mhz(),
            self.band.name(),
            self.level,
            self.center_frequency,
        )
    }
}

/// Serialized form; the band is recomputed on the way in
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ReadingFields {
    primary_frequency: Megahertz,
    width: ChannelWidth,
    level: Dbm,
    center_frequency: Megahertz,
}

#[cfg(feature = "serde")]
impl From<ReadingFields> for SignalReading {
    fn from(fields: ReadingFields) -> Self {
        SignalReading::new(
            fields.primary_frequency,
            fields.width,
            fields.level,
            fields.center_frequency,
        )
    }
}

#[cfg(feature = "serde")]
impl From<SignalReading> for ReadingFields {
    fn from(reading: SignalReading) -> Self {
        Self {
            primary_frequency: reading.primary_frequency,
            width: reading.width,
            level: reading.level,
            center_frequency: reading.center_frequency,
        }
    }
}
