//! Channel tables for each band
//!
//! A table is a list of contiguous channel ranges. Within a range the
//! channel number advances by one every [`CHANNEL_FREQUENCY_SPREAD_MHZ`],
//! so a frequency maps to a channel number by linear interpolation from the
//! range's first channel, rounded to the nearest number.
//!
//! ```text
//! range 36..=64 starting at 5180 MHz
//!
//!   5180  5185  5190  ...  5320
//!    36    37    38   ...   64
//! ```
//!
//! Listing (`channels()`) walks each range in its `step`, which for the
//! 5 and 6 GHz bands yields only the 20 MHz channel centers.

use core::fmt;

use crate::{
    constants::bands::{
        CHANNEL_FREQUENCY_OFFSET_MHZ, CHANNEL_FREQUENCY_SPREAD_MHZ,
        GHZ2_CHANNEL_14_MHZ, GHZ2_CHANNEL_1_MHZ,
        GHZ2_FREQUENCY_MAX_MHZ, GHZ2_FREQUENCY_MIN_MHZ,
        GHZ5_CHANNEL_BASE_MHZ, GHZ5_FREQUENCY_MAX_MHZ, GHZ5_FREQUENCY_MIN_MHZ,
        GHZ6_CHANNEL_BASE_MHZ, GHZ6_FREQUENCY_MAX_MHZ, GHZ6_FREQUENCY_MIN_MHZ,
    },
    Megahertz,
};

/// A channel number and the frequency it was observed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    number: i32,
    frequency: Megahertz,
}

impl Channel {
    /// Returned whenever a frequency matches no channel
    pub const UNKNOWN: Channel = Channel::new(0, 0);

    /// Create a channel
    pub const fn new(number: i32, frequency: Megahertz) -> Self {
        Self { number, frequency }
    }

    /// Channel number
    pub const fn number(&self) -> i32 {
        self.number
    }

    /// Frequency in MHz
    pub const fn frequency(&self) -> Megahertz {
        self.frequency
    }

    /// True for [`Channel::UNKNOWN`]
    pub const fn is_unknown(&self) -> bool {
        self.number == Self::UNKNOWN.number && self.frequency == Self::UNKNOWN.frequency
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("unknown")
        } else {
            write!(f, "{} ({} MHz)", self.number, self.frequency)
        }
    }
}

/// Contiguous run of channels sharing the 5 MHz grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    first: Channel,
    last: Channel,
    /// Channel number increment when listing the range
    step: i32,
}

impl ChannelRange {
    /// Create a range; a step below 1 is treated as 1
    pub const fn new(first: Channel, last: Channel, step: i32) -> Self {
        Self {
            first,
            last,
            step: if step < 1 { 1 } else { step },
        }
    }

    /// Lowest channel in the range
    pub const fn first(&self) -> Channel {
        self.first
    }

    /// Highest channel in the range
    pub const fn last(&self) -> Channel {
        self.last
    }

    /// True if the channel number belongs to this range
    pub const fn contains_number(&self, number: i32) -> bool {
        number >= self.first.number && number <= self.last.number
    }

    /// True if the frequency falls in the range, widened by the match offset
    fn matches_frequency(&self, frequency: Megahertz) -> bool {
        frequency >= self.first.frequency.saturating_sub(CHANNEL_FREQUENCY_OFFSET_MHZ)
            && frequency <= self.last.frequency.saturating_add(CHANNEL_FREQUENCY_OFFSET_MHZ)
    }

    /// Nearest channel number for a frequency, tagged with that frequency
    fn channel_at(&self, frequency: Megahertz) -> Channel {
        let offset = (f64::from(frequency) - f64::from(self.first.frequency))
            / f64::from(CHANNEL_FREQUENCY_SPREAD_MHZ);
        // Truncation after +0.5 rounds half up for positive offsets
        let number = (offset + f64::from(self.first.number) + 0.5) as i32;

        if self.contains_number(number) {
            Channel::new(number, frequency)
        } else {
            Channel::UNKNOWN
        }
    }

    /// Canonical channel for a number in this range
    fn channel_for_number(&self, number: i32) -> Channel {
        let frequency = self.first.frequency.saturating_add(
            number
                .saturating_sub(self.first.number)
                .saturating_mul(CHANNEL_FREQUENCY_SPREAD_MHZ),
        );
        Channel::new(number, frequency)
    }

    /// Channels of the range in `step` increments
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        (self.first.number..=self.last.number)
            .step_by(self.step as usize)
            .map(move |number| self.channel_for_number(number))
    }
}

/// Channel plan of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelTable {
    /// Inclusive band limits; `None` for a table with no band
    bounds: Option<(Megahertz, Megahertz)>,
    ranges: &'static [ChannelRange],
}

impl ChannelTable {
    /// Create a table covering `[min, max]` MHz
    pub const fn new(min: Megahertz, max: Megahertz, ranges: &'static [ChannelRange]) -> Self {
        Self {
            bounds: Some((min, max)),
            ranges,
        }
    }

    /// Table that matches nothing
    pub const fn empty() -> Self {
        Self {
            bounds: None,
            ranges: &[],
        }
    }

    /// True if the frequency lies within the band limits (inclusive)
    pub const fn is_in_range(&self, frequency: Megahertz) -> bool {
        match self.bounds {
            Some((min, max)) => frequency >= min && frequency <= max,
            None => false,
        }
    }

    /// Look up the channel for a frequency
    ///
    /// The returned channel carries the queried frequency, not the channel's
    /// nominal center. Frequencies outside the band, or between ranges,
    /// return [`Channel::UNKNOWN`].
    pub fn channel_by_frequency(&self, frequency: Megahertz) -> Channel {
        if !self.is_in_range(frequency) {
            log_trace!("No channel plan covers {} MHz", frequency);
            return Channel::UNKNOWN;
        }

        match self.ranges.iter().find(|range| range.matches_frequency(frequency)) {
            Some(range) => {
                let channel = range.channel_at(frequency);
                if channel.is_unknown() {
                    log_debug!("{} MHz falls between channels", frequency);
                }
                channel
            }
            None => {
                log_debug!("{} MHz is outside every channel range", frequency);
                Channel::UNKNOWN
            }
        }
    }

    /// Look up the nominal channel for a channel number
    pub fn channel_by_number(&self, number: i32) -> Channel {
        self.ranges
            .iter()
            .find(|range| range.contains_number(number))
            .map(|range| range.channel_for_number(number))
            .unwrap_or(Channel::UNKNOWN)
    }

    /// All listed channels, lowest first
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.ranges.iter().flat_map(|range| range.channels())
    }

    /// Channel ranges making up the table
    pub const fn ranges(&self) -> &'static [ChannelRange] {
        self.ranges
    }

    /// Lowest channel, [`Channel::UNKNOWN`] for an empty table
    pub fn first_channel(&self) -> Channel {
        self.ranges.first().map_or(Channel::UNKNOWN, |range| range.first)
    }

    /// Highest channel, [`Channel::UNKNOWN`] for an empty table
    pub fn last_channel(&self) -> Channel {
        self.ranges.last().map_or(Channel::UNKNOWN, |range| range.last)
    }

    /// Tolerance used when matching a frequency to a channel range
    pub const fn frequency_offset(&self) -> Megahertz {
        CHANNEL_FREQUENCY_OFFSET_MHZ
    }

    /// Distance between adjacent channel numbers
    pub const fn frequency_spread(&self) -> Megahertz {
        CHANNEL_FREQUENCY_SPREAD_MHZ
    }
}

const fn ghz5_channel(number: i32) -> Channel {
    Channel::new(number, GHZ5_CHANNEL_BASE_MHZ + number * CHANNEL_FREQUENCY_SPREAD_MHZ)
}

const fn ghz6_channel(number: i32) -> Channel {
    Channel::new(number, GHZ6_CHANNEL_BASE_MHZ + number * CHANNEL_FREQUENCY_SPREAD_MHZ)
}

/// 2.4 GHz channel plan
pub static GHZ2_CHANNELS: ChannelTable = ChannelTable::new(
    GHZ2_FREQUENCY_MIN_MHZ,
    GHZ2_FREQUENCY_MAX_MHZ,
    &[
        ChannelRange::new(
            Channel::new(1, GHZ2_CHANNEL_1_MHZ),
            Channel::new(13, GHZ2_CHANNEL_1_MHZ + 12 * CHANNEL_FREQUENCY_SPREAD_MHZ),
            1,
        ),
        ChannelRange::new(
            Channel::new(14, GHZ2_CHANNEL_14_MHZ),
            Channel::new(14, GHZ2_CHANNEL_14_MHZ),
            1,
        ),
    ],
);

/// 5 GHz channel plan
pub static GHZ5_CHANNELS: ChannelTable = ChannelTable::new(
    GHZ5_FREQUENCY_MIN_MHZ,
    GHZ5_FREQUENCY_MAX_MHZ,
    &[
        // 4.9/5.0 GHz Japan
        ChannelRange::new(ghz5_channel(8), ghz5_channel(16), 4),
        // U-NII-1 and U-NII-2A
        ChannelRange::new(ghz5_channel(36), ghz5_channel(64), 4),
        // U-NII-2C
        ChannelRange::new(ghz5_channel(100), ghz5_channel(144), 4),
        // U-NII-3
        ChannelRange::new(ghz5_channel(149), ghz5_channel(165), 4),
    ],
);

/// 6 GHz channel plan
pub static GHZ6_CHANNELS: ChannelTable = ChannelTable::new(
    GHZ6_FREQUENCY_MIN_MHZ,
    GHZ6_FREQUENCY_MAX_MHZ,
    &[ChannelRange::new(ghz6_channel(1), ghz6_channel(233), 4)],
);

/// Table for frequencies outside every band
pub static NO_CHANNELS: ChannelTable = ChannelTable::empty();
