//! Band Limits and Channel Grid
//!
//! Frequency limits for the WiFi bands and the spacing of the channel grid
//! within them. Band limits are wider than the allocated channels; an
//! off-grid reading inside them still classifies to the band.

use crate::Megahertz;

// ===== CHANNEL GRID =====

/// Distance between adjacent channel numbers (MHz).
///
/// Channel numbers advance in 5 MHz steps in every band, so channel `n+1`
/// is 5 MHz above channel `n`. A 20 MHz channel therefore spans four
/// channel numbers.
///
/// Source: IEEE Std 802.11-2020, Annex E
pub const CHANNEL_FREQUENCY_SPREAD_MHZ: Megahertz = 5;

/// Tolerance around a channel range when matching a frequency (MHz).
///
/// A frequency up to this far outside the first or last channel of a range
/// is still matched against that range. The computed channel number must
/// still fall within the range for the match to succeed.
pub const CHANNEL_FREQUENCY_OFFSET_MHZ: Megahertz = CHANNEL_FREQUENCY_SPREAD_MHZ * 2;

// ===== 2.4 GHZ =====

/// Lower limit of the 2.4 GHz band (MHz).
///
/// Source: ITU-R ISM allocation 2400-2500 MHz
pub const GHZ2_FREQUENCY_MIN_MHZ: Megahertz = 2400;

/// Upper limit of the 2.4 GHz band (MHz), inclusive.
///
/// Source: ITU-R ISM allocation 2400-2500 MHz
pub const GHZ2_FREQUENCY_MAX_MHZ: Megahertz = 2499;

/// Center frequency of 2.4 GHz channel 1 (MHz).
pub const GHZ2_CHANNEL_1_MHZ: Megahertz = 2412;

/// Center frequency of 2.4 GHz channel 14 (MHz).
///
/// Channel 14 sits off the regular 5 MHz grid (Japan, 802.11b only).
///
/// Source: IEEE Std 802.11-2020, Table 15-6
pub const GHZ2_CHANNEL_14_MHZ: Megahertz = 2484;

// ===== 5 GHZ =====

/// Lower limit of the 5 GHz band (MHz).
///
/// Includes the 4.9 GHz public safety / Japan allocations.
pub const GHZ5_FREQUENCY_MIN_MHZ: Megahertz = 4900;

/// Upper limit of the 5 GHz band (MHz), inclusive.
pub const GHZ5_FREQUENCY_MAX_MHZ: Megahertz = 5899;

/// Channel starting frequency for the 5 GHz band (MHz).
///
/// Channel `n` is at `5000 + 5 * n` MHz.
///
/// Source: IEEE Std 802.11-2020, 17.3.8.4.2
pub const GHZ5_CHANNEL_BASE_MHZ: Megahertz = 5000;

// ===== 6 GHZ =====

/// Lower limit of the 6 GHz band (MHz).
///
/// Source: FCC 20-51, U-NII-5 lower edge
pub const GHZ6_FREQUENCY_MIN_MHZ: Megahertz = 5925;

/// Upper limit of the 6 GHz band (MHz), inclusive.
///
/// Source: FCC 20-51, U-NII-8 upper edge
pub const GHZ6_FREQUENCY_MAX_MHZ: Megahertz = 7125;

/// Channel starting frequency for the 6 GHz band (MHz).
///
/// Channel `n` is at `5950 + 5 * n` MHz.
///
/// Source: IEEE Std 802.11ax-2021, 27.3.23.2
pub const GHZ6_CHANNEL_BASE_MHZ: Megahertz = 5950;
