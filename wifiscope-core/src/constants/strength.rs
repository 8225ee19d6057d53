//! Signal Strength Thresholds
//!
//! Level limits used to map a received signal level onto strength tiers.

use crate::Dbm;

/// Level at or below which a signal is classified in the weakest tier (dBm).
///
/// Source: Android `WifiManager.calculateSignalLevel`, `MIN_RSSI`
pub const STRENGTH_MIN_DBM: Dbm = -100;

/// Level at or above which a signal is classified in the strongest tier (dBm).
///
/// Source: Android `WifiManager.calculateSignalLevel`, `MAX_RSSI`
pub const STRENGTH_MAX_DBM: Dbm = -55;

/// Number of strength tiers, including the empty tier.
pub const STRENGTH_TIER_COUNT: u8 = 5;
