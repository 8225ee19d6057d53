//! Core signal model for wifiscope
//!
//! Turns a single WiFi scan observation into the quantities a channel graph
//! or access point list needs: band, channel, occupied frequency span,
//! signal strength tier and an estimated distance to the transmitter.
//!
//! Key constraints:
//! - Readings never fail to construct, whatever the scanner reported
//! - No heap allocation, builds without `std`
//! - Channel tables are static data
//!
//! ```
//! use wifiscope_core::{Band, ChannelWidth, SignalReading, Strength};
//!
//! let reading = SignalReading::new(2437, ChannelWidth::Mhz40, -61, 2427);
//!
//! assert_eq!(reading.band(), Band::Ghz2);
//! assert_eq!(reading.channel().number(), 6);
//! assert_eq!(reading.frequency_start(), 2417);
//! assert_eq!(reading.frequency_end(), 2457);
//! assert_eq!(reading.strength(), Strength::Three);
//! assert!(reading.distance() > 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod band;
pub mod constants;
pub mod distance;
pub mod errors;
pub mod signal;
pub mod strength;
pub mod traits;

/// Frequency in megahertz
pub type Megahertz = i32;

/// Signal level in dBm
pub type Dbm = i32;

// Public API
pub use band::{Band, Channel, ChannelRange, ChannelTable, ChannelWidth};
pub use distance::{calculate_distance, FreeSpacePathLoss, LogDistancePathLoss};
pub use errors::{SignalError, SignalResult};
pub use signal::SignalReading;
pub use strength::{Strength, StrengthScale};
pub use traits::DistanceEstimator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
