//! Error Types for Signal Configuration and Conversion
//!
//! ## Where Errors Come From
//!
//! A [`SignalReading`](crate::SignalReading) never fails: the scanner hands
//! us whatever the driver reported and every accessor is a total function of
//! it. Errors only appear at the edges where a caller converts raw values
//! into typed ones or configures a model:
//!
//! - `UnknownWidthCode` / `UnsupportedWidth`: converting a scan result's
//!   channel width into a [`ChannelWidth`](crate::ChannelWidth)
//! - `InvalidScale`: building a [`StrengthScale`](crate::StrengthScale)
//!   whose bounds are inverted or empty
//! - `InvalidPathLoss`: building a path loss model with parameters that
//!   would produce meaningless distances
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use wifiscope_core::{ChannelWidth, SignalError, SignalReading};
//!
//! fn reading_from_scan(frequency: i32, width_code: u8, level: i32, center: i32) -> SignalReading {
//!     let width = match ChannelWidth::from_code(width_code) {
//!         Ok(width) => width,
//!         Err(SignalError::UnknownWidthCode { .. }) => {
//!             // Newer driver, unknown width - fall back to the narrowest span
//!             ChannelWidth::default()
//!         }
//!         Err(_) => ChannelWidth::default(),
//!     };
//!     SignalReading::new(frequency, width, level, center)
//! }
//!
//! let reading = reading_from_scan(5180, 9, -70, 5180);
//! assert_eq!(reading.width(), ChannelWidth::Mhz20);
//! ```
//!
//! All variants are `Copy` and carry only integers or `&'static str`, so
//! errors can be returned from const-size contexts without allocation.

use thiserror_no_std::Error;

/// Result type for signal conversions and configuration
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// Channel width code not defined by the scan API
    #[error("Unknown channel width code {code}")]
    UnknownWidthCode {
        /// Raw width code from the scan result
        code: u8,
    },

    /// Channel width in MHz that no WiFi standard defines
    #[error("Unsupported channel width {mhz} MHz")]
    UnsupportedWidth {
        /// Requested width in MHz
        mhz: u32,
    },

    /// Strength scale bounds are inverted or empty
    #[error("Invalid strength scale [{min_dbm}, {max_dbm}] dBm")]
    InvalidScale {
        /// Level mapped to the weakest tier
        min_dbm: i32,
        /// Level mapped to the strongest tier
        max_dbm: i32,
    },

    /// Path loss model parameter out of its physical domain
    #[error("Invalid path loss model: {reason}")]
    InvalidPathLoss {
        /// Which parameter was rejected
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SignalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownWidthCode { code } =>
                defmt::write!(fmt, "Unknown width code {}", code),
            Self::UnsupportedWidth { mhz } =>
                defmt::write!(fmt, "Unsupported width {} MHz", mhz),
            Self::InvalidScale { min_dbm, max_dbm } =>
                defmt::write!(fmt, "Invalid scale [{}, {}] dBm", min_dbm, max_dbm),
            Self::InvalidPathLoss { reason } =>
                defmt::write!(fmt, "Invalid path loss: {}", reason),
        }
    }
}
