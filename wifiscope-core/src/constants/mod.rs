//! Constants for wifiscope Core
//!
//! Centralized, documented radio constants used by the band tables, the
//! strength scale and the distance models. Every numeric value that encodes
//! a property of the IEEE 802.11 channel plan or of radio propagation lives
//! here rather than inline.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Bands**: Band frequency limits and channel grid spacing
//! - **Propagation**: Path loss constants for distance estimation
//! - **Strength**: Signal level thresholds for strength tiers
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in the name (`_MHZ`, `_DBM`, `_DB`)
//! 3. Reference the standard or platform the value comes from

/// Band limits and channel grid spacing from the 802.11 channel plan.
pub mod bands;

/// Radio propagation constants for distance estimation.
pub mod propagation;

/// Signal level thresholds for strength classification.
pub mod strength;

pub use bands::{
    CHANNEL_FREQUENCY_SPREAD_MHZ, CHANNEL_FREQUENCY_OFFSET_MHZ,
    GHZ2_FREQUENCY_MIN_MHZ, GHZ2_FREQUENCY_MAX_MHZ,
    GHZ5_FREQUENCY_MIN_MHZ, GHZ5_FREQUENCY_MAX_MHZ,
    GHZ6_FREQUENCY_MIN_MHZ, GHZ6_FREQUENCY_MAX_MHZ,
};

pub use propagation::{FSPL_CONSTANT_MHZ_M_DB, FREE_SPACE_PATH_LOSS_EXPONENT};

pub use strength::{STRENGTH_MIN_DBM, STRENGTH_MAX_DBM};
