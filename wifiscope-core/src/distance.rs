//! Distance Estimation from Received Signal Level
//!
//! ## Physics Background
//!
//! ### Free-Space Path Loss
//!
//! In free space the received power falls with the square of distance and
//! of frequency. In decibels, with `d` in meters and `f` in MHz:
//!
//! ```text
//! FSPL(dB) = 20·log10(d) + 20·log10(f) − 27.55
//! ```
//!
//! Treating the magnitude of the received level as the path loss from a
//! 0 dBm transmitter and solving for `d`:
//!
//! ```text
//! d = 10 ^ ((27.55 − 20·log10(f) + |level|) / 20)
//! ```
//!
//! This is the default model used by
//! [`SignalReading::distance`](crate::SignalReading::distance). It ignores
//! transmit power, antenna gain and walls, so it is a relative measure:
//! good for ranking access points, not for surveying.
//!
//! ### Log-Distance Path Loss
//!
//! Indoors, walls and reflections steepen the fall-off. The log-distance
//! model takes a level measured at 1 m and an environment exponent `n`:
//!
//! ```text
//! d = 10 ^ ((level_1m − level) / (10 · n))
//! ```
//!
//! | Environment        | n        |
//! |--------------------|----------|
//! | Free space         | 2.0      |
//! | Urban outdoor      | 2.7-3.5  |
//! | Office / residence | 3.0-4.0  |
//!
//! Source: Rappaport, Wireless Communications, §4.9
//!
//! ## Usage Example
//!
//! ```rust
//! use wifiscope_core::{calculate_distance, ChannelWidth, LogDistancePathLoss, SignalReading};
//!
//! let free_space = calculate_distance(2437, -36);
//! assert!((free_space - 0.62).abs() < 0.01);
//!
//! let reading = SignalReading::new(2437, ChannelWidth::Mhz20, -70, 2437);
//! let indoor = reading.distance_with(&LogDistancePathLoss::indoor());
//! assert!((indoor - 10.0).abs() < 0.01);
//! ```

use crate::{
    constants::propagation::{
        FREE_SPACE_PATH_LOSS_EXPONENT, FSPL_CONSTANT_MHZ_M_DB,
        INDOOR_PATH_LOSS_EXPONENT, OUTDOOR_PATH_LOSS_EXPONENT,
        REFERENCE_LEVEL_AT_1M_DBM,
    },
    errors::{SignalError, SignalResult},
    traits::DistanceEstimator,
    Dbm, Megahertz,
};

/// Free-space path loss distance with the default constant
pub fn calculate_distance(frequency: Megahertz, level: Dbm) -> f64 {
    FreeSpacePathLoss::default().estimate_distance(frequency, level)
}

/// Free-space path loss model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeSpacePathLoss {
    /// FSPL constant for the MHz / meter unit pair (dB)
    constant_db: f64,
}

impl Default for FreeSpacePathLoss {
    fn default() -> Self {
        Self {
            constant_db: FSPL_CONSTANT_MHZ_M_DB,
        }
    }
}

impl FreeSpacePathLoss {
    /// Model with a calibrated constant, e.g. to fold in antenna gain
    pub fn with_constant(constant_db: f64) -> SignalResult<Self> {
        if !constant_db.is_finite() {
            return Err(SignalError::InvalidPathLoss {
                reason: "constant must be finite",
            });
        }

        log_debug!("Free-space path loss constant {} dB", constant_db);
        Ok(Self { constant_db })
    }

    /// Path loss constant in dB
    pub fn constant_db(&self) -> f64 {
        self.constant_db
    }
}

impl DistanceEstimator for FreeSpacePathLoss {
    fn estimate_distance(&self, frequency: Megahertz, level: Dbm) -> f64 {
        // log10 of a non-positive frequency has no physical meaning
        if frequency <= 0 {
            return f64::INFINITY;
        }

        let frequency_term = 20.0 * libm::log10(f64::from(frequency));
        let loss_db = f64::from(level.unsigned_abs());
        let exponent = (self.constant_db - frequency_term + loss_db) / 20.0;

        libm::pow(10.0, exponent)
    }
}

/// Log-distance path loss model calibrated at 1 m
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogDistancePathLoss {
    /// Level received 1 m from the transmitter (dBm)
    reference_dbm: f64,
    /// Environment path loss exponent
    exponent: f64,
}

impl Default for LogDistancePathLoss {
    fn default() -> Self {
        Self {
            reference_dbm: REFERENCE_LEVEL_AT_1M_DBM,
            exponent: FREE_SPACE_PATH_LOSS_EXPONENT,
        }
    }
}

impl LogDistancePathLoss {
    /// Create a model; the exponent must be positive and both values finite
    pub fn new(reference_dbm: f64, exponent: f64) -> SignalResult<Self> {
        if !reference_dbm.is_finite() {
            return Err(SignalError::InvalidPathLoss {
                reason: "reference level must be finite",
            });
        }
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(SignalError::InvalidPathLoss {
                reason: "exponent must be positive",
            });
        }
        if exponent < FREE_SPACE_PATH_LOSS_EXPONENT {
            log_warn!(
                "Path loss exponent {} is below free space ({}), distances will be inflated",
                exponent, FREE_SPACE_PATH_LOSS_EXPONENT
            );
        }

        log_debug!(
            "Log-distance path loss: {} dBm at 1 m, exponent {}",
            reference_dbm, exponent
        );
        Ok(Self { reference_dbm, exponent })
    }

    /// Typical office or residential building
    pub fn indoor() -> Self {
        Self {
            reference_dbm: REFERENCE_LEVEL_AT_1M_DBM,
            exponent: INDOOR_PATH_LOSS_EXPONENT,
        }
    }

    /// Typical urban outdoor line of sight
    pub fn outdoor() -> Self {
        Self {
            reference_dbm: REFERENCE_LEVEL_AT_1M_DBM,
            exponent: OUTDOOR_PATH_LOSS_EXPONENT,
        }
    }

    /// Level at 1 m in dBm
    pub fn reference_dbm(&self) -> f64 {
        self.reference_dbm
    }

    /// Path loss exponent
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl DistanceEstimator for LogDistancePathLoss {
    fn estimate_distance(&self, _frequency: Megahertz, level: Dbm) -> f64 {
        let loss_db = self.reference_dbm - f64::from(level);
        libm::pow(10.0, loss_db / (10.0 * self.exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            libm::fabs(actual - expected) < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn free_space_distances() {
        assert_close(calculate_distance(2437, -36), 0.62);
        assert_close(calculate_distance(2437, -88), 245.84);
        assert_close(calculate_distance(5180, -36), 0.29);
        assert_close(calculate_distance(5180, -88), 115.66);
    }

    #[test]
    fn weaker_signal_is_farther() {
        assert!(calculate_distance(2412, -80) > calculate_distance(2412, -50));
    }

    #[test]
    fn higher_frequency_is_closer_at_same_level() {
        assert!(calculate_distance(5180, -60) < calculate_distance(2412, -60));
    }

    #[test]
    fn level_sign_is_ignored() {
        assert_eq!(calculate_distance(2412, -60), calculate_distance(2412, 60));
    }

    #[test]
    fn non_positive_frequency_has_no_finite_distance() {
        assert_eq!(calculate_distance(0, -50), f64::INFINITY);
        assert_eq!(calculate_distance(-2412, -50), f64::INFINITY);
    }

    #[test]
    fn extreme_level_does_not_overflow() {
        assert!(calculate_distance(2412, i32::MIN) > 0.0);
    }

    #[test]
    fn calibrated_constant() {
        let model = FreeSpacePathLoss::with_constant(33.55).unwrap();
        // +6 dB doubles the distance
        let ratio = model.estimate_distance(2437, -60) / calculate_distance(2437, -60);
        assert_close(ratio, 1.995);
        assert!(FreeSpacePathLoss::with_constant(f64::NAN).is_err());
    }

    #[test]
    fn log_distance_model() {
        let model = LogDistancePathLoss::new(-40.0, 2.0).unwrap();
        assert_close(model.estimate_distance(2437, -40), 1.0);
        assert_close(model.estimate_distance(2437, -60), 10.0);
        assert_close(LogDistancePathLoss::indoor().estimate_distance(5180, -70), 10.0);
    }

    #[test]
    fn log_distance_rejects_bad_parameters() {
        assert_eq!(
            LogDistancePathLoss::new(-40.0, 0.0),
            Err(SignalError::InvalidPathLoss { reason: "exponent must be positive" })
        );
        assert!(LogDistancePathLoss::new(f64::INFINITY, 3.0).is_err());
        assert!(LogDistancePathLoss::new(-40.0, f64::NAN).is_err());
    }

    #[test]
    fn estimator_through_reference() {
        let model = LogDistancePathLoss::outdoor();
        let by_ref: &dyn DistanceEstimator = &model;
        assert_eq!(
            by_ref.estimate_distance(2412, -67),
            model.estimate_distance(2412, -67)
        );
    }
}
