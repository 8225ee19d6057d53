//! Signal Strength Tiers
//!
//! ## Overview
//!
//! A received level in dBm is mapped onto five tiers, the "bars" shown next
//! to a network name. The mapping is linear between two limits:
//!
//! ```text
//!  level <= min                 → Zero
//!  level >= max                 → Four
//!  otherwise  tier = ⌊(level - min) · 4 / (max - min)⌋
//! ```
//!
//! With the default scale (−100 dBm to −55 dBm) each tier covers 11.25 dB:
//!
//! | Level (dBm)        | Tier  |
//! |--------------------|-------|
//! | ≤ −100 ... −88.75  | Zero  |
//! | −88.75 ... −77.5   | One   |
//! | −77.5 ... −66.25   | Two   |
//! | −66.25 ... −55     | Three |
//! | ≥ −55              | Four  |
//!
//! ## Custom Scales
//!
//! ```rust
//! use wifiscope_core::{Strength, StrengthScale};
//!
//! // Dense office deployment: treat anything below -70 dBm as unusable
//! let strict = StrengthScale::new(-70, -45)?;
//! assert_eq!(Strength::calculate_with(-72, &strict), Strength::Zero);
//! assert_eq!(Strength::calculate(-72), Strength::Two);
//! # Ok::<(), wifiscope_core::SignalError>(())
//! ```

use core::fmt;

use crate::{
    constants::strength::{STRENGTH_MAX_DBM, STRENGTH_MIN_DBM, STRENGTH_TIER_COUNT},
    errors::{SignalError, SignalResult},
    Dbm,
};

/// Level limits for strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthScale {
    /// Levels at or below this are [`Strength::Zero`]
    min_dbm: Dbm,
    /// Levels at or above this are [`Strength::Four`]
    max_dbm: Dbm,
}

impl Default for StrengthScale {
    fn default() -> Self {
        Self {
            min_dbm: STRENGTH_MIN_DBM,
            max_dbm: STRENGTH_MAX_DBM,
        }
    }
}

impl StrengthScale {
    /// Create a scale; `min_dbm` must be below `max_dbm`
    pub fn new(min_dbm: Dbm, max_dbm: Dbm) -> SignalResult<Self> {
        if min_dbm >= max_dbm {
            return Err(SignalError::InvalidScale { min_dbm, max_dbm });
        }

        Ok(Self { min_dbm, max_dbm })
    }

    /// Weakest-tier limit
    pub const fn min_dbm(&self) -> Dbm {
        self.min_dbm
    }

    /// Strongest-tier limit
    pub const fn max_dbm(&self) -> Dbm {
        self.max_dbm
    }

    /// Tier index `0..STRENGTH_TIER_COUNT` for a level
    fn tier_index(&self, level: Dbm) -> usize {
        let top = usize::from(STRENGTH_TIER_COUNT - 1);

        if level <= self.min_dbm {
            0
        } else if level >= self.max_dbm {
            top
        } else {
            let input_range = (i64::from(self.max_dbm) - i64::from(self.min_dbm)) as f32;
            let offset = (i64::from(level) - i64::from(self.min_dbm)) as f32;
            let tier = offset * top as f32 / input_range;
            // Truncate toward the lower tier
            (tier as usize).min(top)
        }
    }
}

/// Discrete signal strength, in signal bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strength {
    /// No bars, barely usable
    Zero,
    /// One bar
    One,
    /// Two bars
    Two,
    /// Three bars
    Three,
    /// Four bars, excellent
    Four,
}

impl Strength {
    /// Every tier, weakest first
    pub const ALL: [Strength; STRENGTH_TIER_COUNT as usize] = [
        Strength::Zero,
        Strength::One,
        Strength::Two,
        Strength::Three,
        Strength::Four,
    ];

    /// Classify a level with the default scale
    pub fn calculate(level: Dbm) -> Self {
        Self::calculate_with(level, &StrengthScale::default())
    }

    /// Classify a level with a custom scale
    pub fn calculate_with(level: Dbm, scale: &StrengthScale) -> Self {
        Self::ALL[scale.tier_index(level)]
    }

    /// Number of bars, 0 to 4
    pub const fn bars(&self) -> u8 {
        *self as u8
    }

    /// True for the weakest tier
    pub const fn is_weak(&self) -> bool {
        matches!(self, Strength::Zero)
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Strength::Zero => "unusable",
            Strength::One => "poor",
            Strength::Two => "fair",
            Strength::Three => "good",
            Strength::Four => "excellent",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_tiers() {
        assert_eq!(Strength::calculate(-110), Strength::Zero);
        assert_eq!(Strength::calculate(-100), Strength::Zero);
        assert_eq!(Strength::calculate(-99), Strength::Zero);
        assert_eq!(Strength::calculate(-88), Strength::One);
        assert_eq!(Strength::calculate(-80), Strength::One);
        assert_eq!(Strength::calculate(-70), Strength::Two);
        assert_eq!(Strength::calculate(-60), Strength::Three);
        assert_eq!(Strength::calculate(-55), Strength::Four);
        assert_eq!(Strength::calculate(-36), Strength::Four);
    }

    #[test]
    fn extreme_levels_do_not_overflow() {
        assert_eq!(Strength::calculate(i32::MIN), Strength::Zero);
        assert_eq!(Strength::calculate(i32::MAX), Strength::Four);
    }

    #[test]
    fn inverted_scale_rejected() {
        assert_eq!(
            StrengthScale::new(-50, -90),
            Err(SignalError::InvalidScale { min_dbm: -50, max_dbm: -90 })
        );
        assert!(StrengthScale::new(-60, -60).is_err());
    }

    #[test]
    fn custom_scale() {
        let scale = StrengthScale::new(-90, -50).unwrap();
        assert_eq!(Strength::calculate_with(-90, &scale), Strength::Zero);
        assert_eq!(Strength::calculate_with(-70, &scale), Strength::Two);
        assert_eq!(Strength::calculate_with(-50, &scale), Strength::Four);
    }

    #[test]
    fn bars_and_weakness() {
        assert_eq!(Strength::Zero.bars(), 0);
        assert_eq!(Strength::Four.bars(), 4);
        assert!(Strength::Zero.is_weak());
        assert!(!Strength::One.is_weak());
        assert!(Strength::One < Strength::Three);
    }
}
