//! Core traits for signal models
//!
//! Keep them small - a scan reading only needs a handful of seams.

use crate::{Dbm, Megahertz};

/// Estimates the distance to a transmitter from a received level
///
/// Implementations must be total: any frequency and level yields a value,
/// using `f64::INFINITY` where no finite estimate exists.
pub trait DistanceEstimator {
    /// Distance in meters for a signal received at `level` on `frequency`
    fn estimate_distance(&self, frequency: Megahertz, level: Dbm) -> f64;
}

impl<T: DistanceEstimator + ?Sized> DistanceEstimator for &T {
    fn estimate_distance(&self, frequency: Megahertz, level: Dbm) -> f64 {
        (**self).estimate_distance(frequency, level)
    }
}
