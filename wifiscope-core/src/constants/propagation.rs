//! Radio Propagation Constants
//!
//! Constants for estimating transmitter distance from received signal level.

/// Free-space path loss constant for MHz and meters (dB).
///
/// Free-space path loss in dB is
/// `FSPL = 20·log10(d) + 20·log10(f) - 27.55` with `d` in meters and `f` in
/// MHz. Solving for distance gives
/// `d = 10 ^ ((27.55 - 20·log10(f) + |level|) / 20)`, treating the received
/// level as the loss from a 0 dBm transmitter.
///
/// Source: Friis transmission equation, `20·log10(4π/c)` with unit scaling
pub const FSPL_CONSTANT_MHZ_M_DB: f64 = 27.55;

/// Free-space path loss exponent.
///
/// Received power falls with the square of distance in free space.
/// Indoor environments typically show exponents of 2.7 to 4.
pub const FREE_SPACE_PATH_LOSS_EXPONENT: f64 = 2.0;

/// Typical indoor path loss exponent (office, residential).
///
/// Source: Rappaport, Wireless Communications, Table 4.2
pub const INDOOR_PATH_LOSS_EXPONENT: f64 = 3.0;

/// Typical outdoor urban path loss exponent.
///
/// Source: Rappaport, Wireless Communications, Table 4.2
pub const OUTDOOR_PATH_LOSS_EXPONENT: f64 = 2.7;

/// Typical received level at 1 m from a consumer access point (dBm).
///
/// Consumer APs transmit around +20 dBm; at 2.4 GHz the free-space loss
/// at 1 m is about 40 dB.
pub const REFERENCE_LEVEL_AT_1M_DBM: f64 = -40.0;
