//! Common test utilities for integration tests
//!
//! This module provides:
//! - proptest strategies for scan values (frequencies, widths, levels)
//! - A fixed scan fixture resembling a busy apartment building
//! - Hash helpers for checking the equality/hash contract

#![allow(dead_code)]

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use proptest::prelude::*;

use wifiscope_core::{ChannelWidth, SignalReading};

/// Any channel width
pub fn any_width() -> impl Strategy<Value = ChannelWidth> {
    prop::sample::select(ChannelWidth::ALL.to_vec())
}

/// Frequencies inside one of the known bands
pub fn band_frequency() -> impl Strategy<Value = i32> {
    prop_oneof![2400..=2499i32, 4900..=5899i32, 5925..=7125i32]
}

/// Frequencies far enough from the i32 limits that a span never saturates
pub fn unsaturated_frequency() -> impl Strategy<Value = i32> {
    -1_000_000..=1_000_000i32
}

/// Levels a real scanner reports
pub fn scan_level() -> impl Strategy<Value = i32> {
    -120..=0i32
}

/// Hash a value with the std hasher
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// One observed access point in a fixture scan
#[derive(Debug, Clone, Copy)]
pub struct ScanEntry {
    pub ssid: &'static str,
    pub reading: SignalReading,
}

/// Scan of a busy apartment building
///
/// Contains duplicates of the same channel slot heard at different levels
/// and one reading on a frequency outside every band.
pub fn apartment_scan() -> Vec<ScanEntry> {
    vec![
        ScanEntry {
            ssid: "home-2g",
            reading: SignalReading::new(2437, ChannelWidth::Mhz20, -42, 2437),
        },
        ScanEntry {
            ssid: "neighbor",
            reading: SignalReading::new(2437, ChannelWidth::Mhz20, -78, 2437),
        },
        ScanEntry {
            ssid: "cafe",
            reading: SignalReading::new(2412, ChannelWidth::Mhz40, -85, 2422),
        },
        ScanEntry {
            ssid: "home-5g",
            reading: SignalReading::new(5180, ChannelWidth::Mhz80, -55, 5210),
        },
        ScanEntry {
            ssid: "office",
            reading: SignalReading::new(5745, ChannelWidth::Mhz80, -91, 5775),
        },
        ScanEntry {
            ssid: "home-6g",
            reading: SignalReading::new(6115, ChannelWidth::Mhz160, -63, 6185),
        },
        ScanEntry {
            ssid: "misreport",
            reading: SignalReading::new(900, ChannelWidth::Mhz20, -70, 900),
        },
    ]
}
