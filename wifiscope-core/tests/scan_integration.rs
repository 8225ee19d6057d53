//! End-to-end tests over a fixture scan
//!
//! Exercises the way a scan screen consumes readings: dedupe by channel
//! slot, group by band, rank by strength and find overlapping neighbors.

mod common;

use std::collections::{BTreeMap, HashSet};

use wifiscope_core::{
    Band, Channel, ChannelWidth, DistanceEstimator, LogDistancePathLoss, SignalReading,
    Strength, StrengthScale,
};

use common::apartment_scan;

#[test]
fn dedupe_by_channel_slot() {
    let scan = apartment_scan();
    let slots: HashSet<SignalReading> = scan.iter().map(|entry| entry.reading).collect();

    // "home-2g" and "neighbor" share 2437 MHz / 20 MHz
    assert_eq!(scan.len(), 7);
    assert_eq!(slots.len(), 6);
    assert!(slots.contains(&SignalReading::new(2437, ChannelWidth::Mhz20, 0, 0)));
}

#[test]
fn group_by_band() {
    let mut per_band: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for entry in apartment_scan() {
        per_band
            .entry(entry.reading.band().name())
            .or_default()
            .push(entry.ssid);
    }

    assert_eq!(per_band["2.4 GHz"], ["home-2g", "neighbor", "cafe"]);
    assert_eq!(per_band["5 GHz"], ["home-5g", "office"]);
    assert_eq!(per_band["6 GHz"], ["home-6g"]);
    assert_eq!(per_band[Band::Unknown.name()], ["misreport"]);
}

#[test]
fn channels_for_every_known_reading() {
    let channels: Vec<(&str, Channel)> = apartment_scan()
        .into_iter()
        .map(|entry| (entry.ssid, entry.reading.channel()))
        .collect();

    assert_eq!(
        channels,
        [
            ("home-2g", Channel::new(6, 2437)),
            ("neighbor", Channel::new(6, 2437)),
            ("cafe", Channel::new(1, 2412)),
            ("home-5g", Channel::new(36, 5180)),
            ("office", Channel::new(149, 5745)),
            ("home-6g", Channel::new(33, 6115)),
            ("misreport", Channel::UNKNOWN),
        ]
    );
}

#[test]
fn rank_by_strength_then_distance() {
    let mut scan = apartment_scan();
    scan.retain(|entry| entry.reading.band().is_known());
    scan.sort_by(|a, b| {
        b.reading
            .strength()
            .cmp(&a.reading.strength())
            .then(a.reading.distance().total_cmp(&b.reading.distance()))
    });

    let ranked: Vec<(&str, Strength)> = scan
        .iter()
        .map(|entry| (entry.ssid, entry.reading.strength()))
        .collect();

    assert_eq!(
        ranked,
        [
            ("home-2g", Strength::Four),
            ("home-5g", Strength::Four),
            ("home-6g", Strength::Three),
            ("neighbor", Strength::One),
            ("cafe", Strength::One),
            ("office", Strength::Zero),
        ]
    );
}

#[test]
fn overlapping_neighbors() {
    let scan = apartment_scan();
    let cafe = SignalReading::new(2412, ChannelWidth::Mhz40, -85, 2422);

    // Readings whose primary channel falls inside the cafe's 40 MHz span
    let overlapping: Vec<&str> = scan
        .iter()
        .filter(|entry| entry.ssid != "cafe" && cafe.is_in_range(entry.reading.primary_frequency()))
        .map(|entry| entry.ssid)
        .collect();

    assert_eq!(cafe.frequency_start(), 2392);
    assert_eq!(cafe.frequency_end(), 2432);
    assert!(overlapping.is_empty());

    let wide = SignalReading::new(2427, ChannelWidth::Mhz40, -60, 2427);
    let overlapping: Vec<&str> = scan
        .iter()
        .filter(|entry| wide.is_in_range(entry.reading.primary_frequency()))
        .map(|entry| entry.ssid)
        .collect();
    assert_eq!(overlapping, ["home-2g", "neighbor", "cafe"]);
}

#[test]
fn custom_scale_and_model_across_scan() {
    let strict = StrengthScale::new(-70, -40).unwrap();
    let indoor = LogDistancePathLoss::indoor();

    for entry in apartment_scan() {
        let reading = entry.reading;
        assert!(reading.strength_with(&strict) <= reading.strength());
        assert_eq!(
            reading.distance_with(&indoor),
            indoor.estimate_distance(reading.primary_frequency(), reading.level())
        );
    }

    let models: [&dyn DistanceEstimator; 2] = [&indoor, &LogDistancePathLoss::outdoor()];
    let home = SignalReading::new(5180, ChannelWidth::Mhz80, -55, 5210);
    assert!(home.distance_with(models[0]) < home.distance_with(models[1]));
}
