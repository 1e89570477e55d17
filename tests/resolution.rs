//! End-to-end resolution over hand-built southern-hemisphere fixtures,
//! cross-zone conversion, and the cache surface.

use std::sync::Arc;

use civiltz::{
    DateTime, InMemorySource, LocalTimeType, RawTransition, UtcOffsetSeconds, Zone, ZoneCache,
    ZoneData, ZoneError,
};

const AEST: i32 = 36_000;
const AEDT: i32 = 39_600;
const EST: i32 = -18_000;
const EDT: i32 = -14_400;

// Australia/Sydney observes DST across the austral summer, so the gap
// falls in October and the fold in April.
fn sydney_data() -> ZoneData {
    ZoneData {
        default_type: LocalTimeType::new(36_292, false, "LMT"),
        types: vec![
            LocalTimeType::new(AEST, false, "AEST"),
            LocalTimeType::new(AEDT, true, "AEDT"),
        ],
        transitions: vec![
            RawTransition::new(1_475_337_600, 1), // 2016-10-01T16:00:00Z
            RawTransition::new(1_491_062_400, 0), // 2017-04-01T16:00:00Z
            RawTransition::new(1_506_787_200, 1), // 2017-09-30T16:00:00Z
            RawTransition::new(1_522_512_000, 0), // 2018-03-31T16:00:00Z
        ],
    }
}

fn new_york_data() -> ZoneData {
    ZoneData {
        default_type: LocalTimeType::new(-17_762, false, "LMT"),
        types: vec![
            LocalTimeType::new(EST, false, "EST"),
            LocalTimeType::new(EDT, true, "EDT"),
        ],
        transitions: vec![
            RawTransition::new(1_457_852_400, 1), // 2016-03-13T07:00:00Z
            RawTransition::new(1_478_412_000, 0), // 2016-11-06T06:00:00Z
            RawTransition::new(1_489_302_000, 1), // 2017-03-12T07:00:00Z
            RawTransition::new(1_509_861_600, 0), // 2017-11-05T06:00:00Z
        ],
    }
}

fn cache() -> ZoneCache<InMemorySource> {
    let mut source = InMemorySource::new();
    source.insert("Australia/Sydney", sydney_data());
    source.insert("America/New_York", new_york_data());
    ZoneCache::new(source)
}

#[test]
fn sydney_gap_falls_in_october() {
    let zone = Zone::from_data("Australia/Sydney", sydney_data()).unwrap();
    let dt = DateTime::new(2017, 10, 1, 2, 30, 0, 0).unwrap();
    let resolved = zone.normalize(&dt).unwrap();
    // 02:30 was skipped; the reading lands at 03:30 AEDT.
    assert_eq!(resolved.epoch_seconds(), Some(1_506_789_000));
    let iso = resolved.iso();
    assert_eq!((iso.hour, iso.minute), (3, 30));
    let tag = resolved.resolution().unwrap();
    assert_eq!(tag.offset, UtcOffsetSeconds(AEDT));
    assert!(tag.is_dst);
    assert_eq!(tag.abbreviation, "AEDT");
}

#[test]
fn sydney_fold_falls_in_april() {
    let zone = Zone::from_data("Australia/Sydney", sydney_data()).unwrap();
    let dt = DateTime::new(2017, 4, 2, 2, 30, 0, 0).unwrap();
    let resolved = zone.normalize(&dt).unwrap();
    // The repeated 02:30 resolves to the later, standard-time reading.
    assert_eq!(resolved.epoch_seconds(), Some(1_491_064_200));
    let iso = resolved.iso();
    assert_eq!((iso.hour, iso.minute), (2, 30));
    let tag = resolved.resolution().unwrap();
    assert_eq!(tag.offset, UtcOffsetSeconds(AEST));
    assert!(!tag.is_dst);
    assert_eq!(tag.abbreviation, "AEST");
}

#[test]
fn conversion_carries_an_instant_across_zones() {
    let cache = cache();
    let new_york = cache.load("America/New_York").unwrap();
    let sydney = cache.load("Australia/Sydney").unwrap();

    let noon = new_york.datetime(2017, 6, 15, 12, 0, 0, 0).unwrap();
    assert_eq!(noon.epoch_seconds(), Some(1_497_542_400));

    let there = sydney.convert(&noon).unwrap();
    let iso = there.iso();
    assert_eq!(
        (iso.year, iso.month, iso.day, iso.hour, iso.minute),
        (2017, 6, 16, 2, 0)
    );
    let tag = there.resolution().unwrap();
    assert_eq!(tag.zone, "Australia/Sydney");
    assert_eq!(tag.abbreviation, "AEST");
    assert_eq!(there.epoch_seconds(), noon.epoch_seconds());

    // And back again without drift.
    let home = new_york.convert(&there).unwrap();
    assert_eq!(home.iso(), noon.iso());
    assert_eq!(home.resolution().unwrap().abbreviation, "EDT");
}

#[test]
fn conversion_to_utc() {
    let cache = cache();
    let new_york = cache.load("America/New_York").unwrap();
    let noon = new_york.datetime(2017, 6, 15, 12, 0, 0, 0).unwrap();

    let utc = Zone::utc().convert(&noon).unwrap();
    let iso = utc.iso();
    assert_eq!((iso.day, iso.hour), (15, 16));
    let tag = utc.resolution().unwrap();
    assert_eq!(tag.abbreviation, "UTC");
    assert_eq!(tag.offset, UtcOffsetSeconds(0));
}

#[test]
fn cache_hands_out_one_instance_per_name() {
    let cache = cache();
    let a = cache.load("Australia/Sydney").unwrap();
    let b = cache.load("Australia/Sydney").unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    assert_eq!(
        cache.load("Atlantis/Atlantis"),
        Err(ZoneError::ZoneNotFound("Atlantis/Atlantis".into()))
    );
}

#[test]
fn round_trip_inside_a_stable_period() {
    let cache = cache();
    let sydney = cache.load("Australia/Sydney").unwrap();
    for &(month, day, hour) in &[(1, 15, 9), (6, 1, 0), (12, 25, 23)] {
        let dt = DateTime::new(2017, month, day, hour, 45, 30, 250_000).unwrap();
        let resolved = sydney.normalize(&dt).unwrap();
        let back = sydney.convert(&resolved).unwrap();
        assert_eq!(back.iso(), dt.iso(), "2017-{month:02}-{day:02}T{hour:02}");
    }
}
