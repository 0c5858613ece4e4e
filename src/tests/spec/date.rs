// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{TimeZone, Utc};

use crate::spec::date::ZipDateTime;
use crate::spec::pack::dos_timestamp;

#[test]
fn date_conversion_test_chrono() {
    let original_dt = Utc.timestamp_opt(1666544102, 0).unwrap();
    let zip_dt = ZipDateTime::from(&original_dt);
    let result_dt = zip_dt.as_chrono().single().expect("expected single unique result");
    assert_eq!(result_dt, original_dt);
}

#[test]
fn date_conversion_test() {
    let built = ZipDateTime::from(Utc.with_ymd_and_hms(2000, 9, 8, 7, 5, 4).unwrap());

    assert_eq!(2000, built.year());
    assert_eq!(9, built.month());
    assert_eq!(8, built.day());
    assert_eq!(7, built.hour());
    assert_eq!(5, built.minute());
    assert_eq!(4, built.second());
}

#[test]
fn odd_seconds_are_rounded_down() {
    let built = ZipDateTime::from(Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 27).unwrap());
    assert_eq!(26, built.second());
}

#[test]
fn dos_timestamp_layout() {
    let dt = Utc.with_ymd_and_hms(2000, 9, 8, 7, 5, 4).unwrap();
    let expected = (20 << 25) | (9 << 21) | (8 << 16) | (7 << 11) | (5 << 5) | 2;

    assert_eq!(expected, dos_timestamp(&dt));
}

#[test]
fn dates_before_1980_are_clamped() {
    let dt = Utc.with_ymd_and_hms(1970, 6, 15, 12, 30, 0).unwrap();
    let zip_dt = ZipDateTime::from(&dt);

    assert_eq!((1980, 1, 1), (zip_dt.year(), zip_dt.month(), zip_dt.day()));
    assert_eq!((0, 0, 0), (zip_dt.hour(), zip_dt.minute(), zip_dt.second()));
    assert_eq!(0x0021_0000, dos_timestamp(&dt));
}

#[test]
fn dates_after_2107_are_clamped() {
    let zip_dt = ZipDateTime::from(Utc.with_ymd_and_hms(2200, 1, 1, 0, 0, 0).unwrap());

    assert_eq!((2107, 12, 31), (zip_dt.year(), zip_dt.month(), zip_dt.day()));
    assert_eq!((23, 59, 58), (zip_dt.hour(), zip_dt.minute(), zip_dt.second()));
}

#[test]
fn first_representable_instant() {
    let dt = Utc.with_ymd_and_hms(1980, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(dos_timestamp(&dt), dos_timestamp(&Utc.timestamp_opt(0, 0).unwrap()));
}
