//! Easter computus and Easter-anchored feasts.

use almanac_time::easter::{easter_days_after_march_21, easter_jdn};
use almanac_time::{easter_sunday, feast_date, Feast, Month, MonthDay, Weekday};

#[test]
fn easter_sundays() {
    let known = [
        (1900, Month::April, 15),
        (1961, Month::April, 2),
        (2000, Month::April, 23),
        (2008, Month::March, 23),
        (2011, Month::April, 24),
        (2019, Month::April, 21),
        (2024, Month::March, 31),
        (2025, Month::April, 20),
        (2026, Month::April, 5),
    ];
    for (year, month, day) in known {
        assert_eq!(easter_sunday(year), MonthDay::new(month, day), "{year}");
    }
}

#[test]
fn easter_stays_within_bounds() {
    for year in 1583..=4099 {
        let easter = easter_sunday(year);
        let in_march = easter.month == Month::March && (22..=31).contains(&easter.day);
        let in_april = easter.month == Month::April && (1..=25).contains(&easter.day);
        assert!(in_march || in_april, "{year}: {easter}");
        assert_eq!(easter_jdn(year).weekday().days_from_sunday(), 0, "{year}");
    }
}

#[test]
fn easter_offset_anchors_on_march_21() {
    assert_eq!(easter_days_after_march_21(2024), 10);
    assert_eq!(easter_days_after_march_21(2025), 30);
}

#[test]
fn easter_monday_2024() {
    let monday = feast_date(2024, 1).unwrap();
    assert_eq!((monday.month(), monday.day()), (4, 1));
}

#[test]
fn feast_weekdays() {
    let expected = [
        (Feast::MardiGras, Weekday::Tuesday),
        (Feast::AshWednesday, Weekday::Wednesday),
        (Feast::MidLent, Weekday::Thursday),
        (Feast::GoodFriday, Weekday::Friday),
        (Feast::EasterSunday, Weekday::Sunday),
        (Feast::EasterMonday, Weekday::Monday),
        (Feast::Ascension, Weekday::Thursday),
        (Feast::Pentecost, Weekday::Sunday),
        (Feast::WhitMonday, Weekday::Monday),
        (Feast::CorpusChristi, Weekday::Thursday),
    ];
    for year in [1999, 2024, 2025, 2038] {
        for (feast, weekday) in expected {
            let jdn = easter_jdn(year) + i64::from(feast.offset());
            assert_eq!(jdn.weekday(), weekday, "{feast:?} {year}");
        }
    }
}

#[test]
fn feasts_are_listed_in_calendar_order() {
    let offsets: Vec<i32> = Feast::ALL.iter().map(Feast::offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);
}

#[test]
fn pentecost_2024() {
    let d = Feast::Pentecost.date(2024).unwrap();
    assert_eq!(d.ymd(), (2024, 5, 19));
    let d = Feast::AshWednesday.date(2024).unwrap();
    assert_eq!(d.ymd(), (2024, 2, 14));
}
