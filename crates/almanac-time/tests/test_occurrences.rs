//! Calendar-system conversions and the holiday-builder boundary.

use std::sync::Arc;
use std::thread;

use almanac_time::correction::{FIRST_YEAR, LAST_YEAR};
use almanac_time::gregorian::jdn_to_gregorian;
use almanac_time::hijri::hijri_to_jdn;
use almanac_time::{
    feast_in_year, hijri_occurrences, indian_occurrences, CalendarSystem, CivilDate, Converter,
    CorrectionTable, Feast, HijriReckoning,
};

/// Tabular table with 1 Shawwal 1444 tabulated on 21 April 2023.
fn fixture() -> CorrectionTable {
    let mut bytes = Vec::new();
    for year in FIRST_YEAR..=LAST_YEAR {
        for month in 1..=12u8 {
            let (gy, gm, gd) = if (year, month) == (1444, 10) {
                (2023, 4, 21)
            } else {
                jdn_to_gregorian(hijri_to_jdn(year, month, 1).unwrap()).unwrap()
            };
            bytes.extend_from_slice(format!("{gd:02}/{gm:02}/{gy:04}\r").as_bytes());
        }
    }
    CorrectionTable::load(bytes.as_slice()).unwrap()
}

fn ymd(dates: &[CivilDate]) -> Vec<(i32, u8, u8)> {
    dates.iter().map(CivilDate::ymd).collect()
}

#[test]
fn eid_al_fitr_follows_correction() {
    let table = fixture();
    let corrected = hijri_occurrences(&table, HijriReckoning::UmmAlQura, 2023, 10, 1).unwrap();
    assert_eq!(ymd(&corrected), vec![(2023, 4, 21)]);
    let tabular = hijri_occurrences(&table, HijriReckoning::Tabular, 2023, 10, 1).unwrap();
    assert_eq!(ymd(&tabular), vec![(2023, 4, 22)]);
}

#[test]
fn missing_hijri_day_yields_nothing() {
    let table = fixture();
    // 30 Ramadan 1444 does not exist once Shawwal starts a day early.
    let corrected = hijri_occurrences(&table, HijriReckoning::UmmAlQura, 2023, 9, 30).unwrap();
    assert!(corrected.is_empty());
    let tabular = hijri_occurrences(&table, HijriReckoning::Tabular, 2023, 9, 30).unwrap();
    assert_eq!(ymd(&tabular), vec![(2023, 4, 21)]);
}

#[test]
fn every_hijri_day_lands_once_or_twice() {
    let table = CorrectionTable::uncorrected();
    for year in 2000..2030 {
        let dates = hijri_occurrences(&table, HijriReckoning::Tabular, year, 3, 12).unwrap();
        assert!((1..=2).contains(&dates.len()), "{year}: {dates:?}");
        assert!(dates.windows(2).all(|w| w[0].ymd() < w[1].ymd()));
        for d in dates {
            assert_eq!(d.system(), CalendarSystem::Gregorian);
            assert_eq!(d.year(), year);
        }
    }
}

#[test]
fn indian_days_land_once_per_year() {
    for year in 1990..2030 {
        for (month, day) in [(1, 1), (5, 24), (10, 11), (12, 30)] {
            let dates = indian_occurrences(year, month, day).unwrap();
            assert_eq!(dates.len(), 1, "{year} {month}/{day}: {dates:?}");
        }
    }
}

#[test]
fn chaitra_31_only_in_leap_years() {
    assert_eq!(ymd(&indian_occurrences(2024, 1, 31).unwrap()), vec![(2024, 4, 20)]);
    assert!(indian_occurrences(2023, 1, 31).unwrap().is_empty());
    assert!(indian_occurrences(2023, 13, 1).is_err());
}

#[test]
fn feasts_through_boundary() {
    assert_eq!(
        feast_in_year(2025, Feast::Ascension).unwrap().ymd(),
        (2025, 5, 29)
    );
}

#[test]
fn converter_applies_correction_only_from_hijri() {
    let table = fixture();
    let converter = Converter::new(&table, HijriReckoning::UmmAlQura);
    let eid = CivilDate::hijri(1444, 10, 1).unwrap();
    let greg = converter.convert(&eid, CalendarSystem::Gregorian).unwrap();
    assert_eq!(greg.ymd(), (2023, 4, 21));
    let back = converter.convert(&greg, CalendarSystem::Hijri).unwrap();
    assert_eq!(back.ymd(), (1444, 9, 30));

    let saka = converter.convert(&eid, CalendarSystem::Indian).unwrap();
    assert_eq!(saka.ymd(), (1945, 2, 1));
}

#[test]
fn converter_accepts_corrected_30th_day() {
    let table = fixture();
    let converter = Converter::new(&table, HijriReckoning::UmmAlQura);
    assert!(CivilDate::hijri(1444, 10, 30).is_err());
    let last = converter.date(CalendarSystem::Hijri, 1444, 10, 30).unwrap();
    let greg = converter.convert(&last, CalendarSystem::Gregorian).unwrap();
    assert_eq!(greg.ymd(), (2023, 5, 20));
}

#[test]
fn shared_table_across_threads() {
    let table = Arc::new(fixture());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let converter = Converter::new(&table, HijriReckoning::UmmAlQura);
                let date = CivilDate::hijri(1444, 10, 1 + i).unwrap();
                converter
                    .convert(&date, CalendarSystem::Gregorian)
                    .unwrap()
                    .ymd()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![(2023, 4, 21), (2023, 4, 22), (2023, 4, 23), (2023, 4, 24)]
    );
}
