//! Property-based tests for `UptimeRobotDate` parsing.
//!
//! # Test Coverage
//! - Four-digit years written as `MM/DD/YYYY HH:MM:SS` parse back to the same instant
//! - Two-digit years pivot at 69: `00`-`68` are 20xx, `69`-`99` are 19xx
//! - Text that is not a date never parses

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use uptimerobot_client::UptimeRobotDate;

fn datetime_strategy(years: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = NaiveDateTime> {
    (years, 1..=12u32, 1..=28u32, 0..24u32, 0..60u32, 0..60u32).prop_map(
        |(year, month, day, hour, minute, second)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|d| d.and_hms_opt(hour, minute, second))
                .expect("components are always in range")
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    #[test]
    fn four_digit_year_parses_to_same_instant(dt in datetime_strategy(1970..=2099)) {
        let text = dt.format("%m/%d/%Y %H:%M:%S").to_string();
        let parsed: UptimeRobotDate = text.parse().unwrap();

        prop_assert_eq!(parsed.datetime(), dt);
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn two_digit_year_pivots_at_69(dt in datetime_strategy(1969..=2068)) {
        let text = dt.format("%m/%d/%y %H:%M:%S").to_string();
        let parsed: UptimeRobotDate = text.parse().unwrap();

        prop_assert_eq!(parsed.datetime(), dt);
    }

    #[test]
    fn non_dates_are_rejected(text in "[a-zA-Z ]{0,20}") {
        prop_assert!(text.parse::<UptimeRobotDate>().is_err());
    }
}
