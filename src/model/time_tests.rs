//! Tests for TimeValue, WheelState and the hour mapping.

use super::*;

fn t(hour: u8, minute: u8) -> TimeValue {
    TimeValue::new(hour, minute).expect("valid time")
}

// ===== TimeValue construction =====

#[test]
fn new_rejects_hour_24() {
    assert_eq!(TimeValue::new(24, 0), Err(TimeParseError::HourOutOfRange(24)));
}

#[test]
fn new_rejects_minute_60() {
    assert_eq!(
        TimeValue::new(0, 60),
        Err(TimeParseError::MinuteOutOfRange(60))
    );
}

#[test]
fn clamped_pulls_values_into_range() {
    assert_eq!(TimeValue::clamped(-3, 75), t(0, 59));
    assert_eq!(TimeValue::clamped(31, -1), t(23, 0));
}

// ===== Canonical string boundary =====

#[test]
fn display_is_zero_padded_24h() {
    assert_eq!(t(8, 0).to_string(), "08:00");
    assert_eq!(t(17, 5).to_string(), "17:05");
}

#[test]
fn from_str_accepts_unpadded_hour() {
    assert_eq!("8:00".parse::<TimeValue>(), Ok(t(8, 0)));
    assert_eq!("23:59".parse::<TimeValue>(), Ok(t(23, 59)));
}

#[test]
fn from_str_rejects_malformed_input() {
    for raw in ["", "8", "8:0", "ab:cd", "123:00", ":30", "12:345"] {
        assert!(
            matches!(raw.parse::<TimeValue>(), Err(TimeParseError::Malformed(_))),
            "{raw:?} should be malformed"
        );
    }
}

#[test]
fn from_str_reports_out_of_range_fields() {
    assert_eq!(
        "24:00".parse::<TimeValue>(),
        Err(TimeParseError::HourOutOfRange(24))
    );
    assert_eq!(
        "10:61".parse::<TimeValue>(),
        Err(TimeParseError::MinuteOutOfRange(61))
    );
}

#[test]
fn parse_lenient_never_fails() {
    assert_eq!(TimeValue::parse_lenient("7:5"), t(7, 5));
    assert_eq!(TimeValue::parse_lenient("99:99"), t(23, 59));
    assert_eq!(TimeValue::parse_lenient("garbage"), TimeValue::MIDNIGHT);
    assert_eq!(TimeValue::parse_lenient("12:xx"), t(12, 0));
    assert_eq!(TimeValue::parse_lenient(""), TimeValue::MIDNIGHT);
}

// ===== from_canonical =====

#[test]
fn midnight_projects_to_twelve_am() {
    let wheel = WheelState::from_canonical(t(0, 5), ClockMode::TwelveHour);
    assert_eq!(wheel.display_hour(), 12);
    assert_eq!(wheel.minute(), 5);
    assert!(wheel.is_am());
}

#[test]
fn noon_projects_to_twelve_pm() {
    let wheel = WheelState::from_canonical(t(12, 0), ClockMode::TwelveHour);
    assert_eq!(wheel.display_hour(), 12);
    assert!(!wheel.is_am());
}

#[test]
fn afternoon_projects_to_pm_hour() {
    let wheel = WheelState::from_canonical(t(13, 30), ClockMode::TwelveHour);
    assert_eq!(wheel.display_hour(), 1);
    assert_eq!(wheel.period(), Period::Pm);
}

#[test]
fn twenty_four_hour_mode_keeps_hour() {
    for hour in 0..24 {
        let wheel = WheelState::from_canonical(t(hour, 0), ClockMode::TwentyFourHour);
        assert_eq!(wheel.display_hour(), hour);
    }
}

#[test]
fn twelve_hour_display_never_zero() {
    for hour in 0..24 {
        let wheel = WheelState::from_canonical(t(hour, 0), ClockMode::TwelveHour);
        assert!((1..=12).contains(&wheel.display_hour()), "hour {hour}");
    }
}

// ===== to_canonical =====

fn twelve(display_hour: u8, is_am: bool) -> WheelState {
    let mut wheel = WheelState::from_canonical(TimeValue::MIDNIGHT, ClockMode::TwelveHour);
    wheel.set_display_hour(display_hour);
    wheel.set_am(is_am);
    wheel
}

#[test]
fn to_canonical_twelve_hour_table() {
    assert_eq!(twelve(12, true).to_canonical().hour24(), 0);
    assert_eq!(twelve(12, false).to_canonical().hour24(), 12);
    assert_eq!(twelve(1, true).to_canonical().hour24(), 1);
    assert_eq!(twelve(1, false).to_canonical().hour24(), 13);
    assert_eq!(twelve(11, false).to_canonical().hour24(), 23);
}

#[test]
fn round_trip_boundary_hours_both_modes() {
    for mode in [ClockMode::TwelveHour, ClockMode::TwentyFourHour] {
        for hour in [0, 11, 12, 13, 23] {
            let time = t(hour, 42);
            let back = WheelState::from_canonical(time, mode).to_canonical();
            assert_eq!(back, time, "hour {hour} in {mode}");
        }
    }
}

#[test]
fn set_display_hour_clamps_to_domain() {
    let mut wheel = twelve(5, true);
    wheel.set_display_hour(0);
    assert_eq!(wheel.display_hour(), 1);
    wheel.set_display_hour(13);
    assert_eq!(wheel.display_hour(), 12);

    let mut wheel = WheelState::from_canonical(t(5, 0), ClockMode::TwentyFourHour);
    wheel.set_display_hour(40);
    assert_eq!(wheel.display_hour(), 23);
}

#[test]
fn set_minute_clamps() {
    let mut wheel = twelve(5, true);
    wheel.set_minute(75);
    assert_eq!(wheel.minute(), 59);
}

// ===== now =====

#[test]
fn now_from_fixed_clock_projects_through_mode() {
    let clock = FixedClock(t(21, 7));
    let wheel = WheelState::now_from(&clock, ClockMode::TwelveHour);
    assert_eq!(wheel.display_hour(), 9);
    assert_eq!(wheel.minute(), 7);
    assert!(!wheel.is_am());
}

#[test]
fn system_clock_yields_valid_time() {
    let now = TimeValue::now();
    assert!(now.hour24() < 24);
    assert!(now.minute() < 60);
}

// ===== format =====

#[test]
fn format_twelve_hour_midnight() {
    insta::assert_snapshot!(t(0, 5).format(ClockMode::TwelveHour), @"12:05 AM");
}

#[test]
fn format_twelve_hour_afternoon() {
    insta::assert_snapshot!(t(13, 30).format(ClockMode::TwelveHour), @"1:30 PM");
}

#[test]
fn format_twenty_four_hour_is_padded() {
    insta::assert_snapshot!(t(7, 3).format(ClockMode::TwentyFourHour), @"07:03");
}

#[test]
fn format_noon_and_late_evening() {
    assert_eq!(t(12, 0).format(ClockMode::TwelveHour), "12:00 PM");
    assert_eq!(t(23, 59).format(ClockMode::TwelveHour), "11:59 PM");
}

// ===== ClockMode =====

#[test]
fn clock_mode_config_spelling() {
    assert_eq!(ClockMode::from_config_str("24h"), Some(ClockMode::TwentyFourHour));
    assert_eq!(ClockMode::from_config_str(" 12H "), Some(ClockMode::TwelveHour));
    assert_eq!(ClockMode::from_config_str("36h"), None);
}

#[test]
fn clock_mode_default_is_twelve_hour() {
    assert_eq!(ClockMode::default(), ClockMode::TwelveHour);
}
