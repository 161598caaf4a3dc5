// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_julian_day_numbers() {
    assert_eq!(julian_day_number(2000, 1, 1, Calendar::Gregorian), 2451545);
    // The Gregorian reform: Thursday 4 October 1582 (Julian) was followed by
    // Friday 15 October 1582 (Gregorian).
    assert_eq!(julian_day_number(1582, 10, 4, Calendar::Julian), 2299160);
    assert_eq!(julian_day_number(1582, 10, 15, Calendar::Gregorian), 2299161);
    // The origin of the Julian period.
    assert_eq!(julian_day_number(-4712, 1, 1, Calendar::Julian), 0);
    // Before the origin, the numbers go negative.
    assert_eq!(julian_day_number(-4713, 12, 31, Calendar::Julian), -1);
    assert_eq!(julian_day_number(-2600, 2, 20, Calendar::Gregorian), 771480);
}

#[test]
fn test_leap_years() {
    assert!(Calendar::Gregorian.is_leap_year(2000));
    assert!(!Calendar::Gregorian.is_leap_year(1900));
    assert!(Calendar::Julian.is_leap_year(1900));
    // Year 0 (1 BCE) is a leap year in both calendars.
    assert!(Calendar::Gregorian.is_leap_year(0));
    assert!(Calendar::Julian.is_leap_year(0));
    assert!(!Calendar::Gregorian.is_leap_year(-100));
    assert!(Calendar::Julian.is_leap_year(-100));
    assert!(!Calendar::Gregorian.is_leap_year(-2599));
}

#[test]
fn test_civil_to_epoch_j2000() {
    let time = CalendarTime {
        month: 1,
        day: 1,
        hour: 12,
        minute: 0,
        second: 0.0,
    };
    let epoch = civil_to_epoch(2000, &time, Calendar::Gregorian).unwrap();
    // TAI - UTC was 32 s in 2000, and TT - TAI is 32.184 s.
    assert_abs_diff_eq!(
        epoch.to_jde_tt_days() - J2000_JD,
        64.184 / DAYSEC,
        epsilon = 1e-6
    );
}

#[test]
fn test_civil_to_epoch_ancient() {
    let epoch = civil_to_epoch(-2600, &CalendarTime::default(), Calendar::Gregorian).unwrap();
    // No leap seconds this far back.
    assert_abs_diff_eq!(
        epoch.to_jde_tt_days(),
        771480.375 + 32.184 / DAYSEC,
        epsilon = 1e-4
    );
}

#[test]
fn test_civil_to_epoch_rejects_bad_dates() {
    let mut time = CalendarTime::default();
    time.month = 13;
    assert_eq!(
        civil_to_epoch(2000, &time, Calendar::Gregorian),
        Err(TimeError::InvalidMonth(13))
    );

    let time = CalendarTime {
        month: 2,
        day: 29,
        ..Default::default()
    };
    assert!(matches!(
        civil_to_epoch(-100, &time, Calendar::Gregorian),
        Err(TimeError::InvalidDay { max_day: 28, .. })
    ));
    assert!(civil_to_epoch(-100, &time, Calendar::Julian).is_ok());

    let time = CalendarTime {
        hour: 24,
        ..Default::default()
    };
    assert!(matches!(
        civil_to_epoch(2000, &time, Calendar::Gregorian),
        Err(TimeError::InvalidTimeOfDay { hour: 24, .. })
    ));

    let time = CalendarTime {
        second: 60.0,
        ..Default::default()
    };
    assert!(civil_to_epoch(2000, &time, Calendar::Gregorian).is_err());
}

#[test]
fn test_delta_t_reference_values() {
    assert_abs_diff_eq!(delta_t_seconds(2000.0), 63.86, epsilon = 1e-10);
    assert_abs_diff_eq!(delta_t_seconds(1900.0), -2.79, epsilon = 1e-10);
    assert_abs_diff_eq!(delta_t_seconds(1820.0), 12.0, epsilon = 2.0);
    // Stephenson, Morrison & Hohenkerk: -320 + 32.5 u^2, u = (-2600 - 1825) / 100.
    assert_abs_diff_eq!(delta_t_seconds(-2600.0), 63317.03125, epsilon = 1e-6);
    assert_abs_diff_eq!(delta_t_seconds(-1000.0), 25617.03125, epsilon = 1e-6);
    // After 2150, Morrison & Stephenson (2004): -20 + 32 u^2.
    assert_abs_diff_eq!(delta_t_seconds(2220.0), 492.0, epsilon = 1e-6);
}

#[test]
fn test_delta_t_is_continuous_between_segments() {
    for boundary in [
        -720.0, -500.0, 500.0, 1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0,
        1986.0, 2005.0, 2050.0, 2150.0,
    ] {
        let before = delta_t_seconds(boundary - 1e-9);
        let after = delta_t_seconds(boundary);
        assert_abs_diff_eq!(before, after, epsilon = 1.5);
    }
}

#[test]
fn test_time_scales() {
    let epoch = civil_to_epoch(-2600, &CalendarTime::default(), Calendar::Gregorian).unwrap();
    let scales = TimeScales::from_epoch(epoch, None);
    assert!(scales.delta_t > 17.0 * 3600.0);
    // 20 Feb 2601 BCE is decimal year -2599.77.
    assert_abs_diff_eq!(scales.delta_t, 63310.3, epsilon = 1.0);
    assert_abs_diff_eq!(
        scales.jd_tt - scales.jd_ut1,
        scales.delta_t / DAYSEC,
        epsilon = 1e-9
    );

    let scales = TimeScales::from_epoch(epoch, Some(0.0));
    assert_eq!(scales.jd_tt, scales.jd_ut1);
}

#[test]
fn test_format_year() {
    assert_eq!(format_year(-2600), "2601 BCE");
    assert_eq!(format_year(0), "1 BCE");
    assert_eq!(format_year(1), "1 CE");
}
