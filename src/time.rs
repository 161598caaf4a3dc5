// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions around time.
//!
//! Civil dates are turned into [`Epoch`]s through the Julian Day Number, so
//! that proleptic dates thousands of years before the Common Era (including
//! year 0 and negative astronomical years) behave the same way as modern
//! ones. All civil times are interpreted as UTC; there are no leap seconds
//! before 1972, so for historical dates TT is simply UTC + 32.184 s.

mod delta_t;
mod error;
#[cfg(test)]
mod tests;

pub use delta_t::delta_t_seconds;
pub use error::TimeError;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::{DAYSEC, DAYS_PER_JULIAN_YEAR, J2000_JD, MJD_OFFSET};

/// The calendar used to interpret civil dates. Both are proleptic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    #[default]
    #[strum(serialize = "gregorian")]
    Gregorian,

    #[strum(serialize = "julian")]
    Julian,
}

impl Calendar {
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Gregorian => {
                (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
            }
            Calendar::Julian => year.rem_euclid(4) == 0,
        }
    }

    pub fn days_in_month(self, year: i32, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// The part of a civil timestamp that is held fixed while the year changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarTime {
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl Default for CalendarTime {
    /// February 20, 21:00:00.
    fn default() -> Self {
        Self {
            month: 2,
            day: 20,
            hour: 21,
            minute: 0,
            second: 0.0,
        }
    }
}

impl CalendarTime {
    /// The fraction of a day that has elapsed at this time of day.
    fn day_fraction(&self) -> f64 {
        (f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second) / DAYSEC
    }

    /// Check that this is a real time of day on a real day of `year`.
    pub fn validate(&self, year: i32, calendar: Calendar) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidMonth(self.month));
        }
        let max_day = calendar.days_in_month(year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDay {
                year,
                month: self.month,
                day: self.day,
                max_day,
            });
        }
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidTimeOfDay {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        Ok(())
    }
}

/// Get the Julian Day Number of a civil date (the JD at noon of that day).
/// Valid for any year, including zero and negative astronomical years.
pub fn julian_day_number(year: i32, month: u8, day: u8, calendar: Calendar) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let common = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    match calendar {
        Calendar::Gregorian => common - y.div_euclid(100) + y.div_euclid(400) - 32045,
        Calendar::Julian => common - 32083,
    }
}

/// Turn a civil date and time (interpreted as UTC) into an [`Epoch`].
pub fn civil_to_epoch(
    year: i32,
    time: &CalendarTime,
    calendar: Calendar,
) -> Result<Epoch, TimeError> {
    time.validate(year, calendar)?;
    let jdn = julian_day_number(year, time.month, time.day, calendar);
    // The JDN refers to noon; civil days start at midnight.
    let jd = jdn as f64 - 0.5 + time.day_fraction();
    Ok(Epoch::from_mjd_utc(jd - MJD_OFFSET))
}

/// The quantities of an [`Epoch`] needed to do astrometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScales {
    /// The Julian date in Terrestrial Time. TDB differs from this by less than
    /// 2 ms, which is ignored.
    pub jd_tt: f64,

    /// The Julian date in UT1, i.e. Earth-rotation time.
    pub jd_ut1: f64,

    /// TT - UT1 \[seconds\].
    pub delta_t: f64,
}

impl TimeScales {
    /// Derive the time scales of an [`Epoch`]. If `delta_t` isn't given, the
    /// [`delta_t_seconds`] model is used.
    pub fn from_epoch(epoch: Epoch, delta_t: Option<f64>) -> Self {
        let jd_tt = epoch.to_jde_tt_days();
        let delta_t = delta_t.unwrap_or_else(|| delta_t_seconds(jd_to_decimal_year(jd_tt)));
        Self {
            jd_tt,
            jd_ut1: jd_tt - delta_t / DAYSEC,
            delta_t,
        }
    }
}

/// Convert a Julian date to a (Julian) decimal year, e.g. J2000.0 -> 2000.0.
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

/// Format an astronomical year for humans, e.g. -2600 -> "2601 BCE".
pub fn format_year(year: i32) -> String {
    if year <= 0 {
        format!("{} BCE", 1 - i64::from(year))
    } else {
        format!("{year} CE")
    }
}
