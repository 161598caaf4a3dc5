// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Month {0} is invalid; months are numbered 1 to 12")]
    InvalidMonth(u8),

    #[error("Day {day} is invalid for month {month} of year {year}; it must be between 1 and {max_day}")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },

    #[error("{hour:02}:{minute:02}:{second} is not a valid time of day")]
    InvalidTimeOfDay { hour: u8, minute: u8, second: f64 },
}
