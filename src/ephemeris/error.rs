// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::time::jd_to_decimal_year;

#[derive(Error, Debug, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris '{name}' does not cover JD {jd:.4} (year {:.1}); it only covers JD {start} to JD {end}", year_of(.jd))]
    OutOfRange {
        name: String,
        jd: f64,
        start: f64,
        end: f64,
    },
}

fn year_of(jd: &f64) -> f64 {
    jd_to_decimal_year(*jd)
}
