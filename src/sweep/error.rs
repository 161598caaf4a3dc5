// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{astrometry::AstrometryError, ephemeris::EphemerisError, time::TimeError};

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("No epochs were given to sweep over")]
    NoEpochs,

    #[error("No stars were given to observe")]
    NoStars,

    #[error("The year step must be positive, but got {0}")]
    NonPositiveStep(i32),

    #[error("The year range {start} to {end} (end exclusive) is empty")]
    EmptyYearRange { start: i32, end: i32 },

    #[error("Year {year}: {err}")]
    Coverage { year: i32, err: EphemerisError },

    #[error("Star '{name}', year {year}: {err}")]
    Astrometry {
        name: String,
        year: i32,
        err: AstrometryError,
    },

    #[error(transparent)]
    Time(#[from] TimeError),
}
