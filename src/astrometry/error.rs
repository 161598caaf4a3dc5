// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::ephemeris::EphemerisError;

#[derive(Error, Debug, PartialEq)]
pub enum AstrometryError {
    #[error("Star HIP {hip}: astrometry produced a non-finite position")]
    NonFinite { hip: u32 },

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
