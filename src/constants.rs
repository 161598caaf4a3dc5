// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Angles are in radians unless the
name says otherwise.
 */

pub use std::f64::consts::{PI, TAU};

/// Julian date of the J2000.0 epoch (2000 January 1.5 TT).
pub const J2000_JD: f64 = 2451545.0;

/// Offset between Julian dates and modified Julian dates.
pub const MJD_OFFSET: f64 = 2400000.5;

/// The number of days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// The number of days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// The number of seconds in a day.
pub const DAYSEC: f64 = 86400.0;

/// Arcseconds to radians.
pub const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// The astronomical unit \[km\].
pub const AU_KM: f64 = 149_597_870.700;

/// Speed of light \[km/s\].
pub const VEL_C_KM_S: f64 = 299_792.458;

/// Speed of light \[AU/day\].
pub const C_AU_PER_DAY: f64 = VEL_C_KM_S * DAYSEC / AU_KM;

/// Hipparcos catalogue positions are given for the epoch J1991.25 (TT).
pub const HIPPARCOS_EPOCH_JD: f64 = J2000_JD + (1991.25 - 2000.0) * DAYS_PER_JULIAN_YEAR;

/// Stars with a non-positive parallax are placed at this parallax \[mas\]
/// (i.e. about a gigaparsec away).
pub const MIN_PARALLAX_MAS: f64 = 1.0e-6;

/// The first Julian date covered by the DE406 ephemeris (-3000 Feb 23).
pub const DE406_START_JD: f64 = 625360.5;

/// The last Julian date covered by the DE406 ephemeris (+3000 May 6).
pub const DE406_END_JD: f64 = 2816912.5;

/// Mean obliquity of the ecliptic at J2000.0 (IAU 2006) \[radians\].
pub const OBLIQUITY_J2000: f64 = 84381.406 * ARCSEC_TO_RAD;

/// Giza's longitude \[degrees\].
pub const GIZA_LONG_DEG: f64 = 31.1342;

/// Giza's latitude \[degrees\].
pub const GIZA_LAT_DEG: f64 = 29.9792;

/// Giza's height above the ellipsoid \[metres\].
pub const GIZA_HEIGHT_M: f64 = 0.0;

/// The name used for the default observing site.
pub const GIZA_SITE_NAME: &str = "Giza";

/// The default file name of the NCP-distance figure.
pub const NCP_FIGURE_FILENAME: &str = "Extended_Star_Analysis.png";

/// The default file name of the north-horizon figure.
pub const HORIZON_FIGURE_FILENAME: &str = "Giza_North_Horizon_Star_Alignment.png";

/// The default resolution of figures \[dots per inch\].
pub const DEFAULT_DPI: u32 = 300;

/// The largest resolution figures may be drawn at \[dots per inch\]. An
/// 18x10 inch figure at this resolution is already 65 million pixels.
pub const MAX_DPI: u32 = 600;

/// The default star catalogue: the Hipparcos main catalogue.
pub const DEFAULT_CATALOG_FILENAME: &str = "hip_main.dat";
