// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Solar-system ephemerides. Only the barycentric state of the Earth is
//! needed to observe stars.

mod error;

pub use error::EphemerisError;

use log::trace;

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, DE406_END_JD, DE406_START_JD, J2000_JD, OBLIQUITY_J2000, TAU,
};

/// A position \[AU\] and velocity \[AU/day\] in the ICRS (equatorial) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

/// Something that can tell us where the Earth is.
pub trait Ephemeris {
    /// A short description, used in messages.
    fn name(&self) -> &str;

    /// The first and last Julian dates (TDB) this ephemeris covers.
    fn coverage(&self) -> (f64, f64);

    /// The barycentric state of the Earth at the Julian date `jd_tdb`.
    /// Requests outside of [`Ephemeris::coverage`] are errors.
    fn earth_state(&self, jd_tdb: f64) -> Result<StateVector, EphemerisError>;

    /// Check that a date can be served.
    fn check_coverage(&self, jd_tdb: f64) -> Result<(), EphemerisError> {
        let (start, end) = self.coverage();
        if (start..=end).contains(&jd_tdb) {
            Ok(())
        } else {
            Err(EphemerisError::OutOfRange {
                name: self.name().to_string(),
                jd: jd_tdb,
                start,
                end,
            })
        }
    }
}

/// Keplerian elements of the Earth-Moon barycentre and their rates per Julian
/// century, from Standish, "Keplerian Elements for Approximate Positions of
/// the Major Planets", Table 2a (valid 3000 BC to 3000 AD). Angles are in
/// degrees.
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    i: [f64; 2],
    mean_longitude: [f64; 2],
    long_perihelion: [f64; 2],
    long_node: [f64; 2],
}

const EARTH_MOON_BARYCENTRE: Elements = Elements {
    a: [1.00000018, -0.00000003],
    e: [0.01673163, -0.00003661],
    i: [-0.00054346, -0.01337178],
    mean_longitude: [100.46691572, 35999.37306329],
    long_perihelion: [102.93005885, 0.31795260],
    long_node: [-5.11260389, -0.24123856],
};

const KEPLER_TOLERANCE: f64 = 1e-14;
const KEPLER_MAX_ITERATIONS: usize = 50;

/// An analytic ephemeris of the Earth good to a few arcminutes (a few
/// hundredths of an AU at most) over six millennia. The Earth-Moon barycentre
/// stands in for the Earth and the Sun for the solar-system barycentre; for
/// stellar positions neither approximation is visible.
///
/// The coverage is deliberately the same as JPL's DE406.
#[derive(Debug, Clone)]
pub struct KeplerianEarth {
    start: f64,
    end: f64,
}

impl Default for KeplerianEarth {
    fn default() -> Self {
        Self {
            start: DE406_START_JD,
            end: DE406_END_JD,
        }
    }
}

impl KeplerianEarth {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Solve Kepler's equation `M = E - e sin(E)` for the eccentric anomaly.
/// Angles are in radians.
pub(crate) fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anom = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anom - e * ecc_anom.sin() - mean_anomaly) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc_anom
}

impl Ephemeris for KeplerianEarth {
    fn name(&self) -> &str {
        "Keplerian Earth (DE406 span)"
    }

    fn coverage(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    fn earth_state(&self, jd_tdb: f64) -> Result<StateVector, EphemerisError> {
        self.check_coverage(jd_tdb)?;

        let el = &EARTH_MOON_BARYCENTRE;
        let t = (jd_tdb - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
        let at = |c: [f64; 2]| c[0] + c[1] * t;

        let a = at(el.a);
        let e = at(el.e);
        let inc = at(el.i).to_radians();
        let long_node = at(el.long_node).to_radians();
        let long_perihelion = at(el.long_perihelion).to_radians();
        let arg_perihelion = long_perihelion - long_node;
        let mean_anomaly =
            (at(el.mean_longitude).to_radians() - long_perihelion + TAU / 2.0).rem_euclid(TAU)
                - TAU / 2.0;
        // Mean motion [radians/day].
        let n = (el.mean_longitude[1] - el.long_perihelion[1]).to_radians()
            / DAYS_PER_JULIAN_CENTURY;

        let ecc_anom = eccentric_anomaly(mean_anomaly, e);
        let (sin_e, cos_e) = ecc_anom.sin_cos();
        let sqrt_1_e2 = (1.0 - e * e).sqrt();
        let ecc_anom_dot = n / (1.0 - e * cos_e);
        trace!("t = {t:.6} cy, M = {mean_anomaly:.9} rad, E = {ecc_anom:.9} rad");

        // In the orbital plane, with x towards perihelion.
        let orbital_pos = [a * (cos_e - e), a * sqrt_1_e2 * sin_e];
        let orbital_vel = [
            -a * sin_e * ecc_anom_dot,
            a * sqrt_1_e2 * cos_e * ecc_anom_dot,
        ];

        let (sin_w, cos_w) = arg_perihelion.sin_cos();
        let (sin_node, cos_node) = long_node.sin_cos();
        let (sin_i, cos_i) = inc.sin_cos();
        let (sin_eps, cos_eps) = OBLIQUITY_J2000.sin_cos();
        let to_equatorial = |[x, y]: [f64; 2]| -> [f64; 3] {
            let x_ecl = (cos_w * cos_node - sin_w * sin_node * cos_i) * x
                + (-sin_w * cos_node - cos_w * sin_node * cos_i) * y;
            let y_ecl = (cos_w * sin_node + sin_w * cos_node * cos_i) * x
                + (-sin_w * sin_node + cos_w * cos_node * cos_i) * y;
            let z_ecl = sin_w * sin_i * x + cos_w * sin_i * y;
            [
                x_ecl,
                cos_eps * y_ecl - sin_eps * z_ecl,
                sin_eps * y_ecl + cos_eps * z_ecl,
            ]
        };

        Ok(StateVector {
            position: to_equatorial(orbital_pos),
            velocity: to_equatorial(orbital_vel),
        })
    }
}
