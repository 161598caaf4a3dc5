// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where does a star appear in the sky of an observer?
//!
//! The chain of corrections is:
//! - space motion of the star from its catalogue epoch, including the light
//!   time to the observer;
//! - annual parallax, by placing the observer at the Earth's barycentric
//!   position;
//! - annual aberration from the Earth's barycentric velocity;
//! - IAU 2006/2000A bias-precession-nutation (ERFA), giving the apparent RA
//!   and Dec of date;
//! - Greenwich apparent sidereal time from ERFA (the Earth rotation angle is
//!   driven by UT1, so ΔT matters), then hour angle and declination to azimuth
//!   and elevation;
//! - optionally, atmospheric refraction.
//!
//! Gravitational light deflection, diurnal aberration and polar motion are
//! ignored; each is smaller than an arcsecond.

mod error;
mod refraction;

pub use error::AstrometryError;
pub use refraction::{refract, refraction, Atmosphere};

use log::trace;
use marlu::{
    erfa::{
        prenut::pn_matrix_06a,
        time::gst06,
        transform::cartesian_to_spherical,
        vectors_and_matrices::{inner_product, mat_mul_pvec, modulus, modulus_and_unit_vector},
    },
    AzEl, LatLngHeight, RADec,
};

use crate::{
    catalog::Star,
    constants::{
        ARCSEC_TO_RAD, AU_KM, C_AU_PER_DAY, DAYSEC, DAYS_PER_JULIAN_YEAR, GIZA_HEIGHT_M,
        GIZA_LAT_DEG, GIZA_LONG_DEG, GIZA_SITE_NAME, TAU,
    },
    ephemeris::Ephemeris,
    time::TimeScales,
};

/// A fixed place on the Earth.
#[derive(Debug, Clone)]
pub struct Observer {
    pub name: String,
    pub position: LatLngHeight,
}

impl Observer {
    /// Make a new observer. Positions are geodetic, in degrees and metres.
    pub fn new(
        name: &str,
        longitude_degrees: f64,
        latitude_degrees: f64,
        height_metres: f64,
    ) -> Observer {
        Observer {
            name: name.to_string(),
            position: LatLngHeight {
                longitude_rad: longitude_degrees.to_radians(),
                latitude_rad: latitude_degrees.to_radians(),
                height_metres,
            },
        }
    }

    /// The Giza plateau.
    pub fn giza() -> Observer {
        Observer::new(GIZA_SITE_NAME, GIZA_LONG_DEG, GIZA_LAT_DEG, GIZA_HEIGHT_M)
    }
}

/// The apparent place of a star for an observer at an instant.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    /// Azimuth (north through east) and altitude \[radians\].
    pub azel: AzEl,

    /// RA and Dec on the true equator and equinox of date \[radians\].
    pub apparent: RADec,

    /// Distance from the Earth \[AU\].
    pub distance_au: f64,
}

impl Observation {
    pub fn altitude_degrees(&self) -> f64 {
        self.azel.el.to_degrees()
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.azel.az.to_degrees()
    }

    /// The angular distance from the NCP as used for the sweeps: how far the
    /// star is below the zenith, `90 - altitude`.
    pub fn ncp_distance_degrees(&self) -> f64 {
        90.0 - self.altitude_degrees()
    }

    /// The true angular distance from the celestial pole of date,
    /// `90 - declination`.
    pub fn polar_distance_degrees(&self) -> f64 {
        90.0 - self.apparent.dec.to_degrees()
    }
}

/// The barycentric position \[AU\] and velocity \[AU/day\] of a star at its
/// catalogue epoch.
pub(crate) fn space_motion(star: &Star) -> ([f64; 3], [f64; 3]) {
    let parallax = star.effective_parallax_mas();
    let distance = 1.0 / (parallax * 1e-3 * ARCSEC_TO_RAD).sin();
    let (sin_ra, cos_ra) = star.ra_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = star.dec_deg.to_radians().sin_cos();

    // mas/yr divided by mas of parallax is AU/yr.
    let pmr = star.pm_ra_mas_per_year / (parallax * DAYS_PER_JULIAN_YEAR);
    let pmd = star.pm_dec_mas_per_year / (parallax * DAYS_PER_JULIAN_YEAR);
    let rvl = star.radial_km_per_s * DAYSEC / AU_KM;

    let position = [
        distance * cos_dec * cos_ra,
        distance * cos_dec * sin_ra,
        distance * sin_dec,
    ];
    let velocity = [
        -pmr * sin_ra - pmd * sin_dec * cos_ra + rvl * cos_dec * cos_ra,
        pmr * cos_ra - pmd * sin_dec * sin_ra + rvl * cos_dec * sin_ra,
        pmd * cos_dec + rvl * sin_dec,
    ];
    (position, velocity)
}

/// Apply relativistic stellar aberration to a direction. `velocity` is the
/// observer's barycentric velocity \[AU/day\]. The result is a unit vector.
pub(crate) fn aberrate(direction: [f64; 3], velocity: [f64; 3]) -> [f64; 3] {
    let (_, p) = modulus_and_unit_vector(direction);
    let v = velocity.map(|x| x / C_AU_PER_DAY);
    let ab1 = (1.0 - inner_product(v, v)).sqrt();
    let w = 1.0 + inner_product(p, v) / (ab1 + 1.0);
    let shifted = [0, 1, 2].map(|i| ab1 * p[i] + w * v[i]);
    modulus_and_unit_vector(shifted).1
}

/// Observe `star` from `observer` at the instant described by `time`. If an
/// atmosphere is given, the altitude is refracted.
pub fn observe<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    observer: &Observer,
    star: &Star,
    time: &TimeScales,
    atmosphere: Option<&Atmosphere>,
) -> Result<Observation, AstrometryError> {
    // TDB and TT differ by less than 2 ms.
    let earth = ephemeris.earth_state(time.jd_tt)?;

    let (star_pos, star_vel) = space_motion(star);
    let (_, star_dir) = modulus_and_unit_vector(star_pos);
    let light_time_difference = inner_product(star_dir, earth.position) / C_AU_PER_DAY;
    let elapsed = time.jd_tt + light_time_difference - star.epoch_jd;
    let astrometric = [0, 1, 2].map(|i| star_pos[i] + star_vel[i] * elapsed - earth.position[i]);
    let distance_au = modulus(astrometric);

    let gcrs = aberrate(astrometric, earth.velocity);

    let npb = pn_matrix_06a(time.jd_tt, 0.0);
    let (ra, dec) = cartesian_to_spherical(mat_mul_pvec(npb, gcrs));
    let apparent = RADec::from_radians(ra.rem_euclid(TAU), dec);

    let gast = gst06(time.jd_ut1, 0.0, time.jd_tt, 0.0, npb);
    let lst = gast + observer.position.longitude_rad;
    let mut azel = apparent
        .to_hadec(lst)
        .to_azel(observer.position.latitude_rad);
    if let Some(atmosphere) = atmosphere {
        azel.el = refract(azel.el.to_degrees(), atmosphere).to_radians();
    }

    if !(azel.az.is_finite() && azel.el.is_finite() && distance_au.is_finite()) {
        return Err(AstrometryError::NonFinite { hip: star.hip });
    }
    trace!(
        "HIP {} at JD(TT) {:.5}: RA {:.6}°, Dec {:.6}°, az {:.6}°, alt {:.6}°",
        star.hip,
        time.jd_tt,
        apparent.ra.to_degrees(),
        apparent.dec.to_degrees(),
        azel.az.to_degrees(),
        azel.el.to_degrees()
    );

    Ok(Observation {
        azel,
        apparent,
        distance_au,
    })
}
