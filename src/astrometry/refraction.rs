// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Atmospheric refraction (Bennett's formula).

use serde::{Deserialize, Serialize};

/// Conditions used to refract altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    /// \[degrees Celsius\]
    pub temperature_c: f64,

    /// \[millibars\]
    pub pressure_mbar: f64,
}

impl Atmosphere {
    /// 10°C, with the pressure of a standard atmosphere at `height_metres`.
    pub fn standard(height_metres: f64) -> Atmosphere {
        Atmosphere {
            temperature_c: 10.0,
            pressure_mbar: 1010.0 * (-height_metres / 9.1e3).exp(),
        }
    }
}

const CONVERGENCE_DEG: f64 = 3.0e-5;
const MAX_ITERATIONS: usize = 100;

/// How much an object at the true altitude `alt_degrees` is raised by
/// refraction \[degrees\]. Outside of -1° to 89.9° this is zero.
pub fn refraction(alt_degrees: f64, atmosphere: &Atmosphere) -> f64 {
    if !(-1.0..=89.9).contains(&alt_degrees) {
        return 0.0;
    }
    let r = 0.016667 / ((alt_degrees + 7.31 / (alt_degrees + 4.4)).to_radians()).tan();
    r * (0.28 * atmosphere.pressure_mbar / (atmosphere.temperature_c + 273.0))
}

/// The apparent altitude of an object at the true altitude `alt_degrees`.
pub fn refract(alt_degrees: f64, atmosphere: &Atmosphere) -> f64 {
    let mut alt = alt_degrees;
    for _ in 0..MAX_ITERATIONS {
        let previous = alt;
        alt = alt_degrees + refraction(alt, atmosphere);
        if (alt - previous).abs() <= CONVERGENCE_DEG {
            break;
        }
    }
    alt
}
