// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sweeps over epochs: the same stars seen from the same place on the same
//! calendar day and time of day, year after year.

mod error;
#[cfg(test)]
mod tests;

pub use error::SweepError;

use hifitime::Epoch;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, trace};
use vec1::Vec1;

use crate::{
    astrometry::{observe, Atmosphere, Observation, Observer},
    catalog::Star,
    ephemeris::Ephemeris,
    time::{civil_to_epoch, format_year, Calendar, CalendarTime, TimeScales},
};

/// One instant of a sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepEpoch {
    /// The astronomical year (year 0 exists; -2600 is 2601 BCE).
    pub year: i32,
    pub epoch: Epoch,
    pub scales: TimeScales,
}

impl SweepEpoch {
    pub fn new(
        year: i32,
        time: &CalendarTime,
        calendar: Calendar,
        delta_t: Option<f64>,
    ) -> Result<SweepEpoch, SweepError> {
        let epoch = civil_to_epoch(year, time, calendar)?;
        Ok(SweepEpoch {
            year,
            epoch,
            scales: TimeScales::from_epoch(epoch, delta_t),
        })
    }
}

/// The years `start`, `start + step`, ... up to but excluding `end`.
pub fn year_range(start: i32, end: i32, step: i32) -> Result<Vec1<i32>, SweepError> {
    if step <= 0 {
        return Err(SweepError::NonPositiveStep(step));
    }
    let years = (start..end).step_by(step as usize).collect::<Vec<_>>();
    Vec1::try_from_vec(years).map_err(|_| SweepError::EmptyYearRange { start, end })
}

/// Make the epochs of a sweep, in the order of `years`.
pub fn make_epochs(
    years: &[i32],
    time: &CalendarTime,
    calendar: Calendar,
    delta_t: Option<f64>,
) -> Result<Vec1<SweepEpoch>, SweepError> {
    let epochs = years
        .iter()
        .map(|&year| SweepEpoch::new(year, time, calendar, delta_t))
        .collect::<Result<Vec<_>, _>>()?;
    let epochs = Vec1::try_from_vec(epochs).map_err(|_| SweepError::NoEpochs)?;
    debug!(
        "Sweep epochs: {}",
        epochs.iter().map(|e| format_year(e.year)).join(", ")
    );
    Ok(epochs)
}

/// Check that the ephemeris can serve every epoch.
pub fn check_coverage<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    epochs: &[SweepEpoch],
) -> Result<(), SweepError> {
    for epoch in epochs {
        ephemeris
            .check_coverage(epoch.scales.jd_tt)
            .map_err(|err| SweepError::Coverage {
                year: epoch.year,
                err,
            })?;
    }
    Ok(())
}

/// For each epoch (in order), observe each star (in order).
pub fn compute_snapshots<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    observer: &Observer,
    stars: &IndexMap<String, Star>,
    epochs: &[SweepEpoch],
    atmosphere: Option<&Atmosphere>,
) -> Result<Vec<IndexMap<String, Observation>>, SweepError> {
    if stars.is_empty() {
        return Err(SweepError::NoStars);
    }
    if epochs.is_empty() {
        return Err(SweepError::NoEpochs);
    }
    // Coverage is checked up front so that no work is done for a sweep that
    // can't finish.
    check_coverage(ephemeris, epochs)?;

    epochs
        .iter()
        .map(|epoch| {
            trace!(
                "Observing {} stars at {}",
                stars.len(),
                format_year(epoch.year)
            );
            stars
                .iter()
                .map(|(name, star)| {
                    observe(ephemeris, observer, star, &epoch.scales, atmosphere)
                        .map(|obs| (name.clone(), obs))
                        .map_err(|e| SweepError::Astrometry {
                            name: name.clone(),
                            year: epoch.year,
                            err: e,
                        })
                })
                .collect::<Result<IndexMap<_, _>, _>>()
        })
        .collect()
}

/// For each star (in order), the angular distance from the NCP
/// (`90 - altitude`) \[degrees\] at each epoch (in order).
pub fn compute_series<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    observer: &Observer,
    stars: &IndexMap<String, Star>,
    epochs: &[SweepEpoch],
    atmosphere: Option<&Atmosphere>,
) -> Result<IndexMap<String, Vec<f64>>, SweepError> {
    let snapshots = compute_snapshots(ephemeris, observer, stars, epochs, atmosphere)?;
    let mut series: IndexMap<String, Vec<f64>> = stars
        .keys()
        .map(|name| (name.clone(), Vec::with_capacity(epochs.len())))
        .collect();
    for snapshot in snapshots {
        for (name, obs) in snapshot {
            if let Some(distances) = series.get_mut(&name) {
                distances.push(obs.ncp_distance_degrees());
            }
        }
    }
    Ok(series)
}
