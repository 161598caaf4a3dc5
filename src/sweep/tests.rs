// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;
use crate::{
    catalog::{Catalog, DEFAULT_HORIZON_STARS},
    ephemeris::KeplerianEarth,
};

fn stars() -> IndexMap<String, Star> {
    Catalog::read_file("test_files/hip_subset.dat")
        .unwrap()
        .select(&DEFAULT_HORIZON_STARS[..])
        .unwrap()
}

fn epochs(years: &[i32]) -> Vec1<SweepEpoch> {
    make_epochs(years, &CalendarTime::default(), Calendar::Gregorian, None).unwrap()
}

#[test]
fn test_year_range() {
    let years = year_range(-2600, -2400, 50).unwrap();
    assert_eq!(years.as_slice(), &[-2600, -2550, -2500, -2450]);
    // The end is exclusive, as with the scripts' ranges.
    let years = year_range(-4000, -1000, 50).unwrap();
    assert_eq!(years.len(), 60);
    assert_eq!(*years.last(), -1050);
    let years = year_range(0, 1, 50).unwrap();
    assert_eq!(years.as_slice(), &[0]);

    assert!(matches!(
        year_range(-2600, -2600, 50),
        Err(SweepError::EmptyYearRange { .. })
    ));
    assert!(matches!(
        year_range(-2600, -2400, 0),
        Err(SweepError::NonPositiveStep(0))
    ));
    assert!(matches!(
        year_range(-2400, -2600, 50),
        Err(SweepError::EmptyYearRange { .. })
    ));
}

#[test]
fn test_make_epochs() {
    let epochs = epochs(&[-2500, -2600, 0]);
    let years: Vec<i32> = epochs.iter().map(|e| e.year).collect();
    assert_eq!(years, vec![-2500, -2600, 0]);
    assert!(epochs[1].scales.jd_tt < epochs[0].scales.jd_tt);
    assert!(epochs.iter().all(|e| e.scales.delta_t > 0.0));

    let fixed = make_epochs(&[-2600], &CalendarTime::default(), Calendar::Julian, Some(0.0))
        .unwrap();
    assert_eq!(fixed[0].scales.jd_tt, fixed[0].scales.jd_ut1);

    assert!(matches!(
        make_epochs(&[], &CalendarTime::default(), Calendar::Gregorian, None),
        Err(SweepError::NoEpochs)
    ));
    let leap_day = CalendarTime {
        month: 2,
        day: 29,
        ..Default::default()
    };
    assert!(matches!(
        make_epochs(&[-2600, -2599], &leap_day, Calendar::Gregorian, None),
        Err(SweepError::Time(_))
    ));
}

#[test]
fn test_series_is_90_minus_altitude() {
    let eph = KeplerianEarth::new();
    let observer = Observer::giza();
    let stars = stars();
    let epochs = epochs(&[-2600, -2550, -2500, -2450]);

    let series = compute_series(&eph, &observer, &stars, &epochs, None).unwrap();
    let snapshots = compute_snapshots(&eph, &observer, &stars, &epochs, None).unwrap();
    assert_eq!(snapshots.len(), epochs.len());

    // Same stars, same order.
    assert!(series.keys().eq(stars.keys()));
    for (name, distances) in &series {
        assert_eq!(distances.len(), epochs.len());
        for (i_epoch, distance) in distances.iter().enumerate() {
            let obs = &snapshots[i_epoch][name];
            assert_abs_diff_eq!(*distance, 90.0 - obs.altitude_degrees(), epsilon = 1e-12);

            let direct =
                observe(&eph, &observer, &stars[name], &epochs[i_epoch].scales, None).unwrap();
            assert_abs_diff_eq!(*distance, direct.ncp_distance_degrees(), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_series_follows_epoch_order() {
    let eph = KeplerianEarth::new();
    let observer = Observer::giza();
    let stars = stars();
    let forwards = compute_series(&eph, &observer, &stars, &epochs(&[-2600, -2450]), None).unwrap();
    let backwards =
        compute_series(&eph, &observer, &stars, &epochs(&[-2450, -2600]), None).unwrap();
    for (name, f) in &forwards {
        let b = &backwards[name];
        assert_eq!(f[0], b[1]);
        assert_eq!(f[1], b[0]);
    }
}

#[test]
fn test_series_length_tracks_epochs() {
    let eph = KeplerianEarth::new();
    let observer = Observer::giza();
    let stars = stars();
    for years in [vec![-2600], vec![-2600, -2550, -2500], vec![-2000; 5]] {
        let series = compute_series(&eph, &observer, &stars, &epochs(&years), None).unwrap();
        assert!(series.values().all(|s| s.len() == years.len()));
    }
}

#[test]
fn test_sweep_is_deterministic() {
    let eph = KeplerianEarth::new();
    let observer = Observer::giza();
    let stars = stars();
    let epochs = epochs(&[-2600, -1000, 500]);
    let a = compute_series(&eph, &observer, &stars, &epochs, None).unwrap();
    let b = compute_series(&eph, &observer, &stars, &epochs, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_out_of_coverage_fails_the_whole_sweep() {
    let eph = KeplerianEarth::new();
    let observer = Observer::giza();
    let stars = stars();
    // -3000 is the first 50-year grid year inside the coverage.
    assert!(compute_series(&eph, &observer, &stars, &epochs(&[-3000]), None).is_ok());

    let result = compute_series(&eph, &observer, &stars, &epochs(&[-2600, -3050]), None);
    assert!(matches!(
        result,
        Err(SweepError::Coverage { year: -3050, .. })
    ));
}

#[test]
fn test_no_stars() {
    let result = compute_series(
        &KeplerianEarth::new(),
        &Observer::giza(),
        &IndexMap::new(),
        &epochs(&[-2600]),
        None,
    );
    assert!(matches!(result, Err(SweepError::NoStars)));
}

#[test]
fn test_dyn_ephemeris() {
    let eph: Box<dyn Ephemeris> = Box::new(KeplerianEarth::new());
    let series =
        compute_series(eph.as_ref(), &Observer::giza(), &stars(), &epochs(&[-2600]), None)
            .unwrap();
    assert_eq!(series.len(), 6);
}
