// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all polestar-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::{
    common::CommonArgsError, ncp_sweep::NcpSweepArgsError, north_horizon::NorthHorizonArgsError,
};
use crate::{
    astrometry::AstrometryError, catalog::CatalogError, ephemeris::EphemerisError,
    sweep::SweepError, time::TimeError,
};

const CATALOG_HINT: &str = "The star catalogue must be in the format of the Hipparcos main catalogue (hip_main.dat), optionally gzipped. It is available from https://cdsarc.cds.unistra.fr/ftp/cats/I/239/";

/// The *only* publicly visible error from polestar. Where possible, each error
/// message includes a hint on how to fix the problem.
#[derive(Error, Debug)]
pub enum PolestarError {
    /// An error related to ncp-sweep.
    #[error("{0}\n\nYears are astronomical: year 0 is 1 BCE and year -2600 is 2601 BCE.")]
    NcpSweep(String),

    /// An error related to north-horizon.
    #[error("{0}\n\nYears are astronomical: year 0 is 1 BCE and year -2600 is 2601 BCE.")]
    NorthHorizon(String),

    /// An error related to reading the star catalogue.
    #[error("{0}\n\n{CATALOG_HINT}")]
    Catalog(String),

    /// An error related to picking stars out of the catalogue.
    #[error("{0}\n\nStars are picked with --star NAME=HIP, e.g. --star Polaris=11767. Each HIP number must be in the catalogue.")]
    StarSelection(String),

    /// An error related to civil dates and times.
    #[error("{0}\n\nThe time of each epoch is set with --month, --day, --hour, --minute and --second, and interpreted in the --calendar calendar.")]
    Time(String),

    /// An error related to the Earth ephemeris.
    #[error("{0}\n\nThe Earth ephemeris covers the same span as JPL's DE406: roughly the years -3000 to 3000.")]
    Ephemeris(String),

    /// An error related to the observing site or the atmosphere.
    #[error("{0}\n\nThe site is set with --observer-position LONG_DEG LAT_DEG HEIGHT_M.")]
    Observer(String),

    /// An error related to plotting.
    #[error("{0}")]
    Plot(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are toml or json files with the same structure as those written by --save-toml.")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<NcpSweepArgsError> for PolestarError {
    fn from(e: NcpSweepArgsError) -> Self {
        let s = e.to_string();
        match e {
            NcpSweepArgsError::BadYearRange { .. } | NcpSweepArgsError::BothYearRangeAndYears => {
                Self::NcpSweep(s)
            }
        }
    }
}

impl From<NorthHorizonArgsError> for PolestarError {
    fn from(e: NorthHorizonArgsError) -> Self {
        let s = e.to_string();
        match e {
            NorthHorizonArgsError::NoYears => Self::NorthHorizon(s),
        }
    }
}

impl From<CommonArgsError> for PolestarError {
    fn from(e: CommonArgsError) -> Self {
        let s = e.to_string();
        match e {
            CommonArgsError::BadObserverPosition { .. }
            | CommonArgsError::LatitudeOutOfRange(_)
            | CommonArgsError::OnlyOneOfTemperatureAndPressure
            | CommonArgsError::BadAtmosphere { .. } => Self::Observer(s),
            CommonArgsError::InvalidCalendar(_) => Self::Time(s),
            CommonArgsError::InvalidDpi(_) | CommonArgsError::NoPlottingFeature => Self::Plot(s),
        }
    }
}

// Library code errors.

impl From<CatalogError> for PolestarError {
    fn from(e: CatalogError) -> Self {
        let s = e.to_string();
        match e {
            CatalogError::DoesntExist(_)
            | CatalogError::NoStars(_)
            | CatalogError::TooFewFields { .. }
            | CatalogError::ParseField { .. } => Self::Catalog(s),
            CatalogError::UnknownHip(_)
            | CatalogError::DuplicateName(_)
            | CatalogError::BadSelection(_) => Self::StarSelection(s),
            CatalogError::IO(e) => Self::from(e),
        }
    }
}

impl From<SweepError> for PolestarError {
    fn from(e: SweepError) -> Self {
        let s = e.to_string();
        match e {
            SweepError::NoEpochs
            | SweepError::NonPositiveStep(_)
            | SweepError::EmptyYearRange { .. } => Self::NcpSweep(s),
            SweepError::NoStars => Self::StarSelection(s),
            SweepError::Coverage { .. } => Self::Ephemeris(s),
            SweepError::Astrometry { err, .. } => match err {
                AstrometryError::Ephemeris(_) => Self::Ephemeris(s),
                AstrometryError::NonFinite { .. } => Self::Generic(s),
            },
            SweepError::Time(e) => Self::from(e),
        }
    }
}

impl From<TimeError> for PolestarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e.to_string())
    }
}

impl From<EphemerisError> for PolestarError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e.to_string())
    }
}

#[cfg(feature = "plotting")]
impl From<crate::plotting::PlotError> for PolestarError {
    fn from(e: crate::plotting::PlotError) -> Self {
        Self::Plot(e.to_string())
    }
}

impl From<serde_json::Error> for PolestarError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for PolestarError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
