// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Both `ncp-sweep` and
//! `north-horizon` look at a set of stars from a site at a time of year, so the
//! arguments describing those things are shared between them.

mod printers;

pub(super) use printers::{display_warnings, InfoPrinter, Warn};

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use vec1::Vec1;

use super::PolestarError;
use crate::{
    astrometry::{Atmosphere, Observer},
    catalog::{parse_star_selection, Catalog, Star},
    constants::{
        DEFAULT_CATALOG_FILENAME, DEFAULT_DPI, GIZA_HEIGHT_M, GIZA_LAT_DEG, GIZA_LONG_DEG,
        GIZA_SITE_NAME, MAX_DPI,
    },
    sweep::{make_epochs, SweepEpoch, SweepError},
    time::{format_year, Calendar, CalendarTime},
};

const CUSTOM_SITE_NAME: &str = "Custom site";

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    static ref CATALOG_HELP: String =
        format!("Path to the Hipparcos main catalogue (optionally gzipped). Default: {DEFAULT_CATALOG_FILENAME}");

    static ref OBSERVER_POSITION_HELP: String =
        format!("The Earth longitude, latitude, and height of the observing site [degrees, degrees, meters]. Default ({GIZA_SITE_NAME}): ({GIZA_LONG_DEG}°, {GIZA_LAT_DEG}°, {GIZA_HEIGHT_M}m)");

    static ref CALENDAR_HELP: String =
        format!("The calendar that dates are given in. Both are proleptic. Valid calendars are: {}. Default: {}",
                Calendar::iter().join(", "), Calendar::default());

    static ref TIME_HELP: String = {
        let t = CalendarTime::default();
        format!("The time of year of every epoch is given by --month, --day, --hour, --minute and --second (UTC). Default: month {}, day {}, {:02}:{:02}:{:02}",
                t.month, t.day, t.hour, t.minute, t.second)
    };

    pub(super) static ref DPI_HELP: String =
        format!("The resolution of the figure [dots per inch], at most {MAX_DPI}. Default: {DEFAULT_DPI}");
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(PolestarError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(PolestarError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(PolestarError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Which stars to look at, from where, and at what time of year.
#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct SkyArgs {
    #[clap(short, long, help = CATALOG_HELP.as_str(), parse(from_os_str), help_heading = "STARS")]
    pub(super) catalog: Option<PathBuf>,

    /// A star to look at, as a display name and a Hipparcos catalogue number.
    /// May be given multiple times; the order given is the order used in
    /// output. If not given, a default list of bright northern stars is used.
    #[clap(
        long = "star",
        value_name = "NAME=HIP",
        number_of_values = 1,
        help_heading = "STARS"
    )]
    pub(super) stars: Option<Vec<String>>,

    #[clap(
        long, help = OBSERVER_POSITION_HELP.as_str(), help_heading = "SITE",
        number_of_values = 3,
        allow_hyphen_values = true,
        value_names = &["LONG_DEG", "LAT_DEG", "HEIGHT_M"]
    )]
    pub(super) observer_position: Option<Vec<f64>>,

    /// The name of the observing site, used in figure titles.
    #[clap(long, help_heading = "SITE")]
    pub(super) site_name: Option<String>,

    #[clap(long, help = TIME_HELP.as_str(), help_heading = "TIME")]
    pub(super) month: Option<u8>,

    #[clap(long, help_heading = "TIME")]
    pub(super) day: Option<u8>,

    #[clap(long, help_heading = "TIME")]
    pub(super) hour: Option<u8>,

    #[clap(long, help_heading = "TIME")]
    pub(super) minute: Option<u8>,

    #[clap(long, help_heading = "TIME")]
    pub(super) second: Option<f64>,

    #[clap(long, help = CALENDAR_HELP.as_str(), help_heading = "TIME")]
    pub(super) calendar: Option<String>,

    /// Use this value as TT - UT1 [seconds] for every epoch, rather than
    /// modelling it.
    #[clap(long, allow_hyphen_values = true, help_heading = "TIME")]
    pub(super) delta_t: Option<f64>,

    /// Correct altitudes for atmospheric refraction at this air temperature
    /// [degrees Celsius]. Requires --pressure.
    #[clap(long, allow_hyphen_values = true, help_heading = "ATMOSPHERE")]
    pub(super) temperature: Option<f64>,

    /// Correct altitudes for atmospheric refraction at this air pressure
    /// [millibars]. Requires --temperature.
    #[clap(long, help_heading = "ATMOSPHERE")]
    pub(super) pressure: Option<f64>,
}

impl SkyArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            catalog: self.catalog.or(other.catalog),
            stars: self.stars.or(other.stars),
            observer_position: self.observer_position.or(other.observer_position),
            site_name: self.site_name.or(other.site_name),
            month: self.month.or(other.month),
            day: self.day.or(other.day),
            hour: self.hour.or(other.hour),
            minute: self.minute.or(other.minute),
            second: self.second.or(other.second),
            calendar: self.calendar.or(other.calendar),
            delta_t: self.delta_t.or(other.delta_t),
            temperature: self.temperature.or(other.temperature),
            pressure: self.pressure.or(other.pressure),
        }
    }

    /// Make sense of the arguments. Nothing is read from disk.
    pub(super) fn parse_site(&self) -> Result<SiteParams, CommonArgsError> {
        let observer = match self.observer_position.as_deref() {
            Some(&[long, lat, height]) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(CommonArgsError::LatitudeOutOfRange(lat));
                }
                Observer::new(
                    self.site_name.as_deref().unwrap_or(CUSTOM_SITE_NAME),
                    long,
                    lat,
                    height,
                )
            }
            Some(pos) => {
                return Err(CommonArgsError::BadObserverPosition { pos: pos.to_vec() })
            }
            None => {
                let mut giza = Observer::giza();
                if let Some(name) = self.site_name.as_deref() {
                    giza.name = name.to_string();
                }
                giza
            }
        };

        let default = CalendarTime::default();
        let time = CalendarTime {
            month: self.month.unwrap_or(default.month),
            day: self.day.unwrap_or(default.day),
            hour: self.hour.unwrap_or(default.hour),
            minute: self.minute.unwrap_or(default.minute),
            second: self.second.unwrap_or(default.second),
        };
        let calendar = match self.calendar.as_deref() {
            Some(c) => Calendar::from_str(&c.to_lowercase())
                .map_err(|_| CommonArgsError::InvalidCalendar(c.to_string()))?,
            None => Calendar::default(),
        };

        let atmosphere = match (self.temperature, self.pressure) {
            (None, None) => None,
            (Some(temperature_c), Some(pressure_mbar)) => {
                if !temperature_c.is_finite()
                    || temperature_c <= -273.15
                    || !pressure_mbar.is_finite()
                    || pressure_mbar < 0.0
                {
                    return Err(CommonArgsError::BadAtmosphere {
                        temperature_c,
                        pressure_mbar,
                    });
                }
                Some(Atmosphere {
                    temperature_c,
                    pressure_mbar,
                })
            }
            _ => return Err(CommonArgsError::OnlyOneOfTemperatureAndPressure),
        };

        Ok(SiteParams {
            observer,
            time,
            calendar,
            delta_t: self.delta_t,
            atmosphere,
        })
    }

    /// Make sense of the arguments, reading the catalogue and picking the
    /// stars out of it. `default_stars` is used if no stars were given.
    pub(super) fn parse(self, default_stars: &[(&str, u32)]) -> Result<SkyParams, PolestarError> {
        let site = self.parse_site()?;

        let catalog_path = self
            .catalog
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILENAME));
        let catalog = Catalog::read_file(&catalog_path)?;
        if catalog.num_skipped > 0 {
            format!(
                "{} records in {} have no position and were skipped",
                catalog.num_skipped,
                catalog_path.display()
            )
            .warn();
        }
        let stars = match self.stars {
            Some(selections) => {
                let selections = selections
                    .iter()
                    .map(|s| parse_star_selection(s))
                    .collect::<Result<Vec<_>, _>>()?;
                catalog.select(&selections[..])?
            }
            None => catalog.select(default_stars)?,
        };
        if site.atmosphere.is_none() {
            debug!("Not correcting for atmospheric refraction");
        }

        let mut printer = InfoPrinter::new("Sky".into());
        printer.push_block(vec![
            format!("Catalogue: {}", catalog_path.display()).into(),
            format!("{} usable stars", catalog.len()).into(),
        ]);
        printer.push_block(
            stars
                .iter()
                .map(|(name, star)| {
                    format!(
                        "{name:<16} HIP {:>6} RA {:>9.4}° Dec {:>8.4}°",
                        star.hip, star.ra_deg, star.dec_deg
                    )
                    .into()
                })
                .collect(),
        );
        let pos = &site.observer.position;
        printer.push_line(
            format!(
                "{}: {:>8.4}° {:>8.4}° {:.1}m",
                site.observer.name,
                pos.longitude_rad.to_degrees(),
                pos.latitude_rad.to_degrees(),
                pos.height_metres
            )
            .into(),
        );
        let t = &site.time;
        let mut time_block = vec![format!(
            "Month {}, day {}, {:02}:{:02}:{:06.3} UTC ({} calendar)",
            t.month, t.day, t.hour, t.minute, t.second, site.calendar
        )
        .into()];
        if let Some(delta_t) = site.delta_t {
            time_block.push(format!("Fixed ΔT: {delta_t} s").into());
        }
        printer.push_block(time_block);
        if let Some(a) = site.atmosphere {
            printer.push_line(
                format!(
                    "Refraction at {}°C, {} mbar",
                    a.temperature_c, a.pressure_mbar
                )
                .into(),
            );
        }
        printer.display();

        Ok(SkyParams { stars, site })
    }
}

/// Where and when stars are observed from.
#[derive(Debug, Clone)]
pub(super) struct SiteParams {
    pub(super) observer: Observer,
    pub(super) time: CalendarTime,
    pub(super) calendar: Calendar,
    pub(super) delta_t: Option<f64>,
    pub(super) atmosphere: Option<Atmosphere>,
}

impl SiteParams {
    /// One epoch per year, at this time of year.
    pub(super) fn make_epochs(&self, years: &[i32]) -> Result<Vec1<SweepEpoch>, SweepError> {
        make_epochs(years, &self.time, self.calendar, self.delta_t)
    }
}

#[derive(Debug, Clone)]
pub(super) struct SkyParams {
    pub(super) stars: IndexMap<String, Star>,
    pub(super) site: SiteParams,
}

/// Where a figure goes.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PlotOutput {
    pub(super) path: PathBuf,
    pub(super) dpi: u32,
}

/// Work out where a figure goes. `None` means that no figure is drawn.
pub(super) fn parse_plot_output(
    no_plot: bool,
    output: Option<PathBuf>,
    dpi: Option<u32>,
    default_filename: &str,
) -> Result<Option<PlotOutput>, CommonArgsError> {
    if no_plot {
        if output.is_some() {
            "--no-plot was given; ignoring the figure output path".warn();
        }
        return Ok(None);
    }
    if cfg!(not(feature = "plotting")) {
        return Err(CommonArgsError::NoPlottingFeature);
    }
    let dpi = dpi.unwrap_or(DEFAULT_DPI);
    if dpi == 0 || dpi > MAX_DPI {
        return Err(CommonArgsError::InvalidDpi(dpi));
    }
    Ok(Some(PlotOutput {
        path: output.unwrap_or_else(|| PathBuf::from(default_filename)),
        dpi,
    }))
}

/// Report the years that will be used.
pub(super) fn print_years(years: &[i32]) {
    let mut printer = InfoPrinter::new(format!("{} epochs", years.len()).into());
    printer.push_line(years.iter().map(|&y| format_year(y)).join(", ").into());
    printer.display();
}

#[derive(Error, Debug)]
pub(super) enum CommonArgsError {
    #[error("Observer position specified as {pos:?}, not [<Longitude>, <Latitude>, <Height>]")]
    BadObserverPosition { pos: Vec<f64> },

    #[error("Latitude {0}° is not within -90° to 90°")]
    LatitudeOutOfRange(f64),

    #[error("'{0}' is not a calendar; valid calendars are: {}", Calendar::iter().join(", "))]
    InvalidCalendar(String),

    #[error("Refraction needs both --temperature and --pressure, but only one was given")]
    OnlyOneOfTemperatureAndPressure,

    #[error("A temperature of {temperature_c}°C and pressure of {pressure_mbar} mbar is not a physical atmosphere")]
    BadAtmosphere {
        temperature_c: f64,
        pressure_mbar: f64,
    },

    #[error("A figure DPI of {0} is not allowed; it must be between 1 and {}", MAX_DPI)]
    InvalidDpi(u32),

    #[error("polestar was not compiled with the \"plotting\" feature, so it can't draw figures.\nEither use --no-plot, or compile polestar with the \"plotting\" feature.")]
    NoPlottingFeature,
}
