// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where stars sat above the northern horizon, one panel per year.


use std::path::PathBuf;

use clap::Parser;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vec1::Vec1;

use super::common::{
    display_warnings, parse_plot_output, print_years, InfoPrinter, PlotOutput, SkyArgs, SkyParams,
    ARG_FILE_HELP, DPI_HELP,
};
use crate::{
    astrometry::Observation,
    catalog::DEFAULT_HORIZON_STARS,
    constants::HORIZON_FIGURE_FILENAME,
    ephemeris::{Ephemeris, KeplerianEarth},
    sweep::{check_coverage, compute_snapshots, SweepEpoch, SweepError},
    time::format_year,
    PolestarError,
};

const DEFAULT_YEARS: [i32; 4] = [-2600, -2550, -2500, -2450];

lazy_static::lazy_static! {
    static ref YEARS_HELP: String =
        format!("The years to draw, one panel each, in the order given. Years are astronomical (0 is 1 BCE). Default: {}",
                DEFAULT_YEARS.iter().join(" "));

    static ref OUTPUT_HELP: String =
        format!("Path to the output figure (PNG). Default: {HORIZON_FIGURE_FILENAME}");
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct NorthHorizonCliArgs {
    #[clap(long, help = YEARS_HELP.as_str(), multiple_values(true), help_heading = "EPOCHS")]
    pub(super) years: Option<Vec<i32>>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    #[clap(long, help = DPI_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) dpi: Option<u32>,

    /// Don't draw the figure.
    #[clap(long, help_heading = "OUTPUT FILES")]
    #[serde(default)]
    pub(super) no_plot: bool,
}

impl NorthHorizonCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            years: self.years.or(other.years),
            output: self.output.or(other.output),
            dpi: self.dpi.or(other.dpi),
            no_plot: self.no_plot || other.no_plot,
        }
    }
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[clap(allow_negative_numbers = true)]
pub(super) struct NorthHorizonArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "sky")]
    #[serde(default)]
    pub(super) sky_args: SkyArgs,

    #[clap(flatten)]
    #[serde(rename = "north-horizon")]
    #[serde(default)]
    pub(super) horizon_args: NorthHorizonCliArgs,
}

impl NorthHorizonArgs {
    /// Consolidate the command-line arguments with those in the arguments file
    /// (if any), preferring the command-line arguments.
    pub(super) fn merge(self) -> Result<NorthHorizonArgs, PolestarError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let NorthHorizonArgs {
                args_file: _,
                sky_args,
                horizon_args,
            } = unpack_arg_file!(arg_file);

            Ok(NorthHorizonArgs {
                args_file: None,
                sky_args: cli_args.sky_args.merge(sky_args),
                horizon_args: cli_args.horizon_args.merge(horizon_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<NorthHorizonParams, PolestarError> {
        debug!("{:#?}", self);

        let NorthHorizonArgs {
            args_file: _,
            sky_args,
            horizon_args:
                NorthHorizonCliArgs {
                    years,
                    output,
                    dpi,
                    no_plot,
                },
        } = self;

        let years = match years {
            Some(years) => Vec1::try_from_vec(years).map_err(|_| NorthHorizonArgsError::NoYears)?,
            None => Vec1::try_from_vec(DEFAULT_YEARS.to_vec()).map_err(|_| SweepError::NoEpochs)?,
        };
        let plot = parse_plot_output(no_plot, output, dpi, HORIZON_FIGURE_FILENAME)?;
        let sky = sky_args.parse(&DEFAULT_HORIZON_STARS[..])?;
        let epochs = sky.site.make_epochs(&years)?;
        print_years(&years);

        let ephemeris = KeplerianEarth::new();
        check_coverage(&ephemeris, &epochs)?;

        if let Some(p) = plot.as_ref() {
            let mut output_printer = InfoPrinter::new("Output files".into());
            output_printer
                .push_line(format!("Figure: {} ({} dpi)", p.path.display(), p.dpi).into());
            output_printer.display();
        }

        display_warnings();

        Ok(NorthHorizonParams {
            sky,
            epochs,
            ephemeris: Box::new(ephemeris),
            plot,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), PolestarError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

pub(super) struct NorthHorizonParams {
    pub(super) sky: SkyParams,
    pub(super) epochs: Vec1<SweepEpoch>,
    pub(super) ephemeris: Box<dyn Ephemeris>,
    pub(super) plot: Option<PlotOutput>,
}

impl NorthHorizonParams {
    /// Observe every star at every epoch, and draw the figure if asked to.
    /// The observations are returned paired with their years.
    pub(super) fn run(&self) -> Result<Vec<(i32, IndexMap<String, Observation>)>, PolestarError> {
        let snapshots = compute_snapshots(
            self.ephemeris.as_ref(),
            &self.sky.site.observer,
            &self.sky.stars,
            &self.epochs,
            self.sky.site.atmosphere.as_ref(),
        )?;
        let snapshots: Vec<(i32, IndexMap<String, Observation>)> = self
            .epochs
            .iter()
            .map(|e| e.year)
            .zip(snapshots)
            .collect();

        for (year, observations) in &snapshots {
            let mut printer = InfoPrinter::new(
                format!("{} in {}", self.sky.site.observer.name, format_year(*year)).into(),
            );
            printer.push_block(
                observations
                    .iter()
                    .map(|(name, obs)| {
                        format!(
                            "{name:<16} az {:>7.2}° alt {:>6.2}° ({:.2}° from NCP)",
                            obs.azimuth_degrees(),
                            obs.altitude_degrees(),
                            obs.ncp_distance_degrees()
                        )
                        .into()
                    })
                    .collect(),
            );
            printer.display();
        }

        if let Some(plot) = self.plot.as_ref() {
            draw(
                plot,
                &self.sky.site.observer.name,
                self.sky.site.time.month,
                &snapshots,
            )?;
            info!("Wrote {}", plot.path.display());
        }

        Ok(snapshots)
    }
}

#[cfg(feature = "plotting")]
fn draw(
    plot: &PlotOutput,
    site_name: &str,
    month: u8,
    snapshots: &[(i32, IndexMap<String, Observation>)],
) -> Result<(), PolestarError> {
    use crate::plotting::{plot_north_horizon, FigureSize};

    plot_north_horizon(
        &plot.path,
        site_name,
        month,
        snapshots,
        FigureSize::horizon(plot.dpi),
    )?;
    Ok(())
}

#[cfg(not(feature = "plotting"))]
fn draw(
    _plot: &PlotOutput,
    _site_name: &str,
    _month: u8,
    _snapshots: &[(i32, IndexMap<String, Observation>)],
) -> Result<(), PolestarError> {
    Err(super::common::CommonArgsError::NoPlottingFeature.into())
}

#[derive(Error, Debug)]
pub(super) enum NorthHorizonArgsError {
    #[error("No years were given to draw")]
    NoYears,
}
