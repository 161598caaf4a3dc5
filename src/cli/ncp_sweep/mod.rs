// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Follow stars' angular distances from the North Celestial Pole over a range
//! of years.


use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use indexmap::IndexMap;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vec1::Vec1;

use super::common::{
    display_warnings, parse_plot_output, print_years, InfoPrinter, PlotOutput, SkyArgs, SkyParams,
    ARG_FILE_HELP, DPI_HELP,
};
use crate::{
    catalog::DEFAULT_SWEEP_STARS,
    constants::NCP_FIGURE_FILENAME,
    ephemeris::{Ephemeris, KeplerianEarth},
    sweep::{check_coverage, compute_series, year_range, SweepEpoch, SweepError},
    time::format_year,
    PolestarError,
};

const DEFAULT_YEAR_RANGE: [i32; 3] = [-3000, -1000, 50];

lazy_static::lazy_static! {
    static ref YEAR_RANGE_HELP: String =
        format!("The first year, the year to stop before, and the step between years. Years are astronomical (0 is 1 BCE). Default: {} {} {}",
                DEFAULT_YEAR_RANGE[0], DEFAULT_YEAR_RANGE[1], DEFAULT_YEAR_RANGE[2]);

    static ref OUTPUT_HELP: String =
        format!("Path to the output figure (PNG). Default: {NCP_FIGURE_FILENAME}");
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct NcpSweepCliArgs {
    #[clap(
        long, help = YEAR_RANGE_HELP.as_str(), help_heading = "EPOCHS",
        number_of_values = 3,
        allow_hyphen_values = true,
        value_names = &["START", "END", "STEP"],
        conflicts_with = "years"
    )]
    pub(super) year_range: Option<Vec<i32>>,

    /// Use these years rather than a range, in the order given.
    #[clap(long, multiple_values(true), help_heading = "EPOCHS")]
    pub(super) years: Option<Vec<i32>>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    #[clap(long, help = DPI_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) dpi: Option<u32>,

    /// Also write the computed distances to this JSON file.
    #[clap(long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output_series: Option<PathBuf>,

    /// Don't draw the figure.
    #[clap(long, help_heading = "OUTPUT FILES")]
    #[serde(default)]
    pub(super) no_plot: bool,
}

impl NcpSweepCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            year_range: self.year_range.or(other.year_range),
            years: self.years.or(other.years),
            output: self.output.or(other.output),
            dpi: self.dpi.or(other.dpi),
            output_series: self.output_series.or(other.output_series),
            no_plot: self.no_plot || other.no_plot,
        }
    }

    /// The years of the sweep, in order.
    fn parse_years(&self) -> Result<Vec1<i32>, PolestarError> {
        match (self.year_range.as_deref(), self.years.as_ref()) {
            (Some(_), Some(_)) => Err(NcpSweepArgsError::BothYearRangeAndYears.into()),
            (Some(&[start, end, step]), None) => Ok(year_range(start, end, step)?),
            (Some(range), None) => Err(NcpSweepArgsError::BadYearRange {
                range: range.to_vec(),
            }
            .into()),
            (None, Some(years)) => {
                Ok(Vec1::try_from_vec(years.clone()).map_err(|_| SweepError::NoEpochs)?)
            }
            (None, None) => {
                let [start, end, step] = DEFAULT_YEAR_RANGE;
                Ok(year_range(start, end, step)?)
            }
        }
    }
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[clap(allow_negative_numbers = true)]
pub(super) struct NcpSweepArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "sky")]
    #[serde(default)]
    pub(super) sky_args: SkyArgs,

    #[clap(flatten)]
    #[serde(rename = "ncp-sweep")]
    #[serde(default)]
    pub(super) sweep_args: NcpSweepCliArgs,
}

impl NcpSweepArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<NcpSweepArgs, PolestarError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let NcpSweepArgs {
                args_file: _,
                sky_args,
                sweep_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(NcpSweepArgs {
                args_file: None,
                sky_args: cli_args.sky_args.merge(sky_args),
                sweep_args: cli_args.sweep_args.merge(sweep_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<NcpSweepParams, PolestarError> {
        debug!("{:#?}", self);

        let NcpSweepArgs {
            args_file: _,
            sky_args,
            sweep_args,
        } = self;

        let years = sweep_args.parse_years()?;
        let plot = parse_plot_output(
            sweep_args.no_plot,
            sweep_args.output,
            sweep_args.dpi,
            NCP_FIGURE_FILENAME,
        )?;
        let sky = sky_args.parse(&DEFAULT_SWEEP_STARS[..])?;
        let epochs = sky.site.make_epochs(&years)?;
        print_years(&years);

        // Fail now rather than after a long sweep.
        let ephemeris = KeplerianEarth::new();
        check_coverage(&ephemeris, &epochs)?;

        let mut output_printer = InfoPrinter::new("Output files".into());
        match plot.as_ref() {
            Some(p) => output_printer
                .push_line(format!("Figure: {} ({} dpi)", p.path.display(), p.dpi).into()),
            None => output_printer.push_line("No figure".into()),
        }
        if let Some(series) = sweep_args.output_series.as_ref() {
            output_printer.push_line(format!("Series: {}", series.display()).into());
        }
        output_printer.display();

        display_warnings();

        Ok(NcpSweepParams {
            sky,
            epochs,
            ephemeris: Box::new(ephemeris),
            plot,
            output_series: sweep_args.output_series,
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

pub(super) struct NcpSweepParams {
    pub(super) sky: SkyParams,
    pub(super) epochs: Vec1<SweepEpoch>,
    pub(super) ephemeris: Box<dyn Ephemeris>,
    pub(super) plot: Option<PlotOutput>,
    pub(super) output_series: Option<PathBuf>,
}

impl NcpSweepParams {
    pub(super) fn run(&self) -> Result<IndexMap<String, Vec<f64>>, PolestarError> {
        info!(
            "Observing {} stars at {} epochs with the {} ephemeris",
            self.sky.stars.len(),
            self.epochs.len(),
            self.ephemeris.name()
        );
        let series = compute_series(
            self.ephemeris.as_ref(),
            &self.sky.site.observer,
            &self.sky.stars,
            &self.epochs,
            self.sky.site.atmosphere.as_ref(),
        )?;
        let years: Vec<i32> = self.epochs.iter().map(|e| e.year).collect();
        print_closest_approaches(&years, &series);

        if let Some(path) = self.output_series.as_deref() {
            write_series(path, &self.sky.site.observer.name, &years, &series)?;
            info!("Wrote {}", path.display());
        }
        if let Some(plot) = self.plot.as_ref() {
            draw(plot, &years, &series)?;
            info!("Wrote {}", plot.path.display());
        }

        Ok(series)
    }
}

/// Report the year in which each star came closest to the pole.
fn print_closest_approaches(years: &[i32], series: &IndexMap<String, Vec<f64>>) {
    let mut printer = InfoPrinter::new("Closest approach to the NCP".into());
    printer.push_block(
        series
            .iter()
            .filter_map(|(name, distances)| {
                let (i, d) = distances
                    .iter()
                    .enumerate()
                    .min_by(|(_, a), (_, b)| a.total_cmp(b))?;
                Some(format!("{name:<16} {d:>6.2}° in {}", format_year(years[i])).into())
            })
            .collect(),
    );
    printer.display();
}

/// The contents of a series file.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SeriesFile {
    pub(super) site: String,
    pub(super) years: Vec<i32>,
    /// Each star's angular distance from the NCP at each year \[degrees\].
    pub(super) ncp_distance_degrees: IndexMap<String, Vec<f64>>,
}

fn write_series(
    path: &Path,
    site: &str,
    years: &[i32],
    series: &IndexMap<String, Vec<f64>>,
) -> Result<(), PolestarError> {
    let file = SeriesFile {
        site: site.to_string(),
        years: years.to_vec(),
        ncp_distance_degrees: series.clone(),
    };
    let mut f = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut f, &file)?;
    f.flush()?;
    Ok(())
}

#[cfg(feature = "plotting")]
fn draw(
    plot: &PlotOutput,
    years: &[i32],
    series: &IndexMap<String, Vec<f64>>,
) -> Result<(), PolestarError> {
    use crate::plotting::{plot_ncp_distances, FigureSize};

    plot_ncp_distances(&plot.path, years, series, FigureSize::ncp(plot.dpi))?;
    Ok(())
}

#[cfg(not(feature = "plotting"))]
fn draw(
    _plot: &PlotOutput,
    _years: &[i32],
    _series: &IndexMap<String, Vec<f64>>,
) -> Result<(), PolestarError> {
    Err(super::common::CommonArgsError::NoPlottingFeature.into())
}

#[derive(Error, Debug)]
pub(super) enum NcpSweepArgsError {
    #[error("Year range specified as {range:?}, not [<Start>, <End>, <Step>]")]
    BadYearRange { range: Vec<i32> },

    #[error("Both --year-range and --years were given; only one may be used")]
    BothYearRangeAndYears,
}
