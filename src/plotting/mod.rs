// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! PNG figures of sweep results.

mod error;
#[cfg(test)]
mod tests;

pub use error::PlotError;

use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    astrometry::Observation,
    constants::{MAX_DPI, PI, TAU},
};

const NCP_TITLE: &str = "Angular Distance of Stars from North Celestial Pole Over Time";

/// matplotlib's "tab10" colours.
const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// The physical size of a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width_inches: f64,
    pub height_inches: f64,
    pub dpi: u32,
}

impl FigureSize {
    pub fn ncp(dpi: u32) -> FigureSize {
        FigureSize {
            width_inches: 15.0,
            height_inches: 8.0,
            dpi,
        }
    }

    pub fn horizon(dpi: u32) -> FigureSize {
        FigureSize {
            width_inches: 18.0,
            height_inches: 10.0,
            dpi,
        }
    }

    pub fn pixels(&self) -> Result<(u32, u32), PlotError> {
        if self.dpi == 0 || self.dpi > MAX_DPI {
            return Err(PlotError::InvalidDpi(self.dpi));
        }
        let dpi = f64::from(self.dpi);
        Ok((
            (self.width_inches * dpi).round() as u32,
            (self.height_inches * dpi).round() as u32,
        ))
    }

    /// Convert typographic points to pixels.
    fn pt(&self, points: f64) -> u32 {
        ((points * f64::from(self.dpi) / 72.0).round() as u32).max(1)
    }
}

/// Wrap an azimuth \[radians\] into (-π, π], so that north is in the middle.
pub fn wrap_azimuth(az: f64) -> f64 {
    let az = az.rem_euclid(TAU);
    if az > PI {
        az - TAU
    } else {
        az
    }
}

/// "February" for 2, etc.
pub fn month_name(month: u8) -> Option<String> {
    chrono::NaiveDate::from_ymd_opt(2000, u32::from(month), 1).map(|d| d.format("%B").to_string())
}

/// The panel layout (rows, columns) used for `num_panels` panels.
pub fn panel_grid(num_panels: usize) -> (usize, usize) {
    let cols = num_panels.clamp(1, 2);
    (num_panels.max(1).div_ceil(cols), cols)
}

fn year_label(year: i32) -> String {
    if year < 0 {
        format!("{} BC", year.unsigned_abs())
    } else {
        format!("{year} AD")
    }
}

fn plotters_err<E: std::error::Error + 'static>(e: E) -> PlotError {
    PlotError::Plotters(Box::new(e))
}

/// Plot the angular distance from the NCP of each star against year. Years
/// are drawn as years BC, increasing into the past.
pub fn plot_ncp_distances(
    path: &Path,
    years: &[i32],
    series: &IndexMap<String, Vec<f64>>,
    size: FigureSize,
) -> Result<(), PlotError> {
    if years.is_empty() || series.is_empty() {
        return Err(PlotError::NothingToPlot);
    }
    for (name, distances) in series {
        if distances.len() != years.len() {
            return Err(PlotError::LengthMismatch {
                name: name.clone(),
                expected: years.len(),
                got: distances.len(),
            });
        }
    }

    let (width, height) = size.pixels()?;
    debug!("Drawing {} ({width}x{height} pixels)", path.display());
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plotters_err)?;

    let xs: Vec<f64> = years.iter().map(|&y| -f64::from(y)).collect();
    let (mut x_min, mut x_max) = xs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    if x_min == x_max {
        x_min -= 1.0;
        x_max += 1.0;
    }
    let (mut y_min, mut y_max) = series
        .values()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
            (lo.min(y), hi.max(y))
        });
    let pad = ((y_max - y_min) * 0.05).max(0.5);
    y_min -= pad;
    y_max += pad;

    let mut chart = ChartBuilder::on(&root)
        .caption(NCP_TITLE, ("sans-serif", size.pt(14.0)))
        .margin(size.pt(10.0))
        .x_label_area_size(size.pt(30.0))
        .y_label_area_size(size.pt(40.0))
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plotters_err)?;
    chart
        .configure_mesh()
        .x_desc("Year (BC)")
        .y_desc("Angular Distance from NCP (degrees)")
        .x_label_formatter(&|x| format!("{x:.0}"))
        .label_style(("sans-serif", size.pt(10.0)))
        .axis_desc_style(("sans-serif", size.pt(11.0)))
        .draw()
        .map_err(plotters_err)?;

    let line_width = size.pt(1.5);
    for (i, (name, distances)) in series.iter().enumerate() {
        let colour = TAB10[i % TAB10.len()];
        let legend_length = size.pt(20.0) as i32;
        chart
            .draw_series(LineSeries::new(
                xs.iter().copied().zip(distances.iter().copied()),
                colour.stroke_width(line_width),
            ))
            .map_err(plotters_err)?
            .label(name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_length, y)], colour.stroke_width(2))
            });
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", size.pt(10.0)))
        .draw()
        .map_err(plotters_err)?;

    root.present().map_err(plotters_err)?;
    Ok(())
}

/// Plot one panel per year of where each star sits above the northern
/// horizon. `snapshots` pairs each year with the observations of that year.
///
/// Azimuths are wrapped into (-π, π] before drawing, so north sits in the
/// middle of each panel and stars just west of north appear at small negative
/// azimuths. Drawing raw azimuths in [0, 2π) against the same -1..1 radian
/// axis, as the original horizon figure did, leaves those stars off the panel,
/// so this figure can show stars that the original did not.
pub fn plot_north_horizon(
    path: &Path,
    site_name: &str,
    month: u8,
    snapshots: &[(i32, IndexMap<String, Observation>)],
    size: FigureSize,
) -> Result<(), PlotError> {
    if snapshots.is_empty() {
        return Err(PlotError::NothingToPlot);
    }
    let month = month_name(month).ok_or(PlotError::InvalidMonth(month))?;

    let (width, height) = size.pixels()?;
    debug!("Drawing {} ({width}x{height} pixels)", path.display());
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plotters_err)?;

    let panels = root.split_evenly(panel_grid(snapshots.len()));
    for ((year, observations), panel) in snapshots.iter().zip(panels.iter()) {
        let title = format!(
            "{site_name} - North Horizon - {month} {}",
            year_label(*year)
        );
        plot_horizon_panel(panel, &title, observations, size)?;
    }

    root.present().map_err(plotters_err)?;
    Ok(())
}

fn plot_horizon_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    observations: &IndexMap<String, Observation>,
    size: FigureSize,
) -> Result<(), PlotError>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", size.pt(12.0)))
        .margin(size.pt(8.0))
        .x_label_area_size(size.pt(24.0))
        .y_label_area_size(size.pt(30.0))
        .build_cartesian_2d(-1.0..1.0, 0.0..1.0)
        .map_err(plotters_err)?;
    chart
        .configure_mesh()
        .x_desc("Azimuth (East to West)")
        .y_desc("Altitude")
        .label_style(("sans-serif", size.pt(9.0)))
        .axis_desc_style(("sans-serif", size.pt(10.0)))
        .draw()
        .map_err(plotters_err)?;

    let radius = size.pt(3.0);
    let offset = size.pt(10.0) as i32;
    for (i, (name, obs)) in observations.iter().enumerate() {
        let colour = TAB10[i % TAB10.len()];
        let point = (wrap_azimuth(obs.azel.az), obs.azel.el);
        // Stars off the panel still get a legend entry.
        let visible = (-1.0..=1.0).contains(&point.0) && (0.0..=1.0).contains(&point.1);
        let label_style = ("sans-serif", size.pt(9.0))
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(
                std::iter::once(point)
                    .filter(|_| visible)
                    .map(|coord| {
                        EmptyElement::at(coord)
                            + Circle::new((0, 0), radius, colour.filled())
                            + Text::new(name.clone(), (0, -offset), label_style.clone())
                    }),
            )
            .map_err(plotters_err)?
            .label(format!(
                "{name} ({:.2}° from NCP)",
                obs.ncp_distance_degrees()
            ))
            .legend(move |(x, y)| Circle::new((x, y), radius, colour.filled()));
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", size.pt(8.0)))
        .draw()
        .map_err(plotters_err)?;
    Ok(())
}
