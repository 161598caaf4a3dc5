// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify star catalogue files.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::{
    catalog::{parse_star_selection, Catalog},
    PolestarError,
};

/// Verify that star catalogues can be read by polestar.
#[derive(Parser, Debug)]
pub struct CatalogVerifyArgs {
    /// Path to the catalogue(s) to be verified.
    #[clap(name = "CATALOGUES", parse(from_os_str))]
    catalogs: Vec<PathBuf>,

    /// Also check that this star is in each catalogue. May be given multiple
    /// times.
    #[clap(long = "star", value_name = "NAME=HIP", number_of_values = 1)]
    stars: Vec<String>,
}

impl CatalogVerifyArgs {
    /// Run [verify] with these arguments.
    pub fn run(&self) -> Result<(), PolestarError> {
        let selections = self
            .stars
            .iter()
            .map(|s| parse_star_selection(s))
            .collect::<Result<Vec<_>, _>>()?;
        verify(&self.catalogs, &selections)
    }
}

/// Read and print stats out for each input catalogue. If a catalogue couldn't
/// be read, print the error, and continue trying to read the other
/// catalogues; the problems are reported as an error at the end.
fn verify<P: AsRef<Path>>(
    catalogs: &[P],
    selections: &[(String, u32)],
) -> Result<(), PolestarError> {
    if catalogs.is_empty() {
        return Err(PolestarError::Generic(
            "No star catalogues were supplied!".to_string(),
        ));
    }

    let mut num_bad = 0;
    for catalog in catalogs {
        let catalog = catalog.as_ref();
        info!("{}:", catalog.display());

        let cat = match Catalog::read_file(catalog) {
            Ok(c) => c,
            Err(e) => {
                info!("    {}", e);
                info!("");
                num_bad += 1;
                continue;
            }
        };
        let num_with_parallax = cat.iter().filter(|s| s.parallax_mas > 0.0).count();
        info!(
            "    {} stars with positions ({num_with_parallax} with a positive parallax), {} records without",
            cat.len(),
            cat.num_skipped
        );
        let (brightest, faintest) = cat
            .iter()
            .filter_map(|s| s.vmag)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), m| {
                (lo.min(m), hi.max(m))
            });
        if brightest <= faintest {
            info!("    Visual magnitudes from {brightest:.2} to {faintest:.2}");
        }

        let mut missing = false;
        for (name, hip) in selections {
            match cat.get(*hip) {
                Some(star) => info!(
                    "    {name} (HIP {hip}): RA {:.4}° Dec {:.4}°",
                    star.ra_deg, star.dec_deg
                ),
                None => {
                    info!("    {name} (HIP {hip}): not found");
                    missing = true;
                }
            }
        }
        if missing {
            num_bad += 1;
        }
        info!("");
    }

    if num_bad > 0 {
        return Err(PolestarError::Catalog(format!(
            "{num_bad} of {} catalogues couldn't be read or were missing stars",
            catalogs.len()
        )));
    }
    Ok(())
}
