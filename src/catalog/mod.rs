// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Star catalogues. Only the Hipparcos main catalogue (CDS I/239,
//! `hip_main.dat`) is supported.

mod error;
pub(crate) mod hipparcos;

pub use error::CatalogError;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::GzDecoder;
use indexmap::IndexMap;
use log::{debug, trace};
use marlu::RADec;
use serde::{Deserialize, Serialize};

use crate::constants::{HIPPARCOS_EPOCH_JD, MIN_PARALLAX_MAS};

/// The stars (and the display names given to them) of the extended NCP
/// analysis. The names are kept exactly as they have always been labelled on
/// the plots, even where they don't match the usual name of the HIP number.
pub const DEFAULT_SWEEP_STARS: [(&str, u32); 9] = [
    ("Polaris", 11767),
    ("Beta UMi", 72607),
    ("Zeta UMa", 65378),
    ("Eta UMa", 67301),
    ("Thuban", 85819),
    ("Gamma Draconis", 68756),
    ("Alpha Boo", 10234),
    ("Beta Leo", 88972),
    ("Alpha Gem", 54872),
];

/// The stars of the north-horizon figure.
pub const DEFAULT_HORIZON_STARS: [(&str, u32); 6] = [
    ("Polaris", 11767),
    ("Beta UMi", 72607),
    ("Zeta UMa", 65378),
    ("Eta UMa", 67301),
    ("Thuban", 85819),
    ("Gamma Draconis", 68756),
];

/// A catalogue entry. Positions are ICRS at the catalogue epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// The Hipparcos identifier.
    pub hip: u32,

    /// Right ascension \[degrees\].
    pub ra_deg: f64,

    /// Declination \[degrees\].
    pub dec_deg: f64,

    /// Trigonometric parallax \[milliarcseconds\].
    pub parallax_mas: f64,

    /// Proper motion in right ascension, multiplied by cos(Dec) \[mas/yr\].
    pub pm_ra_mas_per_year: f64,

    /// Proper motion in declination \[mas/yr\].
    pub pm_dec_mas_per_year: f64,

    /// Radial velocity \[km/s\]. Hipparcos doesn't provide any, so this is
    /// zero for catalogue stars.
    pub radial_km_per_s: f64,

    /// The Julian date (TT) that the astrometry refers to.
    pub epoch_jd: f64,

    /// Johnson V magnitude, if known.
    pub vmag: Option<f64>,
}

impl Star {
    /// A star with no proper motion or parallax, at the Hipparcos epoch.
    pub fn fixed(hip: u32, ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            hip,
            ra_deg,
            dec_deg,
            parallax_mas: 0.0,
            pm_ra_mas_per_year: 0.0,
            pm_dec_mas_per_year: 0.0,
            radial_km_per_s: 0.0,
            epoch_jd: HIPPARCOS_EPOCH_JD,
            vmag: None,
        }
    }

    /// The catalogue position.
    pub fn radec(&self) -> RADec {
        RADec::from_degrees(self.ra_deg, self.dec_deg)
    }

    /// The parallax used for distances; non-positive parallaxes are replaced
    /// with a tiny one.
    pub fn effective_parallax_mas(&self) -> f64 {
        if self.parallax_mas <= 0.0 {
            MIN_PARALLAX_MAS
        } else {
            self.parallax_mas
        }
    }
}

/// A star catalogue, keyed by HIP number in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stars: IndexMap<u32, Star>,

    /// The number of catalogue records without usable astrometry.
    pub num_skipped: usize,
}

impl Catalog {
    /// Read a Hipparcos main catalogue file. Files ending in ".gz" are
    /// decompressed on the fly.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        fn inner(path: &Path) -> Result<Catalog, CatalogError> {
            debug!("Reading star catalogue {}", path.display());
            if !path.exists() {
                return Err(CatalogError::DoesntExist(path.to_path_buf()));
            }
            let f = File::open(path)?;
            let is_gz = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("gz"))
                .unwrap_or(false);
            let catalog = if is_gz {
                trace!("Decompressing with gzip");
                Catalog::from_reader(BufReader::new(GzDecoder::new(f)))?
            } else {
                Catalog::from_reader(BufReader::new(f))?
            };
            if catalog.is_empty() {
                return Err(CatalogError::NoStars(path.to_path_buf()));
            }
            Ok(catalog)
        }
        inner(path.as_ref())
    }

    /// Parse Hipparcos main catalogue records from a buffer.
    pub fn from_reader<R: BufRead>(buf: R) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();
        for (i_line, line) in buf.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match hipparcos::parse_record(&line, i_line + 1)? {
                Some(star) => {
                    if catalog.stars.insert(star.hip, star).is_some() {
                        trace!("Line {}: replaced an earlier record", i_line + 1);
                    }
                }
                None => catalog.num_skipped += 1,
            }
        }
        debug!(
            "Read {} stars ({} records without astrometry skipped)",
            catalog.len(),
            catalog.num_skipped
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn get(&self, hip: u32) -> Option<&Star> {
        self.stars.get(&hip)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.values()
    }

    /// Look up each (display name, HIP number) pair, keeping the given order.
    pub fn select<S: AsRef<str>>(
        &self,
        selection: &[(S, u32)],
    ) -> Result<IndexMap<String, Star>, CatalogError> {
        let mut stars = IndexMap::with_capacity(selection.len());
        for (name, hip) in selection {
            let name = name.as_ref();
            let star = self.get(*hip).ok_or(CatalogError::UnknownHip(*hip))?;
            if stars.insert(name.to_string(), star.clone()).is_some() {
                return Err(CatalogError::DuplicateName(name.to_string()));
            }
        }
        Ok(stars)
    }
}

/// Parse a star selection of the form "NAME=HIP", e.g. "Polaris=11767".
pub fn parse_star_selection(s: &str) -> Result<(String, u32), CatalogError> {
    let (name, hip) = s
        .rsplit_once('=')
        .ok_or_else(|| CatalogError::BadSelection(s.to_string()))?;
    let name = name.trim();
    let hip = hip
        .trim()
        .parse()
        .map_err(|_| CatalogError::BadSelection(s.to_string()))?;
    if name.is_empty() {
        return Err(CatalogError::BadSelection(s.to_string()));
    }
    Ok((name.to_string(), hip))
}
