// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of records of the Hipparcos main catalogue (`hip_main.dat`).
//!
//! Each record is a single line of '|'-separated fields. See for more info:
//! <https://cdsarc.cds.unistra.fr/ftp/cats/I/239/ReadMe>

use super::{CatalogError, Star};
use crate::constants::HIPPARCOS_EPOCH_JD;

const FIELD_HIP: usize = 1;
const FIELD_VMAG: usize = 5;
const FIELD_RA_DEG: usize = 8;
const FIELD_DEC_DEG: usize = 9;
const FIELD_PLX: usize = 11;
const FIELD_PM_RA: usize = 12;
const FIELD_PM_DEC: usize = 13;

/// Every record must have at least this many fields.
pub(super) const MIN_NUM_FIELDS: usize = FIELD_PM_DEC + 1;

fn parse_optional(
    fields: &[&str],
    index: usize,
    field: &'static str,
    line_num: usize,
) -> Result<Option<f64>, CatalogError> {
    let s = fields[index].trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse().map(Some).map_err(|_| CatalogError::ParseField {
        line_num,
        field,
        string: s.to_string(),
    })
}

/// Parse a single catalogue record. `None` is returned for records without a
/// position (these exist in the catalogue for a handful of stars).
pub(super) fn parse_record(line: &str, line_num: usize) -> Result<Option<Star>, CatalogError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < MIN_NUM_FIELDS {
        return Err(CatalogError::TooFewFields {
            line_num,
            expected: MIN_NUM_FIELDS,
            got: fields.len(),
        });
    }

    let hip_str = fields[FIELD_HIP].trim();
    let hip = hip_str.parse().map_err(|_| CatalogError::ParseField {
        line_num,
        field: "HIP",
        string: hip_str.to_string(),
    })?;

    let ra_deg = parse_optional(&fields, FIELD_RA_DEG, "RAdeg", line_num)?;
    let dec_deg = parse_optional(&fields, FIELD_DEC_DEG, "DEdeg", line_num)?;
    let (ra_deg, dec_deg) = match (ra_deg, dec_deg) {
        (Some(ra), Some(dec)) => (ra, dec),
        _ => return Ok(None),
    };

    Ok(Some(Star {
        hip,
        ra_deg,
        dec_deg,
        parallax_mas: parse_optional(&fields, FIELD_PLX, "Plx", line_num)?.unwrap_or(0.0),
        pm_ra_mas_per_year: parse_optional(&fields, FIELD_PM_RA, "pmRA", line_num)?
            .unwrap_or(0.0),
        pm_dec_mas_per_year: parse_optional(&fields, FIELD_PM_DEC, "pmDE", line_num)?
            .unwrap_or(0.0),
        radial_km_per_s: 0.0,
        epoch_jd: HIPPARCOS_EPOCH_JD,
        vmag: parse_optional(&fields, FIELD_VMAG, "Vmag", line_num)?,
    }))
}
