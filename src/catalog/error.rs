// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading a star catalogue and selecting stars from
/// it.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Star catalogue '{0}' does not exist")]
    DoesntExist(PathBuf),

    #[error("Star catalogue '{0}' did not contain any usable stars")]
    NoStars(PathBuf),

    #[error("Catalogue line {line_num}: Expected at least {expected} '|'-separated fields, but found {got}")]
    TooFewFields {
        line_num: usize,
        expected: usize,
        got: usize,
    },

    #[error("Catalogue line {line_num}: Couldn't parse the {field} field '{string}'")]
    ParseField {
        line_num: usize,
        field: &'static str,
        string: String,
    },

    #[error("HIP {0} is not in the star catalogue")]
    UnknownHip(u32),

    #[error("The display name '{0}' was used for more than one star")]
    DuplicateName(String),

    #[error("Couldn't parse star selection '{0}'; expected NAME=HIP, e.g. Polaris=11767")]
    BadSelection(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
