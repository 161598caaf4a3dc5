// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::constants::MAX_DPI;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("There is nothing to plot")]
    NothingToPlot,

    #[error("Star '{name}' has {got} values, but there are {expected} years")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("A DPI of {0} is not allowed; it must be between 1 and {}", MAX_DPI)]
    InvalidDpi(u32),

    #[error("Month {0} is invalid")]
    InvalidMonth(u8),

    #[error("Error from the plotters library: {0}")]
    Plotters(Box<dyn std::error::Error>),
}
