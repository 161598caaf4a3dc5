// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Apparent positions of circumpolar stars as seen from a fixed site (Giza by
default) across historical epochs, and plots of how far they sit from the
North Celestial Pole.
 */

pub mod astrometry;
pub mod catalog;
mod cli;
pub mod constants;
pub mod ephemeris;
#[cfg(feature = "plotting")]
pub mod plotting;
pub mod sweep;
pub mod time;

// Re-exports.
pub use astrometry::{observe, Atmosphere, Observation, Observer};
pub use catalog::{Catalog, Star};
pub use cli::{Polestar, PolestarError};
pub use ephemeris::{Ephemeris, KeplerianEarth};
pub use sweep::{compute_series, compute_snapshots, SweepEpoch};
pub use time::{Calendar, CalendarTime};
