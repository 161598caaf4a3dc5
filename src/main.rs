// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;

use polestar::Polestar;

fn main() {
    // Run polestar, reporting any errors.
    if let Err(e) = Polestar::parse().run() {
        // Use the logger if it has been set up, otherwise print to stderr.
        if log::log_enabled!(log::Level::Error) {
            log::error!("{e}");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}
