// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::*;

#[test]
fn test_north_horizon_prints_observations() {
    let cmd = polestar()
        .args(["north-horizon", "-c", CATALOG, "--no-plot"])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Giza in 2601 BCE"), "{stdout}");
    assert!(stdout.contains("Giza in 2451 BCE"), "{stdout}");
    assert!(stdout.contains("Polaris"), "{stdout}");
    assert!(stdout.contains("from NCP"), "{stdout}");
}

#[test]
fn test_north_horizon_alias_and_site() {
    let cmd = polestar()
        .args([
            "horizon",
            "-c",
            CATALOG,
            "--years",
            "-2000",
            "--observer-position",
            "-0.1276",
            "51.5072",
            "11",
            "--site-name",
            "London",
            "--no-plot",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("London in 2001 BCE"), "{stdout}");
}
