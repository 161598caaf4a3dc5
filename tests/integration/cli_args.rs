// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests against the top-level command-line interface.

use crate::*;

#[test]
fn test_polestar_help_is_correct() {
    let mut stdouts = vec![];

    // First with --help
    let cmd = polestar().arg("--help").ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    // Then with -h
    let cmd = polestar().arg("-h").ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    stdouts.push(stdout);

    for stdout in stdouts {
        assert!(stdout.contains("ncp-sweep"));
        assert!(stdout.contains("north-horizon"));
        assert!(stdout.contains("catalog-verify"));
    }
}

#[test]
fn test_subcommand_help_is_correct() {
    let cmd = polestar().args(["ncp-sweep", "--help"]).ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    assert!(stdout.contains("--year-range"));
    assert!(stdout.contains("--output-series"));
    assert!(stdout.contains("--observer-position"));
    assert!(stdout.contains("Extended_Star_Analysis.png"));

    let cmd = polestar().args(["north-horizon", "--help"]).ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty());
    assert!(stdout.contains("--years"));
    assert!(stdout.contains("Giza_North_Horizon_Star_Alignment.png"));
}

#[test]
fn test_no_subcommand_is_an_error() {
    let cmd = polestar().ok();
    assert!(cmd.is_err());
}

#[test]
fn test_observer_position_needs_three_values() {
    let cmd = polestar()
        .args([
            "ncp-sweep",
            "--observer-position",
            "31.0",
            "29.9",
            "--no-plot",
        ])
        .ok();
    assert!(cmd.is_err());
}
