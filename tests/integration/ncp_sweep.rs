// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;

use crate::*;

#[test]
fn test_ncp_sweep_writes_series() {
    let dir = tempfile::tempdir().unwrap();
    let series = dir.path().join("series.json");
    let cmd = polestar()
        .args([
            "ncp-sweep",
            "-c",
            CATALOG,
            "--years",
            "-2600",
            "-2550",
            "--no-plot",
            "--output-series",
        ])
        .arg(&series)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Closest approach to the NCP"), "{stdout}");
    assert!(stdout.contains("Thuban"), "{stdout}");

    let json: serde_json::Value = serde_json::from_reader(File::open(&series).unwrap()).unwrap();
    assert_eq!(json["site"], "Giza");
    assert_eq!(json["years"], serde_json::json!([-2600, -2550]));
    let distances = json["ncp_distance_degrees"].as_object().unwrap();
    assert_eq!(distances.len(), 9);
    // Star order follows the default list.
    assert_eq!(distances.keys().next().map(|s| s.as_str()), Some("Polaris"));
    for series in distances.values() {
        let series = series.as_array().unwrap();
        assert_eq!(series.len(), 2);
        for d in series {
            let d = d.as_f64().unwrap();
            assert!((0.0..=180.0).contains(&d));
        }
    }
}

#[test]
fn test_ncp_sweep_out_of_coverage() {
    let cmd = polestar()
        .args([
            "ncp-sweep",
            "-c",
            CATALOG,
            "--years",
            "-3050",
            "--no-plot",
        ])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(
        stdout.contains("does not cover") || stderr.contains("does not cover"),
        "{stdout}\n{stderr}"
    );
}

#[test]
fn test_ncp_sweep_unknown_star() {
    let cmd = polestar()
        .args([
            "ncp-sweep",
            "-c",
            CATALOG,
            "--star",
            "Nowhere=1",
            "--years",
            "-2600",
            "--no-plot",
        ])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(
        stdout.contains("HIP 1 is not in the star catalogue")
            || stderr.contains("HIP 1 is not in the star catalogue"),
        "{stdout}\n{stderr}"
    );
}

#[test]
fn test_ncp_sweep_saved_toml_reproduces_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let toml = dir.path().join("args.toml");
    let cmd = polestar()
        .args([
            "ncp-sweep",
            "-c",
            CATALOG,
            "--year-range",
            "-2600",
            "-2400",
            "100",
            "--no-plot",
            "--dry-run",
            "--save-toml",
        ])
        .arg(&toml)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");

    let contents = std::fs::read_to_string(&toml).unwrap();
    assert!(contents.contains("[sky]"), "{contents}");
    assert!(contents.contains("[ncp-sweep]"), "{contents}");

    let cmd = polestar()
        .arg("ncp-sweep")
        .arg(&toml)
        .arg("--dry-run")
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
}
