// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::*;

#[test]
fn test_catalog_verify() {
    let cmd = polestar()
        .args(["catalog-verify", CATALOG, "--star", "Polaris=11767"])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("9 stars with positions"), "{stdout}");
    assert!(stdout.contains("Polaris (HIP 11767)"), "{stdout}");
}

#[test]
fn test_catalog_verify_reports_failures() {
    let cmd = polestar()
        .args([
            "catalog-verify",
            CATALOG,
            "test_files/does_not_exist.dat",
        ])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(
        stdout.contains("1 of 2 catalogues") || stderr.contains("1 of 2 catalogues"),
        "{stdout}\n{stderr}"
    );
}
