// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_figure_sizes() {
    assert_eq!(FigureSize::ncp(300).pixels().unwrap(), (4500, 2400));
    assert_eq!(FigureSize::horizon(300).pixels().unwrap(), (5400, 3000));
    assert_eq!(FigureSize::horizon(100).pixels().unwrap(), (1800, 1000));
    assert!(matches!(
        FigureSize::ncp(0).pixels(),
        Err(PlotError::InvalidDpi(0))
    ));
    assert_eq!(
        FigureSize::horizon(MAX_DPI).pixels().unwrap(),
        (18 * MAX_DPI, 10 * MAX_DPI)
    );
    assert!(matches!(
        FigureSize::horizon(MAX_DPI + 1).pixels(),
        Err(PlotError::InvalidDpi(_))
    ));
    assert!(matches!(
        FigureSize::ncp(u32::MAX).pixels(),
        Err(PlotError::InvalidDpi(u32::MAX))
    ));
    // 12 pt at 72 dpi is 12 pixels.
    assert_eq!(FigureSize::ncp(72).pt(12.0), 12);
    assert_eq!(FigureSize::ncp(300).pt(12.0), 50);
    assert_eq!(FigureSize::ncp(1).pt(0.1), 1);
}

#[test]
fn test_wrap_azimuth() {
    assert_abs_diff_eq!(wrap_azimuth(0.0), 0.0);
    assert_abs_diff_eq!(wrap_azimuth(0.5), 0.5);
    assert_abs_diff_eq!(wrap_azimuth(TAU - 0.5), -0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(wrap_azimuth(PI), PI);
    assert_abs_diff_eq!(wrap_azimuth(-PI), PI, epsilon = 1e-12);
    assert_abs_diff_eq!(wrap_azimuth(3.0 * TAU + 0.25), 0.25, epsilon = 1e-12);
}

#[test]
fn test_month_name() {
    assert_eq!(month_name(2).as_deref(), Some("February"));
    assert_eq!(month_name(12).as_deref(), Some("December"));
    assert_eq!(month_name(0), None);
    assert_eq!(month_name(13), None);
}

#[test]
fn test_panel_grid() {
    assert_eq!(panel_grid(1), (1, 1));
    assert_eq!(panel_grid(2), (1, 2));
    assert_eq!(panel_grid(4), (2, 2));
    assert_eq!(panel_grid(5), (3, 2));
}

#[test]
fn test_year_label() {
    assert_eq!(year_label(-2600), "2600 BC");
    assert_eq!(year_label(1000), "1000 AD");
}

#[test]
fn test_bad_inputs_are_rejected_before_drawing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ncp.png");
    let mut series = IndexMap::new();
    series.insert("Polaris".to_string(), vec![1.0, 2.0]);

    assert!(matches!(
        plot_ncp_distances(&path, &[-2600], &series, FigureSize::ncp(10)),
        Err(PlotError::LengthMismatch {
            expected: 1,
            got: 2,
            ..
        })
    ));
    assert!(matches!(
        plot_ncp_distances(&path, &[], &series, FigureSize::ncp(10)),
        Err(PlotError::NothingToPlot)
    ));
    assert!(matches!(
        plot_ncp_distances(&path, &[-2600, -2550], &series, FigureSize::ncp(0)),
        Err(PlotError::InvalidDpi(0))
    ));
    assert!(matches!(
        plot_north_horizon(&path, "Giza", 2, &[], FigureSize::horizon(10)),
        Err(PlotError::NothingToPlot)
    ));
    assert!(!path.exists());
}
