//! Behavior tests for dashboard report assembly.

use finratio_tests::{
    build_dashboard, period, snapshot_source, symbol, MetricsErrorKind, ReportError,
    DEFAULT_LOOKBACK,
};

#[test]
fn the_dashboard_composes_profile_ratios_and_averages() {
    let source = snapshot_source();

    let dashboard = build_dashboard(
        &source,
        &symbol("AAPL"),
        period("2024-01-01"),
        period("2024-01-05"),
        DEFAULT_LOOKBACK,
        &[3],
    )
    .expect("must assemble");

    assert!(!dashboard.profile.is_empty());
    assert!(dashboard.warnings.is_empty());

    // ROE in percent: [10.0, 12.5, undefined] from the worked example.
    let roe = dashboard.roe_percent.expect("roe must be derivable");
    let values: Vec<_> = roe.series.points().iter().map(|p| p.value).collect();
    assert_eq!(values, [Some(10.0), Some(12.5), None]);

    assert_eq!(dashboard.closes.len(), 5);
    assert_eq!(dashboard.moving_averages.len(), 1);
    let ma = &dashboard.moving_averages[0];
    assert_eq!(ma.window, 3);
    let ma_values: Vec<_> = ma.series.points().iter().map(|p| p.value).collect();
    assert_eq!(ma_values, [None, None, Some(20.0), Some(30.0), Some(40.0)]);
}

#[test]
fn insufficient_statement_overlap_downgrades_roe_to_a_warning() {
    // NODATA has net income but no equity row at all.
    let source = snapshot_source();

    let dashboard = build_dashboard(
        &source,
        &symbol("NODATA"),
        period("2024-01-01"),
        period("2024-01-05"),
        DEFAULT_LOOKBACK,
        &[],
    )
    .expect("report must stay usable");

    assert!(dashboard.roe_percent.is_none());
    assert!(
        dashboard
            .warnings
            .iter()
            .any(|warning| warning.contains("return on equity")),
        "warnings must explain the missing section: {:?}",
        dashboard.warnings
    );
}

#[test]
fn an_invalid_moving_average_window_fails_the_report() {
    let source = snapshot_source();

    let error = build_dashboard(
        &source,
        &symbol("AAPL"),
        period("2024-01-01"),
        period("2024-01-05"),
        DEFAULT_LOOKBACK,
        &[0],
    )
    .expect_err("must fail");

    match error {
        ReportError::Metrics(error) => {
            assert_eq!(error.kind(), MetricsErrorKind::InvalidParameter)
        }
        ReportError::Fetch(error) => panic!("unexpected fetch error: {error}"),
    }
}

#[test]
fn an_empty_price_range_keeps_the_report_usable_with_a_warning() {
    let source = snapshot_source();

    let dashboard = build_dashboard(
        &source,
        &symbol("AAPL"),
        period("2030-01-01"),
        period("2030-12-31"),
        DEFAULT_LOOKBACK,
        &[20, 50],
    )
    .expect("report must stay usable");

    assert!(dashboard.closes.is_empty());
    assert!(dashboard.moving_averages.is_empty());
    assert!(
        dashboard
            .warnings
            .iter()
            .any(|warning| warning.contains("moving averages")),
        "warnings must mention skipped averages: {:?}",
        dashboard.warnings
    );
}
