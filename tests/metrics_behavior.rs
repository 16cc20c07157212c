//! Behavior tests for statement alignment and ratio derivation.
//!
//! These verify HOW the core treats gaps, disjoint cadences, zero
//! denominators, and short windows, not just the happy path.

use finratio_tests::{
    align_statements, daily_closes, fiscal_year_end, moving_average, return_on_equity,
    to_percentage, yearly_row, yearly_row_opt, MetricsError, MetricsErrorKind, StatementMetric,
    TimeSeries, DEFAULT_LOOKBACK, ROE_TAG,
};

// =============================================================================
// Alignment: period intersection and truncation
// =============================================================================

#[test]
fn when_periods_are_disjoint_alignment_reports_insufficient_data() {
    // Given: statement rows with no reporting period in common
    let income = yearly_row(StatementMetric::NetIncome, &[(2018, 1.0), (2019, 2.0)]);
    let equity = yearly_row(
        StatementMetric::StockholderEquity,
        &[(2021, 10.0), (2022, 20.0)],
    );

    // When: they are aligned
    let error = align_statements(&income, &equity, DEFAULT_LOOKBACK).expect_err("must fail");

    // Then: the caller can tell "no overlap" apart from an empty selection
    assert_eq!(error.kind(), MetricsErrorKind::InsufficientData);
    assert!(matches!(error, MetricsError::NoCommonPeriods { .. }));
}

#[test]
fn when_periods_overlap_alignment_keeps_the_sorted_intersection() {
    // Given: quarterly-ish gaps on one side, annual cadence on the other
    let income = yearly_row(
        StatementMetric::NetIncome,
        &[(2020, 1.0), (2021, 2.0), (2023, 3.0)],
    );
    let equity = yearly_row(
        StatementMetric::StockholderEquity,
        &[(2021, 10.0), (2022, 20.0), (2023, 30.0)],
    );

    // When
    let pair = align_statements(&income, &equity, DEFAULT_LOOKBACK).expect("must align");

    // Then: exactly the common periods, ascending
    let periods: Vec<_> = pair.periods().collect();
    assert_eq!(periods, [fiscal_year_end(2021), fiscal_year_end(2023)]);
}

#[test]
fn when_overlap_exceeds_lookback_only_the_most_recent_periods_survive() {
    let years: Vec<(i32, f64)> = (2015..=2023).map(|year| (year, year as f64)).collect();
    let income = yearly_row(StatementMetric::NetIncome, &years);
    let equity = yearly_row(StatementMetric::StockholderEquity, &years);

    let pair = align_statements(&income, &equity, 3).expect("must align");

    let periods: Vec<_> = pair.periods().collect();
    assert_eq!(
        periods,
        [
            fiscal_year_end(2021),
            fiscal_year_end(2022),
            fiscal_year_end(2023)
        ]
    );
}

#[test]
fn when_overlap_is_smaller_than_lookback_all_periods_survive_without_padding() {
    let income = yearly_row(StatementMetric::NetIncome, &[(2022, 1.0), (2023, 2.0)]);
    let equity = yearly_row(
        StatementMetric::StockholderEquity,
        &[(2022, 10.0), (2023, 20.0)],
    );

    let pair = align_statements(&income, &equity, DEFAULT_LOOKBACK).expect("must align");

    assert_eq!(pair.len(), 2);
}

#[test]
fn when_either_input_is_empty_alignment_reports_insufficient_data() {
    let populated = yearly_row(StatementMetric::NetIncome, &[(2022, 1.0)]);
    let empty = finratio_tests::StatementRow::new(
        finratio_tests::symbol("AAPL"),
        StatementMetric::StockholderEquity,
        TimeSeries::empty(),
    );

    let forward = align_statements(&populated, &empty, DEFAULT_LOOKBACK).expect_err("must fail");
    assert_eq!(forward.kind(), MetricsErrorKind::InsufficientData);

    let backward = align_statements(&empty, &populated, DEFAULT_LOOKBACK).expect_err("must fail");
    assert_eq!(backward.kind(), MetricsErrorKind::InsufficientData);
}

#[test]
fn when_lookback_is_zero_alignment_rejects_the_parameter() {
    let income = yearly_row(StatementMetric::NetIncome, &[(2022, 1.0)]);
    let equity = yearly_row(StatementMetric::StockholderEquity, &[(2022, 10.0)]);

    let error = align_statements(&income, &equity, 0).expect_err("must fail");
    assert_eq!(error.kind(), MetricsErrorKind::InvalidParameter);
}

// =============================================================================
// Ratio: ROE derivation and undefined marking
// =============================================================================

#[test]
fn ratio_preserves_length_and_period_keys() {
    let income = yearly_row(
        StatementMetric::NetIncome,
        &[(2021, 100.0), (2022, 150.0), (2023, -20.0)],
    );
    let equity = yearly_row(
        StatementMetric::StockholderEquity,
        &[(2021, 1000.0), (2022, 1200.0), (2023, 0.0)],
    );

    let pair = align_statements(&income, &equity, DEFAULT_LOOKBACK).expect("must align");
    let roe = return_on_equity(&pair);

    assert_eq!(roe.tag, ROE_TAG);
    assert_eq!(roe.series.len(), pair.len());
    let ratio_periods: Vec<_> = roe.series.periods().collect();
    let pair_periods: Vec<_> = pair.periods().collect();
    assert_eq!(ratio_periods, pair_periods);
}

#[test]
fn zero_denominator_yields_undefined_never_infinity() {
    // The worked example: ROE = [0.10, 0.125, undefined]
    let income = yearly_row(
        StatementMetric::NetIncome,
        &[(2021, 100.0), (2022, 150.0), (2023, -20.0)],
    );
    let equity = yearly_row(
        StatementMetric::StockholderEquity,
        &[(2021, 1000.0), (2022, 1200.0), (2023, 0.0)],
    );

    let pair = align_statements(&income, &equity, DEFAULT_LOOKBACK).expect("must align");
    let roe = return_on_equity(&pair);

    let values: Vec<_> = roe.series.points().iter().map(|p| p.value).collect();
    assert_eq!(values, [Some(0.10), Some(0.125), None]);
}

#[test]
fn absent_denominator_entry_is_undefined_but_keeps_its_period() {
    let income = yearly_row(StatementMetric::NetIncome, &[(2021, 100.0), (2022, 150.0)]);
    let equity = yearly_row_opt(
        StatementMetric::StockholderEquity,
        &[(2021, Some(1000.0)), (2022, None)],
    );

    let pair = align_statements(&income, &equity, DEFAULT_LOOKBACK).expect("must align");
    let roe = return_on_equity(&pair);

    assert_eq!(roe.series.len(), 2);
    assert_eq!(roe.series.points()[1].period, fiscal_year_end(2022));
    assert_eq!(roe.series.points()[1].value, None);
}

#[test]
fn percentage_scales_defined_entries_and_passes_undefined_through() {
    let income = yearly_row(StatementMetric::NetIncome, &[(2021, 100.0), (2022, 150.0)]);
    let equity = yearly_row(
        StatementMetric::StockholderEquity,
        &[(2021, 1000.0), (2022, 0.0)],
    );

    let pair = align_statements(&income, &equity, DEFAULT_LOOKBACK).expect("must align");
    let percent = to_percentage(&return_on_equity(&pair));

    let values: Vec<_> = percent.series.points().iter().map(|p| p.value).collect();
    assert_eq!(values, [Some(10.0), None]);
    assert_eq!(percent.tag, ROE_TAG);
}

// =============================================================================
// Moving average: trailing-window convention
// =============================================================================

#[test]
fn moving_average_matches_the_trailing_window_convention() {
    // The worked example: MA3 over [10,20,30,40,50]
    let closes = daily_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);

    let averaged = moving_average(&closes, 3).expect("must compute");

    assert_eq!(averaged.len(), closes.len());
    let values: Vec<_> = averaged.points().iter().map(|p| p.value).collect();
    assert_eq!(values, [None, None, Some(20.0), Some(30.0), Some(40.0)]);
}

#[test]
fn moving_average_never_shortens_the_leading_window() {
    let closes = daily_closes(&[10.0, 20.0]);

    let averaged = moving_average(&closes, 5).expect("must compute");

    assert!(averaged.points().iter().all(|p| p.value.is_none()));
    assert_eq!(averaged.len(), 2);
}

#[test]
fn moving_average_with_zero_window_is_rejected() {
    let closes = daily_closes(&[10.0, 20.0, 30.0]);

    let error = moving_average(&closes, 0).expect_err("must fail");
    assert_eq!(error.kind(), MetricsErrorKind::InvalidParameter);
    assert!(matches!(
        error,
        MetricsError::InvalidParameter {
            param: "window",
            value: 0
        }
    ));
}

#[test]
fn moving_average_of_an_empty_series_is_empty_not_an_error() {
    let averaged = moving_average(&TimeSeries::empty(), 20).expect("must compute");
    assert!(averaged.is_empty());
}

#[test]
fn moving_average_skips_windows_containing_undefined_entries() {
    use finratio_tests::{period, SeriesPoint};

    let closes = TimeSeries::new(vec![
        SeriesPoint::defined(period("2024-01-01"), 10.0),
        SeriesPoint::undefined(period("2024-01-02")),
        SeriesPoint::defined(period("2024-01-03"), 30.0),
        SeriesPoint::defined(period("2024-01-04"), 40.0),
    ])
    .expect("series must be valid");

    let averaged = moving_average(&closes, 2).expect("must compute");

    let values: Vec<_> = averaged.points().iter().map(|p| p.value).collect();
    assert_eq!(values, [None, None, None, Some(35.0)]);
}
