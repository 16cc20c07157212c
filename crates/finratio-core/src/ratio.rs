//! Ratio derivation over aligned statement pairs, plus trailing moving
//! averages over price series.

use serde::Serialize;

use crate::{AlignedPair, MetricsError, SeriesPoint, TimeSeries};

/// Provenance tag used by [`return_on_equity`].
pub const ROE_TAG: &str = "ROE";

/// A computed ratio series carrying its provenance tag for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioSeries {
    pub tag: String,
    pub series: TimeSeries,
}

/// Compute numerator / denominator for every aligned period.
///
/// Entries with an absent side, a zero denominator, or a non-finite
/// quotient are undefined; the period key is always retained so the
/// output stays chartable against other series.
pub fn compute_ratio(pair: &AlignedPair, tag: impl Into<String>) -> RatioSeries {
    let points = pair
        .points()
        .iter()
        .map(|point| SeriesPoint {
            period: point.period,
            value: divide(point.numerator, point.denominator),
        })
        .collect();

    RatioSeries {
        tag: tag.into(),
        // Periods come from an AlignedPair, already ascending and unique.
        series: TimeSeries::from_points_unchecked(points),
    }
}

/// Return on equity: net income over stockholder equity.
pub fn return_on_equity(pair: &AlignedPair) -> RatioSeries {
    compute_ratio(pair, ROE_TAG)
}

/// Scale defined entries to percent; undefined entries pass through.
pub fn to_percentage(ratio: &RatioSeries) -> RatioSeries {
    let points = ratio
        .series
        .points()
        .iter()
        .map(|point| SeriesPoint {
            period: point.period,
            value: point
                .value
                .map(|value| value * 100.0)
                .filter(|value| value.is_finite()),
        })
        .collect();

    RatioSeries {
        tag: ratio.tag.clone(),
        series: TimeSeries::from_points_unchecked(points),
    }
}

/// Trailing simple moving average over `window` observations.
///
/// Entry `i` is defined only when the full window `[i-window+1 ..= i]`
/// exists and every value in it is defined; leading entries are undefined
/// rather than averaged over a shorter window. An empty input yields an
/// empty output.
pub fn moving_average(series: &TimeSeries, window: usize) -> Result<TimeSeries, MetricsError> {
    if window == 0 {
        return Err(MetricsError::InvalidParameter {
            param: "window",
            value: window,
        });
    }

    let input = series.points();
    let mut points = Vec::with_capacity(input.len());
    for (index, point) in input.iter().enumerate() {
        let value = index
            .checked_sub(window - 1)
            .map(|start| &input[start..=index])
            .and_then(window_mean);
        points.push(SeriesPoint {
            period: point.period,
            value,
        });
    }

    Ok(TimeSeries::from_points_unchecked(points))
}

fn divide(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator == 0.0 {
        return None;
    }

    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}

fn window_mean(window: &[SeriesPoint]) -> Option<f64> {
    let mut sum = 0.0;
    for point in window {
        sum += point.value?;
    }
    Some(sum / window.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_is_undefined() {
        assert_eq!(divide(Some(1.0), Some(0.0)), None);
        assert_eq!(divide(Some(1.0), Some(-0.0)), None);
    }

    #[test]
    fn absent_operands_are_undefined() {
        assert_eq!(divide(None, Some(2.0)), None);
        assert_eq!(divide(Some(2.0), None), None);
    }

    #[test]
    fn defined_quotient_is_exact() {
        assert_eq!(divide(Some(100.0), Some(1000.0)), Some(0.1));
    }

    #[test]
    fn window_mean_requires_every_value() {
        let period = crate::Period::parse("2024-01-01").expect("period");
        let window = [
            SeriesPoint::defined(period, 10.0),
            SeriesPoint::undefined(period),
        ];
        assert_eq!(window_mean(&window), None);
    }
}
