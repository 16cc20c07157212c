//! Statement alignment: restrict two irregularly-sampled statement rows to
//! their common reporting periods.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{MetricsError, Period, StatementMetric, StatementRow, TimeSeries};

/// Default number of most-recent aligned periods kept by [`align_statements`].
pub const DEFAULT_LOOKBACK: usize = 5;

/// One reporting period present in both aligned statement rows.
///
/// Either side may still be undefined: alignment is by period key, not by
/// value presence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignedPoint {
    pub period: Period,
    pub numerator: Option<f64>,
    pub denominator: Option<f64>,
}

/// Two statement rows restricted to their common periods, ascending.
///
/// Only constructible through [`align_statements`], which guarantees a
/// non-empty, sorted, duplicate-free period list shared by both sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedPair {
    numerator: StatementMetric,
    denominator: StatementMetric,
    points: Vec<AlignedPoint>,
}

impl AlignedPair {
    pub fn numerator_metric(&self) -> StatementMetric {
        self.numerator
    }

    pub fn denominator_metric(&self) -> StatementMetric {
        self.denominator
    }

    pub fn points(&self) -> &[AlignedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a pair produced by [`align_statements`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.points.iter().map(|point| point.period)
    }
}

/// Align two statement rows onto their common reporting periods.
///
/// Keeps at most the `max_periods` most recent common periods, ordered
/// ascending. Fewer common periods than `max_periods` is not an error;
/// no padding is applied. An empty input or an empty intersection is an
/// insufficient-data failure so callers can tell "no overlap" apart from
/// a deliberate zero-length selection.
pub fn align_statements(
    numerator: &StatementRow,
    denominator: &StatementRow,
    max_periods: usize,
) -> Result<AlignedPair, MetricsError> {
    if max_periods == 0 {
        return Err(MetricsError::InvalidParameter {
            param: "max_periods",
            value: max_periods,
        });
    }

    if numerator.series.is_empty() {
        return Err(MetricsError::EmptySeries {
            metric: numerator.metric.to_string(),
        });
    }
    if denominator.series.is_empty() {
        return Err(MetricsError::EmptySeries {
            metric: denominator.metric.to_string(),
        });
    }

    let mut points = intersect(&numerator.series, &denominator.series);
    if points.is_empty() {
        return Err(MetricsError::NoCommonPeriods {
            numerator: numerator.metric.to_string(),
            denominator: denominator.metric.to_string(),
        });
    }

    if points.len() > max_periods {
        points.drain(..points.len() - max_periods);
    }

    Ok(AlignedPair {
        numerator: numerator.metric,
        denominator: denominator.metric,
        points,
    })
}

// Two-pointer merge; both inputs are ascending by construction.
fn intersect(left: &TimeSeries, right: &TimeSeries) -> Vec<AlignedPoint> {
    let (left, right) = (left.points(), right.points());
    let mut points = Vec::with_capacity(left.len().min(right.len()));

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].period.cmp(&right[j].period) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                points.push(AlignedPoint {
                    period: left[i].period,
                    numerator: left[i].value,
                    denominator: right[j].value,
                });
                i += 1;
                j += 1;
            }
        }
    }

    points
}
