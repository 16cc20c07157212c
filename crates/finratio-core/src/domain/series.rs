use serde::{Deserialize, Serialize};

use crate::{Period, ValidationError};

/// Single observation in a [`TimeSeries`].
///
/// `value: None` marks an undefined entry, distinct from a defined `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: Period,
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub const fn defined(period: Period, value: f64) -> Self {
        Self {
            period,
            value: Some(value),
        }
    }

    pub const fn undefined(period: Period) -> Self {
        Self {
            period,
            value: None,
        }
    }
}

/// Ordered time-indexed series.
///
/// Invariant: periods strictly increasing, no duplicates, and every defined
/// value finite. Enforced on construction and on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SeriesPoint>", into = "Vec<SeriesPoint>")]
pub struct TimeSeries(Vec<SeriesPoint>);

impl TimeSeries {
    pub fn new(points: Vec<SeriesPoint>) -> Result<Self, ValidationError> {
        for pair in points.windows(2) {
            if pair[1].period == pair[0].period {
                return Err(ValidationError::DuplicatePeriod {
                    period: pair[1].period.to_string(),
                });
            }
            if pair[1].period < pair[0].period {
                return Err(ValidationError::UnorderedPeriod {
                    period: pair[1].period.to_string(),
                });
            }
        }

        if let Some(point) = points
            .iter()
            .find(|point| point.value.is_some_and(|value| !value.is_finite()))
        {
            return Err(ValidationError::NonFiniteValue {
                period: point.period.to_string(),
            });
        }

        Ok(Self(points))
    }

    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build from (period, value) pairs with every value defined.
    pub fn from_values(pairs: Vec<(Period, f64)>) -> Result<Self, ValidationError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(period, value)| SeriesPoint::defined(period, value))
                .collect(),
        )
    }

    /// Invariant must already hold; for derived series whose periods come
    /// from an input that was validated on construction.
    pub(crate) fn from_points_unchecked(points: Vec<SeriesPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.0.iter().map(|point| point.period)
    }

    /// Value at `period`; outer `None` means the period is not in the series.
    pub fn value_at(&self, period: Period) -> Option<Option<f64>> {
        self.0
            .binary_search_by(|point| point.period.cmp(&period))
            .ok()
            .map(|index| self.0[index].value)
    }
}

impl TryFrom<Vec<SeriesPoint>> for TimeSeries {
    type Error = ValidationError;

    fn try_from(points: Vec<SeriesPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<TimeSeries> for Vec<SeriesPoint> {
    fn from(series: TimeSeries) -> Self {
        series.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(input: &str) -> Period {
        Period::parse(input).expect("test period must parse")
    }

    #[test]
    fn rejects_duplicate_periods() {
        let err = TimeSeries::new(vec![
            SeriesPoint::defined(period("2022-12-31"), 1.0),
            SeriesPoint::defined(period("2022-12-31"), 2.0),
        ])
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::DuplicatePeriod { .. }));
    }

    #[test]
    fn rejects_unordered_periods() {
        let err = TimeSeries::new(vec![
            SeriesPoint::defined(period("2023-12-31"), 1.0),
            SeriesPoint::defined(period("2022-12-31"), 2.0),
        ])
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::UnorderedPeriod { .. }));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = TimeSeries::new(vec![SeriesPoint::defined(
            period("2022-12-31"),
            f64::INFINITY,
        )])
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { .. }));
    }

    #[test]
    fn keeps_undefined_distinct_from_zero() {
        let series = TimeSeries::new(vec![
            SeriesPoint::defined(period("2021-12-31"), 0.0),
            SeriesPoint::undefined(period("2022-12-31")),
        ])
        .expect("must be valid");

        assert_eq!(series.value_at(period("2021-12-31")), Some(Some(0.0)));
        assert_eq!(series.value_at(period("2022-12-31")), Some(None));
        assert_eq!(series.value_at(period("2023-12-31")), None);
    }

    #[test]
    fn deserialization_revalidates_ordering() {
        let raw = r#"[
            {"period": "2023-12-31", "value": 2.0},
            {"period": "2021-12-31", "value": 1.0}
        ]"#;
        let result: Result<TimeSeries, _> = serde_json::from_str(raw);
        assert!(result.is_err(), "unordered payload must not deserialize");
    }
}
