//! Trend summarization over the session history.
//!
//! Feeds the history screen's line charts and aggregate figures.

use crate::domain::HistoryRecord;

/// Aggregate statistics and chartable series for the saved records.
#[derive(Debug, Clone, Default)]
pub struct TrendSummary {
    /// Number of records summarized
    pub count: usize,

    /// (record index, bmi) points in append order
    pub bmi_series: Vec<(f64, f64)>,

    /// (record index, whr) points in append order
    pub whr_series: Vec<(f64, f64)>,

    pub bmi_min: f64,
    pub bmi_max: f64,
    pub bmi_mean: f64,

    pub whr_min: f64,
    pub whr_max: f64,
    pub whr_mean: f64,
}

impl TrendSummary {
    /// Summarize records in append order.
    #[must_use]
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let bmi_series: Vec<(f64, f64)> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.bmi))
            .collect();
        let whr_series: Vec<(f64, f64)> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.whr))
            .collect();

        let (bmi_min, bmi_max, bmi_sum) = fold_stats(bmi_series.iter().map(|(_, y)| *y));
        let (whr_min, whr_max, whr_sum) = fold_stats(whr_series.iter().map(|(_, y)| *y));
        let count = records.len();

        Self {
            count,
            bmi_series,
            whr_series,
            bmi_min,
            bmi_max,
            bmi_mean: bmi_sum / count as f64,
            whr_min,
            whr_max,
            whr_mean: whr_sum / count as f64,
        }
    }

    /// Whether a trend chart is meaningful (at least two records).
    #[must_use]
    pub fn has_trend(&self) -> bool {
        self.count >= 2
    }
}

fn fold_stats(values: impl Iterator<Item = f64>) -> (f64, f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY, 0.0), |(min, max, sum), v| {
        (min.min(v), max.max(v), sum + v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute, ComputedMetrics, Measurement, Sex};
    use chrono::Utc;

    fn record_for(weight_kg: f64) -> HistoryRecord {
        let measurement = Measurement {
            age: 30,
            sex: Sex::Male,
            height_cm: 170.0,
            weight_kg,
            waist_cm: 80.0,
            hip_cm: 100.0,
        };
        let computed: ComputedMetrics = compute(&measurement).expect("Should compute");
        HistoryRecord::new("Ana", &measurement, &computed, Utc::now())
    }

    #[test]
    fn test_empty_history_has_no_trend() {
        let summary = TrendSummary::from_records(&[]);
        assert_eq!(summary.count, 0);
        assert!(!summary.has_trend());
        assert!(summary.bmi_series.is_empty());
    }

    #[test]
    fn test_single_record_has_no_trend() {
        let summary = TrendSummary::from_records(&[record_for(70.0)]);
        assert_eq!(summary.count, 1);
        assert!(!summary.has_trend());
    }

    #[test]
    fn test_series_and_stats() {
        let records = vec![record_for(70.0), record_for(75.0)];
        let summary = TrendSummary::from_records(&records);

        assert!(summary.has_trend());
        assert_eq!(summary.bmi_series.len(), 2);
        assert!((summary.bmi_series[0].0 - 0.0).abs() < f64::EPSILON);
        assert!((summary.bmi_series[1].0 - 1.0).abs() < f64::EPSILON);

        // 70 kg -> 24.22, 75 kg -> 25.95 at 170 cm (rounded in the record).
        assert!((summary.bmi_min - 24.22).abs() < 1e-9);
        assert!((summary.bmi_max - 25.95).abs() < 1e-9);
        assert!((summary.bmi_mean - (24.22 + 25.95) / 2.0).abs() < 1e-9);

        // Same waist/hip in both records, so the whr band is flat.
        assert!((summary.whr_min - summary.whr_max).abs() < 1e-9);
    }
}
