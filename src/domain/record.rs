//! Saved measurement snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BmiCategory, ComputedMetrics, Measurement, WhrRisk};

/// Name stored when the user leaves the name field blank.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// One immutable saved snapshot of a computation plus metadata.
///
/// The timestamp stays a structured value so records remain machine
/// comparable; formatting happens only at the presentation boundary via
/// [`HistoryRecord::display_timestamp`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Display name ("Anonymous" if none was given)
    pub name: String,

    /// When the record was appended
    pub recorded_at: DateTime<Utc>,

    /// The measurements this result was computed from
    pub measurement: Measurement,

    /// Body mass index, rounded to 2 decimal places
    pub bmi: f64,

    /// WHO band for the BMI value
    pub bmi_category: BmiCategory,

    /// Waist-to-hip ratio, rounded to 2 decimal places
    pub whr: f64,

    /// Cardiovascular risk band for the ratio
    pub whr_risk: WhrRisk,
}

impl HistoryRecord {
    /// Build a record from a measurement and its computed metrics.
    ///
    /// Blank (empty or whitespace-only) names are stored as "Anonymous";
    /// any other name is preserved verbatim.
    #[must_use]
    pub fn new(
        name: &str,
        measurement: &Measurement,
        computed: &ComputedMetrics,
        now: DateTime<Utc>,
    ) -> Self {
        let name = if name.trim().is_empty() {
            ANONYMOUS_NAME.to_string()
        } else {
            name.to_string()
        };

        Self {
            name,
            recorded_at: now,
            measurement: measurement.clone(),
            bmi: round2(computed.bmi),
            bmi_category: computed.bmi_category,
            whr: round2(computed.whr),
            whr_risk: computed.whr_risk,
        }
    }

    /// Timestamp formatted for display ("DD/MM/YYYY HH:MM").
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        self.recorded_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute, Sex};
    use chrono::TimeZone;

    fn sample() -> (Measurement, ComputedMetrics) {
        let measurement = Measurement {
            age: 30,
            sex: Sex::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            waist_cm: 80.0,
            hip_cm: 100.0,
        };
        let computed = compute(&measurement).expect("Should compute");
        (measurement, computed)
    }

    #[test]
    fn test_indices_are_rounded_to_two_decimals() {
        let (measurement, computed) = sample();
        let record = HistoryRecord::new("Ana", &measurement, &computed, Utc::now());

        assert!((record.bmi - 24.22).abs() < 1e-9);
        assert!((record.whr - 0.80).abs() < 1e-9);
        assert_eq!(record.bmi_category, computed.bmi_category);
        assert_eq!(record.whr_risk, computed.whr_risk);
    }

    #[test]
    fn test_blank_name_becomes_anonymous() {
        let (measurement, computed) = sample();

        let blank = HistoryRecord::new("", &measurement, &computed, Utc::now());
        assert_eq!(blank.name, ANONYMOUS_NAME);

        let whitespace = HistoryRecord::new("   ", &measurement, &computed, Utc::now());
        assert_eq!(whitespace.name, ANONYMOUS_NAME);

        let named = HistoryRecord::new("Ana Silva", &measurement, &computed, Utc::now());
        assert_eq!(named.name, "Ana Silva");
    }

    #[test]
    fn test_display_timestamp_format() {
        let (measurement, computed) = sample();
        let now = Utc
            .with_ymd_and_hms(2026, 8, 6, 14, 5, 30)
            .single()
            .expect("Valid timestamp");

        let record = HistoryRecord::new("Ana", &measurement, &computed, now);
        assert_eq!(record.display_timestamp(), "06/08/2026 14:05");
        // The structured value keeps full precision.
        assert_eq!(record.recorded_at, now);
    }
}
