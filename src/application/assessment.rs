//! Assessment service: Computes metrics and manages the session history.

use chrono::{DateTime, Utc};

use crate::domain::{compute, ComputedMetrics, HistoryRecord, Measurement};
use crate::ports::HistoryStore;
use crate::HealthtrackError;

/// Service owning one session's history and running computations against it.
///
/// The store is owned, not shared: each session constructs its own service,
/// so histories can never leak between sessions.
pub struct AssessmentService<H>
where
    H: HistoryStore,
{
    history: H,
}

impl<H> AssessmentService<H>
where
    H: HistoryStore,
{
    /// Create a service around a history store (normally empty).
    pub fn new(history: H) -> Self {
        Self { history }
    }

    /// Compute BMI and waist-to-hip ratio for a measurement.
    ///
    /// A failed computation leaves the history untouched; nothing is written
    /// until the caller explicitly saves.
    ///
    /// # Errors
    /// Returns error if the measurement would divide by zero.
    pub fn assess(&self, measurement: &Measurement) -> Result<ComputedMetrics, HealthtrackError> {
        let computed = compute(measurement)?;

        tracing::info!(
            bmi = computed.bmi,
            category = %computed.bmi_category,
            whr = computed.whr,
            risk = %computed.whr_risk,
            "computed health metrics"
        );

        Ok(computed)
    }

    /// Append a snapshot of a computed result to the session history.
    ///
    /// The name is deliberately not logged.
    pub fn save(
        &mut self,
        name: &str,
        measurement: &Measurement,
        computed: &ComputedMetrics,
        now: DateTime<Utc>,
    ) -> HistoryRecord {
        let record = self.history.append(name, measurement, computed, now);
        tracing::info!(total = self.history.size(), "saved measurement to history");
        record
    }

    /// All saved records in append order.
    #[must_use]
    pub fn history(&self) -> &[HistoryRecord] {
        self.history.list()
    }

    /// Number of saved records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.history.size()
    }

    /// Discard every saved record.
    pub fn clear_history(&mut self) {
        let discarded = self.history.size();
        self.history.clear();
        tracing::info!(discarded, "cleared measurement history");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryHistory;
    use crate::domain::{BmiCategory, Sex, WhrRisk, ANONYMOUS_NAME};

    fn create_test_service() -> AssessmentService<InMemoryHistory> {
        AssessmentService::new(InMemoryHistory::new())
    }

    fn typical() -> Measurement {
        Measurement {
            age: 30,
            sex: Sex::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            waist_cm: 80.0,
            hip_cm: 100.0,
        }
    }

    #[test]
    fn test_assess_and_save_scenario() {
        let mut service = create_test_service();
        let measurement = typical();

        let computed = service.assess(&measurement).expect("Should compute");
        assert_eq!(computed.bmi_category, BmiCategory::Normal);
        assert_eq!(computed.whr_risk, WhrRisk::Low);

        // Computation alone writes nothing.
        assert_eq!(service.record_count(), 0);

        let record = service.save("", &measurement, &computed, Utc::now());
        assert_eq!(service.record_count(), 1);
        assert_eq!(record.name, ANONYMOUS_NAME);
        assert!((record.bmi - 24.22).abs() < 1e-9);
        assert!((record.whr - 0.80).abs() < 1e-9);
    }

    #[test]
    fn test_failed_compute_never_touches_history() {
        let service = create_test_service();
        let broken = Measurement {
            height_cm: 0.0,
            ..typical()
        };

        assert!(service.assess(&broken).is_err());
        assert_eq!(service.record_count(), 0);
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_clear_history() {
        let mut service = create_test_service();
        let measurement = typical();
        let computed = service.assess(&measurement).expect("Should compute");

        service.save("Ana", &measurement, &computed, Utc::now());
        service.save("Bruno", &measurement, &computed, Utc::now());
        assert_eq!(service.record_count(), 2);

        service.clear_history();
        assert_eq!(service.record_count(), 0);

        service.clear_history();
        assert_eq!(service.record_count(), 0);
    }
}
