//! In-memory history adapter.
//!
//! The session's history lives only for the lifetime of the process; there
//! is deliberately no on-disk persistence.

use chrono::{DateTime, Utc};

use crate::domain::{ComputedMetrics, HistoryRecord, Measurement};
use crate::ports::HistoryStore;

/// Vec-backed [`HistoryStore`].
///
/// Insertion order is chronological append order.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: Vec<HistoryRecord>,
}

impl InMemoryHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(
        &mut self,
        name: &str,
        measurement: &Measurement,
        computed: &ComputedMetrics,
        now: DateTime<Utc>,
    ) -> HistoryRecord {
        let record = HistoryRecord::new(name, measurement, computed, now);
        self.records.push(record.clone());
        record
    }

    fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn size(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute, Sex, ANONYMOUS_NAME};

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
    fn test_append_grows_by_exactly_one() {
        let mut history = InMemoryHistory::new();
        let (measurement, computed) = sample();
        assert!(history.is_empty());

        let record = history.append("", &measurement, &computed, Utc::now());
        assert_eq!(history.size(), 1);
        assert_eq!(record.name, ANONYMOUS_NAME);

        history.append("Ana", &measurement, &computed, Utc::now());
        assert_eq!(history.size(), 2);
    }

    #[test]
    fn test_list_ends_with_just_created_record() {
        let mut history = InMemoryHistory::new();
        let (measurement, computed) = sample();

        history.append("first", &measurement, &computed, Utc::now());
        let last = history.append("second", &measurement, &computed, Utc::now());

        let records = history.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "first");
        assert_eq!(records[1].name, last.name);
        assert!((records[1].bmi - last.bmi).abs() < 1e-9);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut history = InMemoryHistory::new();
        let (measurement, computed) = sample();
        history.append("Ana", &measurement, &computed, Utc::now());

        history.clear();
        assert_eq!(history.size(), 0);
        assert!(history.list().is_empty());

        // Clearing again has the same observable effect.
        history.clear();
        assert_eq!(history.size(), 0);
        assert!(history.list().is_empty());
    }
}
