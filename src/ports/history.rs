//! History port: Contract for the session's record store.

use chrono::{DateTime, Utc};

use crate::domain::{ComputedMetrics, HistoryRecord, Measurement};

/// Append-only store of saved measurement snapshots.
///
/// One instance per session: a store is owned by a single session's
/// execution context and never shared between sessions. Records are
/// immutable once appended; the only mutations are `append` and `clear`.
///
/// Operations are infallible. The timestamp is supplied by the caller so
/// records stay deterministic under test.
pub trait HistoryStore {
    /// Build a [`HistoryRecord`] from the inputs, append it, and return the
    /// stored record. The store grows by exactly one element; nothing else
    /// is mutated.
    fn append(
        &mut self,
        name: &str,
        measurement: &Measurement,
        computed: &ComputedMetrics,
        now: DateTime<Utc>,
    ) -> HistoryRecord;

    /// All records in append order.
    fn list(&self) -> &[HistoryRecord];

    /// Remove all records. Clearing an empty store is a no-op.
    fn clear(&mut self);

    /// Number of stored records.
    fn size(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
