use crate::models::report::Report;
use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared in-memory report store.
///
/// Cloning hands out another handle to the same underlying map. All access
/// goes through the four operations below; the lock is held for the map
/// access only, never across an await point.
#[derive(Debug, Clone)]
pub struct ReportStore {
    inner: Arc<RwLock<StoreInner>>,
    capacity: Option<NonZeroUsize>,
}

#[derive(Debug, Default)]
struct StoreInner {
    reports: HashMap<String, Report>,
    /// ids in first-insertion order; the eviction candidates when a capacity
    /// bound is configured
    arrival: VecDeque<String>,
}

impl ReportStore {
    /// An unbounded store.
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    /// A store holding at most `capacity` reports; inserting a new id into a
    /// full store evicts the oldest-inserted entry. `None` means unbounded.
    pub fn with_capacity(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            capacity,
        }
    }

    /// Inserts or replaces the entry keyed by `report.id`. Never fails;
    /// replacing an existing id keeps its original arrival position.
    pub fn put(&self, report: Report) {
        let mut guard = self.write();
        let inner = &mut *guard;

        if !inner.reports.contains_key(&report.id) {
            if let Some(capacity) = self.capacity {
                while inner.reports.len() >= capacity.get() {
                    let Some(oldest) = inner.arrival.pop_front() else {
                        break;
                    };
                    if inner.reports.remove(&oldest).is_some() {
                        tracing::warn!("report store at capacity, evicting report {}", oldest);
                    }
                }
            }
            inner.arrival.push_back(report.id.clone());
        }

        inner.reports.insert(report.id.clone(), report);
    }

    /// The stored report for `id`, if any.
    pub fn get(&self, id: &str) -> Option<Report> {
        self.read().reports.get(id).cloned()
    }

    /// A snapshot of the entire store, keyed by id (unordered).
    pub fn all(&self) -> HashMap<String, Report> {
        self.read().reports.clone()
    }

    /// Removes the entry for `id`; returns whether it was present.
    pub fn delete(&self, id: &str) -> bool {
        let mut guard = self.write();
        let inner = &mut *guard;

        let removed = inner.reports.remove(id).is_some();
        if removed {
            inner.arrival.retain(|stored| stored != id);
        }
        removed
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, name: &str) -> Report {
        Report {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = ReportStore::new();
        let alpha = report("1", "Alpha");

        store.put(alpha.clone());

        assert_eq!(store.get("1"), Some(alpha));
        assert_eq!(store.get("2"), None);
    }

    #[test]
    fn put_overwrites_an_existing_id() {
        let store = ReportStore::new();
        store.put(report("1", "Alpha"));
        store.put(report("1", "Beta"));

        assert_eq!(store.get("1"), Some(report("1", "Beta")));
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn all_contains_exactly_the_inserted_reports() {
        let store = ReportStore::new();
        store.put(report("a", "First"));
        store.put(report("b", "Second"));

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all["a"], report("a", "First"));
        assert_eq!(all["b"], report("b", "Second"));
    }

    #[test]
    fn delete_reports_presence() {
        let store = ReportStore::new();
        store.put(report("1", "Alpha"));

        assert!(store.delete("1"));
        assert!(!store.delete("1"));
        assert_eq!(store.get("1"), None);
    }

    #[test]
    fn capacity_evicts_the_oldest_inserted_id() {
        let store = ReportStore::with_capacity(NonZeroUsize::new(2));
        store.put(report("a", "First"));
        store.put(report("b", "Second"));
        store.put(report("c", "Third"));

        assert_eq!(store.get("a"), None);
        assert_eq!(store.all().len(), 2);
        assert!(store.get("b").is_some());
        assert!(store.get("c").is_some());
    }

    #[test]
    fn overwriting_at_capacity_does_not_evict() {
        let store = ReportStore::with_capacity(NonZeroUsize::new(2));
        store.put(report("a", "First"));
        store.put(report("b", "Second"));
        store.put(report("a", "Renamed"));

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all["a"], report("a", "Renamed"));
    }

    #[test]
    fn deleted_id_reinserted_counts_as_a_fresh_arrival() {
        let store = ReportStore::with_capacity(NonZeroUsize::new(2));
        store.put(report("a", "First"));
        store.put(report("b", "Second"));
        store.delete("a");
        store.put(report("a", "Again"));
        store.put(report("c", "Third"));

        // "b" is now the oldest arrival and goes first
        assert_eq!(store.get("b"), None);
        assert!(store.get("a").is_some());
        assert!(store.get("c").is_some());
    }
}
