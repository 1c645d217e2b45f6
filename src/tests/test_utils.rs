//! Shared test utilities for worker tests

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::{Precision, TimeSource};

/// Clock that only moves when told to. `sleep` advances it by one unit.
///
/// Clones share the same reading, so a test can keep a handle after moving
/// a clone into a worker.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
    sleeps: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now)),
            sleeps: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, units: i64) {
        self.now.fetch_add(units, Ordering::SeqCst);
    }

    pub fn get(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    pub fn sleeps(&self) -> u64 {
        self.sleeps.load(Ordering::SeqCst)
    }
}

impl TimeSource for ManualClock {
    fn now(&self, _precision: Precision) -> i64 {
        self.get()
    }

    fn sleep(&self, _precision: Precision) {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        self.advance(1);
    }
}

/// Clock replaying a fixed list of readings, then repeating the last one
#[derive(Debug)]
pub struct ScriptedClock {
    readings: Mutex<VecDeque<i64>>,
    last: AtomicI64,
    reads: AtomicU64,
}

impl ScriptedClock {
    pub fn new(readings: impl IntoIterator<Item = i64>) -> Self {
        let readings: VecDeque<i64> = readings.into_iter().collect();
        let first = readings.front().copied().unwrap_or_default();
        Self {
            readings: Mutex::new(readings),
            last: AtomicI64::new(first),
            reads: AtomicU64::new(0),
        }
    }

    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TimeSource for ScriptedClock {
    fn now(&self, _precision: Precision) -> i64 {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.readings.lock().unwrap().pop_front() {
            Some(reading) => {
                self.last.store(reading, Ordering::SeqCst);
                reading
            }
            None => self.last.load(Ordering::SeqCst),
        }
    }

    fn sleep(&self, _precision: Precision) {}
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[i64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert IDs strictly increase in the order they were produced
pub fn assert_ids_monotonic(ids: &[i64]) {
    for pair in ids.windows(2) {
        assert!(
            pair[1] > pair[0],
            "ID {} is not greater than previous ID {}",
            pair[1],
            pair[0]
        );
    }
}

/// Assert collection has expected unique count and is non-negative
pub fn assert_unique_and_positive(ids: &[i64], expected_count: usize) {
    assert_unique_ids(ids, expected_count);
    assert!(ids.iter().all(|&id| id >= 0), "Negative ID produced");
}
