//! Label-keyed state behind `count` and `time`/`timeEnd`.

use std::collections::HashMap;

use parking_lot::Mutex;

// ========================================
// COUNTERS
// ========================================

#[derive(Debug, Default)]
pub struct CounterRegistry {
    counts: Mutex<HashMap<String, u64>>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter for `label` and return its new value (first call yields 1).
    pub fn increment(&self, label: &str) -> u64 {
        let mut counts = self.counts.lock();
        let count = counts.entry(label.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.counts.lock().get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.lock().is_empty()
    }
}

// ========================================
// TIMERS
// ========================================

#[derive(Debug, Default)]
pub struct TimerRegistry {
    started: Mutex<HashMap<String, i64>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a start timestamp, replacing any earlier one.
    pub fn start(&self, label: &str, now_ms: i64) {
        self.started.lock().insert(label.to_string(), now_ms);
    }

    /// Remove the timer and hand back its start timestamp.
    pub fn finish(&self, label: &str) -> Option<i64> {
        self.started.lock().remove(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.started.lock().contains_key(label)
    }
}
