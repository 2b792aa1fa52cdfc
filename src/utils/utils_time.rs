use chrono::Utc;

/// Source of "now" in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Milliseconds between two readings, never negative even if the wall clock stepped back.
pub fn elapsed_ms(start_ms: i64, now_ms: i64) -> i64 {
    now_ms.saturating_sub(start_ms).max(0)
}
