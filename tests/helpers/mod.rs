#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use script_console::console::{HostObject, Level, ScriptLogger};
use script_console::utils::Clock;
use script_console::Console;
use tracing_subscriber::fmt::MakeWriter;

// ========================================
// CAPTURE LOGGER
// ========================================

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub cause: Option<String>,
}

#[derive(Default)]
pub struct CaptureLogger {
    records: Mutex<Vec<Record>>,
}

impl CaptureLogger {
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .iter()
            .map(|r| (r.level, r.message.clone()))
            .collect()
    }

    pub fn last(&self) -> Option<(Level, String)> {
        self.lines().pop()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn push(&self, level: Level, message: &str, cause: Option<String>) {
        self.records.lock().push(Record {
            level,
            message: message.to_string(),
            cause,
        });
    }
}

impl ScriptLogger for CaptureLogger {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message, None);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message, None);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message, None);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message, None);
    }

    fn trace(&self, message: &str, cause: Option<&dyn HostObject>) {
        self.push(Level::Trace, message, cause.map(|c| c.to_display_string()));
    }
}

// ========================================
// MANUAL CLOCK
// ========================================

#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn at(ms: i64) -> Self {
        Self { now: AtomicI64::new(ms) }
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: i64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

// ========================================
// HOST OBJECTS
// ========================================

#[derive(Debug)]
pub struct HostThing(pub &'static str);

impl HostObject for HostThing {
    fn to_display_string(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Debug)]
pub struct HostError {
    pub class: &'static str,
    pub message: &'static str,
}

impl HostObject for HostError {
    fn to_display_string(&self) -> String {
        format!("{}: {}", self.class, self.message)
    }

    fn localized_message(&self) -> Option<String> {
        Some(self.message.to_string())
    }
}

// ========================================
// TRACING CAPTURE
// ========================================

/// In-memory writer for a fmt subscriber.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a thread-local fmt subscriber and return everything it printed.
pub fn capture_tracing(f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

/// The single captured line containing `needle`.
pub fn line_with<'a>(output: &'a str, needle: &str) -> &'a str {
    let matches: Vec<&str> = output.lines().filter(|l| l.contains(needle)).collect();
    assert_eq!(matches.len(), 1, "expected one line with {:?} in:\n{}", needle, output);
    matches[0]
}

// ========================================
// SETUP
// ========================================

pub fn setup_console() -> (Console, Arc<CaptureLogger>, Arc<ManualClock>) {
    let logger = Arc::new(CaptureLogger::default());
    let clock = Arc::new(ManualClock::at(1_700_000_000_000));
    let console = Console::new(logger.clone(), clock.clone());
    (console, logger, clock)
}
