//! Console: console-style logging entry points for scripts.
//!
//! Every entry point formats its arguments and hands one line to a
//! `ScriptLogger`. Nothing here returns an error to the caller.

pub mod format;
pub mod invocation;
pub mod logger;
pub mod registry;
pub mod stringify;
pub mod value;

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::Config;
use crate::utils::{elapsed_ms, Clock, SystemClock};

pub use format::format;
pub use invocation::{parse_invocation, replay, Method};
pub use logger::{Level, ScriptLogger, TracingLogger};
pub use registry::{CounterRegistry, TimerRegistry};
pub use stringify::{stringify, try_stringify};
pub use value::{HostObject, ScriptValue};

static GLOBAL: OnceCell<Console> = OnceCell::new();

// ========================================
// CONSOLE
// ========================================

pub struct Console {
    logger: Arc<dyn ScriptLogger>,
    clock: Arc<dyn Clock>,
    counters: CounterRegistry,
    timers: TimerRegistry,
}

impl Console {
    pub fn new(logger: Arc<dyn ScriptLogger>, clock: Arc<dyn Clock>) -> Self {
        Self {
            logger,
            clock,
            counters: CounterRegistry::new(),
            timers: TimerRegistry::new(),
        }
    }

    /// Console backed by the wall clock.
    pub fn with_logger(logger: Arc<dyn ScriptLogger>) -> Self {
        Self::new(logger, Arc::new(SystemClock))
    }

    /// Process-wide console writing to `tracing` under the configured logger name.
    pub fn global() -> &'static Console {
        GLOBAL.get_or_init(|| {
            let name = Config::global().console.logger_name.clone();
            Self::with_logger(Arc::new(TracingLogger::new(name)))
        })
    }

    pub fn counters(&self) -> &CounterRegistry {
        &self.counters
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    // ========================================
    // LEVELED OUTPUT
    // ========================================

    pub fn debug(&self, args: &[ScriptValue]) {
        self.emit(Level::Debug, args);
    }

    pub fn info(&self, args: &[ScriptValue]) {
        self.emit(Level::Info, args);
    }

    pub fn log(&self, args: &[ScriptValue]) {
        self.info(args);
    }

    pub fn warn(&self, args: &[ScriptValue]) {
        self.emit(Level::Warn, args);
    }

    pub fn error(&self, args: &[ScriptValue]) {
        self.emit(Level::Error, args);
    }

    fn emit(&self, level: Level, args: &[ScriptValue]) {
        self.logger.log(level, &format(args));
    }

    /// Log `message` at error level when `expression` is falsy. The message is not formatted.
    pub fn assert(&self, expression: &ScriptValue, message: &ScriptValue) {
        if !expression.is_truthy() {
            self.logger.error(&message.to_js_string());
        }
    }

    /// Log an error-like value at trace level.
    pub fn trace(&self, error: &ScriptValue) {
        if let ScriptValue::Foreign(object) = error {
            let message = object
                .localized_message()
                .unwrap_or_else(|| object.to_display_string());
            self.logger.trace(&message, Some(&**object));
            return;
        }

        if let Some(stack) = error.get("stack").filter(ScriptValue::is_truthy) {
            self.logger.trace(&stack.to_js_string(), None);
            return;
        }

        let name = error
            .get("name")
            .filter(ScriptValue::is_truthy)
            .map(|n| n.to_js_string())
            .unwrap_or_else(|| "Error".to_string());

        match error.get("message").filter(ScriptValue::is_truthy) {
            Some(message) => {
                let line = format(&[ScriptValue::String(format!("{}:", name)), message]);
                self.logger.trace(&line, None);
            }
            None => self.logger.trace(&name, None),
        }
    }

    // ========================================
    // COUNTERS & TIMERS
    // ========================================

    pub fn count(&self, label: &str) {
        if label.is_empty() {
            return;
        }
        let count = self.counters.increment(label);
        self.logger.debug(&format!("{}: {}", label, count));
    }

    pub fn time(&self, label: &str) {
        if label.is_empty() {
            return;
        }
        self.timers.start(label, self.clock.now_ms());
    }

    pub fn time_end(&self, label: &str) {
        if label.is_empty() {
            return;
        }
        let now = self.clock.now_ms();
        match self.timers.finish(label) {
            Some(started) => {
                self.logger.info(&format!("{}: {}ms", label, elapsed_ms(started, now)));
            }
            None => self.logger.info(&format!("{}: <no timer>", label)),
        }
    }

    // ========================================
    // DYNAMIC DISPATCH
    // ========================================

    /// Invoke one console method with an untyped argument list.
    pub fn call(&self, method: Method, args: &[ScriptValue]) {
        let first = args.first().cloned().unwrap_or_default();
        match method {
            Method::Assert => {
                let message = args.get(1).cloned().unwrap_or_default();
                self.assert(&first, &message);
            }
            Method::Count => self.with_label(&first, |label| self.count(label)),
            Method::Debug => self.debug(args),
            Method::Info => self.info(args),
            Method::Log => self.log(args),
            Method::Warn => self.warn(args),
            Method::Error => self.error(args),
            Method::Trace => self.trace(&first),
            Method::Time => self.with_label(&first, |label| self.time(label)),
            Method::TimeEnd => self.with_label(&first, |label| self.time_end(label)),
        }
    }

    fn with_label(&self, label: &ScriptValue, f: impl FnOnce(&str)) {
        if label.is_truthy() {
            f(&label.to_js_string());
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("counters", &self.counters)
            .field("timers", &self.timers)
            .finish()
    }
}
