//! The outbound logging seam. Formatted lines leave the console through
//! `ScriptLogger`; the default sink forwards them to `tracing`.

use crate::console::value::HostObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Named-channel sink the console writes to. Calls are fire-and-forget.
pub trait ScriptLogger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn trace(&self, message: &str, cause: Option<&dyn HostObject>);

    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Trace => self.trace(message, None),
            Level::Debug => self.debug(message),
            Level::Info => self.info(message),
            Level::Warn => self.warn(message),
            Level::Error => self.error(message),
        }
    }
}

// ========================================
// TRACING SINK
// ========================================

#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ScriptLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(logger = %self.name, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(logger = %self.name, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(logger = %self.name, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(logger = %self.name, "{}", message);
    }

    fn trace(&self, message: &str, cause: Option<&dyn HostObject>) {
        match cause {
            Some(cause) => {
                tracing::trace!(logger = %self.name, cause = %cause.to_display_string(), "{}", message)
            }
            None => tracing::trace!(logger = %self.name, "{}", message),
        }
    }
}
