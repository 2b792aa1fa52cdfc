//! Method names and the line format read by the `script-console` driver.
//!
//! Format: `<method> [<json array of arguments>]`, e.g. `log ["%s and %d", "a", 5]`.

use std::io::BufRead;
use std::str::FromStr;

use crate::console::value::ScriptValue;
use crate::console::Console;
use crate::errors::ConsoleError;

/// The exposed console method set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Assert,
    Count,
    Debug,
    Info,
    Log,
    Warn,
    Error,
    Trace,
    Time,
    TimeEnd,
}

impl Method {
    pub const ALL: [Method; 10] = [
        Method::Assert,
        Method::Count,
        Method::Debug,
        Method::Info,
        Method::Log,
        Method::Warn,
        Method::Error,
        Method::Trace,
        Method::Time,
        Method::TimeEnd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Assert => "assert",
            Method::Count => "count",
            Method::Debug => "debug",
            Method::Info => "info",
            Method::Log => "log",
            Method::Warn => "warn",
            Method::Error => "error",
            Method::Trace => "trace",
            Method::Time => "time",
            Method::TimeEnd => "timeEnd",
        }
    }
}

impl FromStr for Method {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ConsoleError::UnknownMethod(s.to_string()))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse one driver line into a method and its arguments.
pub fn parse_invocation(line: &str) -> Result<(Method, Vec<ScriptValue>), ConsoleError> {
    let line = line.trim();
    let (name, rest) = match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim_start()),
        None => (line, ""),
    };

    let method: Method = name.parse()?;
    if rest.is_empty() {
        return Ok((method, Vec::new()));
    }

    match serde_json::from_str::<serde_json::Value>(rest)? {
        serde_json::Value::Array(items) => {
            Ok((method, items.into_iter().map(ScriptValue::from).collect()))
        }
        other => Err(ConsoleError::InvalidArguments(format!(
            "expected a JSON array of arguments, got {}",
            other
        ))),
    }
}

/// Replay driver lines against a console. Blank lines and `#` comments are skipped;
/// malformed lines are reported and skipped. Returns how many calls were made.
pub fn replay(reader: impl BufRead, console: &Console) -> Result<usize, ConsoleError> {
    let mut calls = 0;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_invocation(trimmed) {
            Ok((method, args)) => {
                console.call(method, &args);
                calls += 1;
            }
            Err(e) => tracing::warn!("[Driver] Skipping line {}: {}", line_no + 1, e),
        }
    }
    Ok(calls)
}
