// ========================================
// ERRORS
// ========================================

/// Failure while rendering a value as structured JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum StringifyError {
    /// The value reaches itself through one of its containers.
    Cycle,
    /// Containers nest deeper than `MAX_NESTING`.
    TooDeep,
    /// The JSON encoder rejected the converted tree.
    Serialize(String),
}

impl std::fmt::Display for StringifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringifyError::Cycle => write!(f, "TypeError: Converting circular structure to JSON"),
            StringifyError::TooDeep => write!(f, "RangeError: Maximum nesting depth exceeded"),
            StringifyError::Serialize(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StringifyError {}

impl From<serde_json::Error> for StringifyError {
    fn from(error: serde_json::Error) -> Self {
        StringifyError::Serialize(error.to_string())
    }
}

/// Errors raised while turning driver input into console calls.
/// Console entry points themselves never fail.
#[derive(Debug)]
pub enum ConsoleError {
    UnknownMethod(String),
    InvalidArguments(String),
    Io(std::io::Error),
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::UnknownMethod(name) => write!(f, "unknown console method '{}'", name),
            ConsoleError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            ConsoleError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        ConsoleError::Io(error)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(error: serde_json::Error) -> Self {
        ConsoleError::InvalidArguments(error.to_string())
    }
}
