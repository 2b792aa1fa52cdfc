//! Script Value: the untyped argument model handed to the console.
//! Containers are shared and mutable, so a value may reach itself.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

// ========================================
// HOST OBJECTS
// ========================================

/// A value owned by the hosting runtime rather than the script.
/// It always knows how to render itself.
pub trait HostObject: fmt::Debug + Send + Sync {
    /// The host's own textual representation.
    fn to_display_string(&self) -> String;

    /// Present when the object is a host-side error.
    fn localized_message(&self) -> Option<String> {
        None
    }
}

/// Containers nested deeper than this are not descended into.
pub const MAX_NESTING: usize = 512;

pub type ArrayRef = Rc<RefCell<Vec<ScriptValue>>>;
pub type ObjectRef = Rc<RefCell<Vec<(String, ScriptValue)>>>;

// ========================================
// SCRIPT VALUE
// ========================================

#[derive(Clone, Default)]
pub enum ScriptValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(ArrayRef),
    /// Keys keep insertion order.
    Object(ObjectRef),
    Function(Option<String>),
    RegExp { source: String, flags: String },
    Foreign(Arc<dyn HostObject>),
}

impl ScriptValue {
    pub fn object() -> Self {
        ScriptValue::Object(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn array() -> Self {
        ScriptValue::Array(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn function(name: impl Into<String>) -> Self {
        ScriptValue::Function(Some(name.into()))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        ScriptValue::RegExp {
            source: source.into(),
            flags: flags.into(),
        }
    }

    pub fn foreign(object: impl HostObject + 'static) -> Self {
        ScriptValue::Foreign(Arc::new(object))
    }

    /// Set (or replace) a property. Ignored for non-objects.
    pub fn set(&self, key: impl Into<String>, value: ScriptValue) {
        if let ScriptValue::Object(entries) = self {
            let key = key.into();
            let mut entries = entries.borrow_mut();
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => *slot = value,
                None => entries.push((key, value)),
            }
        }
    }

    /// Builder-style `set`.
    pub fn with(self, key: impl Into<String>, value: impl Into<ScriptValue>) -> Self {
        self.set(key, value.into());
        self
    }

    /// Append an element. Ignored for non-arrays.
    pub fn push(&self, value: ScriptValue) {
        if let ScriptValue::Array(items) = self {
            items.borrow_mut().push(value);
        }
    }

    /// Property lookup. Anything that is not an object has no properties.
    pub fn get(&self, key: &str) -> Option<ScriptValue> {
        match self {
            ScriptValue::Object(entries) => entries
                .borrow()
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            ScriptValue::Undefined | ScriptValue::Null => false,
            ScriptValue::Bool(b) => *b,
            ScriptValue::Number(n) => !(*n == 0.0 || n.is_nan()),
            ScriptValue::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Values that trailing-argument rendering treats as structures.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            ScriptValue::Array(_)
                | ScriptValue::Object(_)
                | ScriptValue::RegExp { .. }
                | ScriptValue::Foreign(_)
        )
    }

    /// Identity of a shared container, used for cycle tracking.
    pub(crate) fn container_id(&self) -> Option<*const ()> {
        match self {
            ScriptValue::Array(items) => Some(Rc::as_ptr(items) as *const ()),
            ScriptValue::Object(entries) => Some(Rc::as_ptr(entries) as *const ()),
            _ => None,
        }
    }

    /// Plain string coercion.
    pub fn to_js_string(&self) -> String {
        self.coerce_string(&mut Vec::new())
    }

    fn coerce_string(&self, path: &mut Vec<*const ()>) -> String {
        match self {
            ScriptValue::Undefined => "undefined".to_string(),
            ScriptValue::Null => "null".to_string(),
            ScriptValue::Bool(b) => b.to_string(),
            ScriptValue::Number(n) => format_number(*n),
            ScriptValue::String(s) => s.clone(),
            ScriptValue::Array(items) => {
                let id = Rc::as_ptr(items) as *const ();
                if path.len() >= MAX_NESTING || path.contains(&id) {
                    return String::new();
                }
                path.push(id);
                let parts: Vec<String> = items
                    .borrow()
                    .iter()
                    .map(|item| match item {
                        ScriptValue::Undefined | ScriptValue::Null => String::new(),
                        other => other.coerce_string(path),
                    })
                    .collect();
                path.pop();
                parts.join(",")
            }
            ScriptValue::Object(_) => "[object Object]".to_string(),
            ScriptValue::Function(Some(name)) => format!("[Function: {}]", name),
            ScriptValue::Function(None) => "[Function]".to_string(),
            ScriptValue::RegExp { source, flags } => format!("/{}/{}", source, flags),
            ScriptValue::Foreign(object) => object.to_display_string(),
        }
    }

    /// Numeric coercion. Failure yields NaN, never an error.
    pub fn to_number(&self) -> f64 {
        match self {
            ScriptValue::Undefined => f64::NAN,
            ScriptValue::Null => 0.0,
            ScriptValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            ScriptValue::Number(n) => *n,
            ScriptValue::String(s) => parse_number(s),
            ScriptValue::Array(items) => {
                let len = items.borrow().len();
                match len {
                    0 => 0.0,
                    1 => parse_number(&self.to_js_string()),
                    _ => f64::NAN,
                }
            }
            ScriptValue::Foreign(object) => parse_number(&object.to_display_string()),
            ScriptValue::Object(_) | ScriptValue::Function(_) | ScriptValue::RegExp { .. } => {
                f64::NAN
            }
        }
    }
}

impl fmt::Debug for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shallow on purpose: containers may be cyclic.
        match self {
            ScriptValue::Undefined => write!(f, "Undefined"),
            ScriptValue::Null => write!(f, "Null"),
            ScriptValue::Bool(b) => write!(f, "Bool({})", b),
            ScriptValue::Number(n) => write!(f, "Number({})", n),
            ScriptValue::String(s) => write!(f, "String({:?})", s),
            ScriptValue::Array(items) => match items.try_borrow() {
                Ok(items) => write!(f, "Array(len={})", items.len()),
                Err(_) => write!(f, "Array(<borrowed>)"),
            },
            ScriptValue::Object(entries) => match entries.try_borrow() {
                Ok(entries) => write!(f, "Object(keys={})", entries.len()),
                Err(_) => write!(f, "Object(<borrowed>)"),
            },
            ScriptValue::Function(name) => write!(f, "Function({:?})", name),
            ScriptValue::RegExp { source, flags } => write!(f, "RegExp(/{}/{})", source, flags),
            ScriptValue::Foreign(object) => write!(f, "Foreign({:?})", object),
        }
    }
}

// ========================================
// NUMBERS
// ========================================

/// Render a number the way script code prints it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        // Covers -0 too
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    const RADIX_PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.starts_with('+') || digits.starts_with('-') {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust's parser also accepts "inf"/"nan"; only decimal literals count here.
    let is_decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !is_decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

// ========================================
// CONVERSIONS
// ========================================

impl From<&str> for ScriptValue {
    fn from(s: &str) -> Self {
        ScriptValue::String(s.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(s: String) -> Self {
        ScriptValue::String(s)
    }
}

impl From<bool> for ScriptValue {
    fn from(b: bool) -> Self {
        ScriptValue::Bool(b)
    }
}

impl From<f64> for ScriptValue {
    fn from(n: f64) -> Self {
        ScriptValue::Number(n)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ScriptValue {
                fn from(n: $t) -> Self {
                    ScriptValue::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i32, i64, u32, u64, usize, f32);

impl From<Vec<ScriptValue>> for ScriptValue {
    fn from(items: Vec<ScriptValue>) -> Self {
        ScriptValue::Array(Rc::new(RefCell::new(items)))
    }
}

impl From<serde_json::Value> for ScriptValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ScriptValue::Null,
            serde_json::Value::Bool(b) => ScriptValue::Bool(b),
            serde_json::Value::Number(n) => ScriptValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => ScriptValue::String(s),
            serde_json::Value::Array(items) => {
                items.into_iter().map(ScriptValue::from).collect::<Vec<_>>().into()
            }
            serde_json::Value::Object(map) => {
                let entries = map
                    .into_iter()
                    .map(|(k, v)| (k, ScriptValue::from(v)))
                    .collect();
                ScriptValue::Object(Rc::new(RefCell::new(entries)))
            }
        }
    }
}

/// Build an argument list from mixed literals.
///
/// ```
/// use script_console::script_args;
/// let args = script_args!["%s and %d", "a", 5];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! script_args {
    () => {
        ::std::vec::Vec::<$crate::console::value::ScriptValue>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::console::value::ScriptValue::from($arg)),+]
    };
}
