pub mod config;
pub mod console;
pub mod errors;
pub mod items;
pub mod logging;
pub mod utils;

pub use crate::console::{format, stringify, Console, Method, ScriptValue};
pub use crate::errors::{ConsoleError, StringifyError};
pub use crate::items::safe_item_name;
