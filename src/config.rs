use std::env;
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

// --- CONFIG AGGREGATOR ---

#[derive(Debug, Clone)]
pub struct Config {
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
    /// Values that failed to parse and fell back to their defaults.
    /// Kept until a subscriber exists to report them.
    pub fallbacks: Vec<String>,
}

impl Config {
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(Self::load)
    }

    pub fn load() -> Self {
        dotenv::dotenv().ok();
        let mut fallbacks = Vec::new();
        Self {
            console: ConsoleConfig::load(&mut fallbacks),
            logging: LoggingConfig::load(&mut fallbacks),
            fallbacks,
        }
    }

    /// Emit one warning per fallen-back value. Call after `logging::init`.
    pub fn report_fallbacks(&self) {
        for message in &self.fallbacks {
            tracing::warn!("{}", message);
        }
    }
}

// --- MODULES ---

// CONSOLE
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Channel name attached to every line the console emits.
    pub logger_name: String,
}

impl ConsoleConfig {
    fn load(fallbacks: &mut Vec<String>) -> Self {
        Self {
            logger_name: get_env("CONSOLE_LOGGER_NAME", "console", fallbacks),
        }
    }
}

// LOGGING
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub ansi: bool,
}

impl LoggingConfig {
    fn load(fallbacks: &mut Vec<String>) -> Self {
        Self {
            level: get_env("SCRIPT_LOG", "info", fallbacks),
            ansi:  get_env("SCRIPT_LOG_ANSI", "true", fallbacks),
        }
    }
}

// --- PRIVATE HELPER ---

fn get_env<T: std::str::FromStr>(key: &str, default: &str, fallbacks: &mut Vec<String>) -> T {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            fallbacks.push(format!(
                "Config error: {} must be valid (got '{}'), falling back to '{}'",
                key, raw, default
            ));
            default
                .parse()
                .map_err(|_| format!("Config error: built-in default for {} is invalid", key))
                .unwrap()
        }
    }
}
