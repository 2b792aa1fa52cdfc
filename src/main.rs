use std::io;

use script_console::config::Config;
use script_console::console::{replay, Console};
use script_console::errors::ConsoleError;
use script_console::logging;

// ========================================
// MAIN ENTRY POINT
// ========================================

/// Reads `<method> [json args]` lines from stdin and replays them against the global console.
fn main() -> Result<(), ConsoleError> {
    let config = Config::global();
    logging::init(&config.logging);
    config.report_fallbacks();

    let calls = replay(io::stdin().lock(), Console::global())?;
    tracing::debug!("[Driver] Replayed {} console calls", calls);

    Ok(())
}
