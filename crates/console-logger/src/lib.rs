//! Console Logger
//!
//! A `log` backend for browser apps. On wasm targets records go to the
//! devtools console at the matching level; elsewhere they go to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that forwards `log` records to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger. Fails if a logger is already set.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

/// Install a console logger at `level`
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    ConsoleLogger::new(level).init()
}

/// Parse a level name ("error", "warn", "info", "debug", "trace", "off"),
/// falling back to `default` for anything else.
pub fn parse_level(name: &str, default: LevelFilter) -> LevelFilter {
    name.trim().parse().unwrap_or(default)
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}
