//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and mirrors each record to the browser console (stderr off wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static INSTALLED: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Buffered lines joined with newlines, for copying into a bug report
    pub fn dump(&self) -> String {
        self.recent().join("\n")
    }

    fn push(&self, line: String) {
        let mut buf = match self.buffer.lock() {
            Ok(buf) => buf,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buf.len() >= self.capacity {
            buf.pop_front();
        }
        buf.push_back(line);
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: log::Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        log::Level::Error => web_sys::console::error_1(&value),
        log::Level::Warn => web_sys::console::warn_1(&value),
        log::Level::Info => web_sys::console::info_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: log::Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install a global rolling logger.
///
/// Returns the installed instance so callers can read its history.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = INSTALLED.set(logger);
    Ok(logger)
}

/// The logger installed by `init`, if any
pub fn installed() -> Option<&'static RollingLogger> {
    INSTALLED.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn log_line(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = RollingLogger::new(LevelFilter::Trace, 2);
        log_line(&logger, Level::Info, "one");
        log_line(&logger, Level::Info, "two");
        log_line(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        log_line(&logger, Level::Debug, "hidden");
        log_line(&logger, Level::Error, "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("[test]"));
    }

    #[test]
    fn test_dump_joins_lines() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        log_line(&logger, Level::Info, "first");
        log_line(&logger, Level::Warn, "second");
        let dump = logger.dump();
        assert_eq!(dump.lines().count(), 2);
        assert!(dump.contains("first"));
        assert!(dump.ends_with("second"));
    }

    // Only test that installs the global logger
    #[test]
    fn test_init_installs_readable_logger() {
        let logger = init(LevelFilter::Info, DEFAULT_CAPACITY).unwrap();
        log::info!(target: "init", "hello from init");
        assert!(std::ptr::eq(installed().unwrap(), logger));
        assert!(installed().unwrap().dump().contains("hello from init"));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        log_line(&logger, Level::Info, "a");
        log_line(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
