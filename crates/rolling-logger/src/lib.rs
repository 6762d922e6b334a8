//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and echoes each line to the browser console (stderr when native).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept in memory when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::new()),
        }
    }

    /// Most recent lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines buffered by the global logger; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target("recipe_core").args(args).build()
    }

    #[test]
    fn test_line_format() {
        let logger = RollingLogger::new("RecipeBook", LevelFilter::Info, 10);
        logger.log(&record(Level::Warn, format_args!("quota exceeded")));

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("WARN  [RecipeBook] recipe_core: quota exceeded"), "{}", lines[0]);
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new("RecipeBook", LevelFilter::Debug, 3);
        for i in 0..5 {
            logger.log(&record(Level::Info, format_args!("line {}", i)));
        }

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_global_logger_buffers_lines() {
        init_logger("RecipeBook", LevelFilter::Info).unwrap();
        assert!(init_logger("RecipeBook", LevelFilter::Info).is_err());

        log::info!(target: "recipe_core", "search for pizza");
        log::debug!(target: "recipe_core", "below the level");

        let lines = recent_lines();
        assert!(lines.iter().any(|line| line.ends_with("recipe_core: search for pizza")));
        assert!(!lines.iter().any(|line| line.contains("below the level")));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new("RecipeBook", LevelFilter::Warn, 10);
        logger.log(&record(Level::Debug, format_args!("noise")));
        logger.log(&record(Level::Error, format_args!("boom")));

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }
}
