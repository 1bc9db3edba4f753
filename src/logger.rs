//! Timestamped diagnostic output
//!
//! Nothing is printed until [`init_logger`] has been called, so library code can
//! log unconditionally and leave the choice to the binary.

use chrono::Local;

use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match &self.prefix {
            Some(prefix) => println!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => println!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// Installs the process-wide logger, later calls are ignored
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_enabled() -> bool {
    LOGGER.get().is_some()
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

/// Logs a formatted message with the calling file and line
///
/// The message is only formatted when a logger is installed.
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::is_enabled() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}
