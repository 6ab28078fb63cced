use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub enum LogSink {
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: LogSink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> Self {
        Self { prefix, sink }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(file, line, message);
        match &self.sink {
            LogSink::Stderr => eprintln!("{}", formatted),
            LogSink::File(writer) => {
                if let Ok(mut writer) = writer.lock() {
                    let _ = writeln!(writer, "{}", formatted);
                }
            }
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix, LogSink::Stderr));
}

pub fn init_file_logger(prefix: Option<String>, path: &str) -> Result<(), String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
    LOGGER.get_or_init(|| Logger::new(prefix, LogSink::File(Mutex::new(file))));
    Ok(())
}

/// Messages logged before initialization are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
