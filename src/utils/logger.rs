//! Logger backend for the `log` facade
//!
//! Records are echoed to the console and, when a log file is configured,
//! appended to it as well. Warnings and errors go to stderr so they stay
//! visible when stdout is redirected. Console lines are written with any
//! active progress bar suspended so they never interleave with its redraws.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::utils::progress;

/// Console and file logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is emitted
    level: LevelFilter,
}

impl Logger {
    /// Creates a console-only logger
    pub fn console(level: LevelFilter) -> Self {
        Logger {
            file: Mutex::new(None),
            level,
        }
    }

    /// Creates a logger that also appends to a file
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level to emit
    pub fn with_file<P: AsRef<Path>>(log_file: P, level: LevelFilter) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Appends a line to the log file, if one is open
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Formats a record the way it appears in both sinks
    pub fn format_record(record: &Record) -> String {
        format!("[{}] {}", record.level(), record.args())
    }

    /// Installs the logger as the global `log` backend
    ///
    /// # Arguments
    ///
    /// * `log_file` - Optional file to append records to
    /// * `level` - Most verbose level to emit
    pub fn init_global_logger(log_file: Option<&Path>, level: LevelFilter) -> io::Result<()> {
        let global_logger = match log_file {
            Some(path) => Logger::with_file(path, level)?,
            None => Logger::console(level),
        };

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = Self::format_record(record);
            let _ = self.write_line(&message);

            progress::suspend(|| {
                if record.level() <= Level::Warn {
                    eprintln!("{}", message);
                } else {
                    println!("{}", message);
                }
            });
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
