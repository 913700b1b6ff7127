// src/log.rs
//
// Append-only debug log under `.store/`. Cycles run on worker and timer
// threads, so every line goes out under one lock.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        })
    }
}

fn elapsed_ms() -> u64 {
    START.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// `[hh:mm:ss.mmm][LEVEL] msg`, time counted from the first log call.
fn format_line(ms: u64, level: Level, msg: &str) -> String {
    let (h, rest) = (ms / 3_600_000, ms % 3_600_000);
    let (m, rest) = (rest / 60_000, rest % 60_000);
    let (s, ms) = (rest / 1_000, rest % 1_000);
    format!("[{h:02}:{m:02}:{s:02}.{ms:03}][{level}] {msg}\n")
}

/// Backing call of the `log*!` macros. I/O failures drop the line.
pub fn write_log(level: Level, msg: &str) {
    let line = format_line(elapsed_ms(), level, msg);

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    if fs::create_dir_all(STORE_DIR).is_err() {
        return;
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_zero_padded_and_tagged() {
        assert_eq!(format_line(0, Level::Info, "hi"), "[00:00:00.000][INFO] hi\n");
        assert_eq!(
            format_line(3_723_004, Level::Warn, "Config: bad"),
            "[01:02:03.004][WARN] Config: bad\n"
        );
    }
}
