//! Kernel-style leveled logging to stderr.
//!
//! # Environment Variables
//!
//! - `UXS_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace (or 0-5)
//! - `UXS_FLUSH_EPRINT=1` - flush stderr after each line
//!
//! Only lifecycle events are logged here. Failures are raised or
//! returned, never logged in their place.
//!
//! ```ignore
//! use unixsupport_core::{udebug, uinfo};
//!
//! uinfo!("cloexec default set to {}", true);
//! udebug!("resolved error identity `{}`", name);
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Log levels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Parse a level name or digit. `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "1" => Some(LogLevel::Error),
            "warn" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[uxs ERROR]",
            LogLevel::Warn => "[uxs WARN] ",
            LogLevel::Info => "[uxs INFO] ",
            LogLevel::Debug => "[uxs DEBUG]",
            LogLevel::Trace => "[uxs TRACE]",
        }
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static FLUSH: AtomicBool = AtomicBool::new(false);
static ENV_READ: AtomicBool = AtomicBool::new(false);

/// Read `UXS_LOG_LEVEL` / `UXS_FLUSH_EPRINT` once.
///
/// Runs lazily on the first log call. Explicit `set_*` calls made
/// afterwards win.
pub fn init_from_env() {
    if ENV_READ.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Some(level) = std::env::var("UXS_LOG_LEVEL").ok().and_then(|v| LogLevel::parse(&v)) {
        LOG_LEVEL.store(level as u8, Ordering::Relaxed);
    }
    if let Ok(v) = std::env::var("UXS_FLUSH_EPRINT") {
        FLUSH.store(matches!(v.as_str(), "1" | "true" | "yes" | "on"), Ordering::Relaxed);
    }
}

#[inline]
pub fn log_level() -> LogLevel {
    if !ENV_READ.load(Ordering::Relaxed) {
        init_from_env();
    }
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_log_level(level: LogLevel) {
    ENV_READ.store(true, Ordering::SeqCst);
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn set_flush_enabled(enabled: bool) {
    FLUSH.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

#[doc(hidden)]
pub fn _log_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = write!(out, "{} ", level.tag());
    let _ = out.write_fmt(args);
    let _ = out.write_all(b"\n");
    if FLUSH.load(Ordering::Relaxed) {
        let _ = out.flush();
    }
}

#[macro_export]
macro_rules! uerror {
    ($($arg:tt)*) => {{
        $crate::kprint::_log_impl($crate::kprint::LogLevel::Error, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! uwarn {
    ($($arg:tt)*) => {{
        $crate::kprint::_log_impl($crate::kprint::LogLevel::Warn, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! uinfo {
    ($($arg:tt)*) => {{
        $crate::kprint::_log_impl($crate::kprint::LogLevel::Info, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! udebug {
    ($($arg:tt)*) => {{
        $crate::kprint::_log_impl($crate::kprint::LogLevel::Debug, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! utrace {
    ($($arg:tt)*) => {{
        $crate::kprint::_log_impl($crate::kprint::LogLevel::Trace, format_args!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_parse() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" 2 "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("off"), Some(LogLevel::Off));
        assert_eq!(LogLevel::parse("loud"), None);
        assert_eq!(LogLevel::from_u8(42), LogLevel::Trace);
    }

    #[test]
    fn test_macros_compile() {
        uerror!("error {}", 1);
        uwarn!("warn");
        uinfo!("info {}", "x");
        udebug!("debug");
        utrace!("trace");
    }
}
