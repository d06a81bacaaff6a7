use std::sync::{
    atomic::{AtomicU8, Ordering},
    Mutex,
    OnceLock,
};

use serde::Deserialize;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

static GLOBAL_LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
static GLOBAL_LOG_HANDLER: OnceLock<Mutex<Box<dyn LogHandler>>> = OnceLock::new();

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn from_u8(val: u8) -> LogLevel {
        match val {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            _ => LogLevel::Error,
        }
    }
}

pub fn global_log_level() -> LogLevel {
    LogLevel::from_u8(GLOBAL_LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn enabled(level: LogLevel) -> bool {
    level >= global_log_level()
}

pub fn set_global_log_level(level: LogLevel) {
    GLOBAL_LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub trait LogHandler: Send + Sync {
    fn handle(&self, level: LogLevel, msg: &str);
}

/// Everything goes to stderr so stdout stays clean for command output.
pub struct ConsoleLogger;

impl LogHandler for ConsoleLogger {
    fn handle(&self, _level: LogLevel, msg: &str) {
        eprintln!("{}", msg);
    }
}

fn handler_slot() -> &'static Mutex<Box<dyn LogHandler>> {
    GLOBAL_LOG_HANDLER.get_or_init(|| Mutex::new(Box::new(ConsoleLogger)))
}

pub fn set_global_log_handler(handler: Box<dyn LogHandler>) {
    let mut guard = handler_slot()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = handler;
}

pub fn log(level: LogLevel, name: &str, msg: &str) {
    if !enabled(level) {
        return;
    }

    let cur_thread = std::thread::current().id();
    let formatted_msg = format!("[{}] [{:?}] [{}] {}", level.as_str(), cur_thread, name, msg);
    // A handler that panicked once should not silence everyone else.
    let guard = handler_slot()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.handle(level, &formatted_msg);
}

#[macro_export]
macro_rules! log_debug {
    ($name:expr, $($arg:tt)+) => {
        if $crate::utils::log::enabled($crate::utils::LogLevel::Debug) {
            $crate::utils::log::log($crate::utils::LogLevel::Debug, $name, &format!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($name:expr, $($arg:tt)+) => {
        $crate::utils::log::log($crate::utils::LogLevel::Info, $name, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($name:expr, $($arg:tt)+) => {
        $crate::utils::log::log($crate::utils::LogLevel::Warning, $name, &format!($($arg)+))
    };
}
