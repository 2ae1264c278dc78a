//! Log bridge for cascade.
//!
//! Routes every `log::info!()` etc. from cascade and its member crates to
//! stderr, or to a file when one is given.
//!
//! The level comes from the `--log-level` flag, falling back to the
//! DEBUG_LEVEL environment variable:
//! - 0 or unset: No logging
//! - 1: Errors only
//! - 2: Warnings
//! - 3: Info level
//! - 4: Debug level
//! - 5: Trace level
use crate::cli::LogLevel;
use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

struct LogBridge {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        let mut sink = self.sink.lock();
        // Logging must never take the process down.
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

/// Parse a DEBUG_LEVEL value. Unknown values turn logging off.
pub fn level_from_debug_level(value: Option<&str>) -> LevelFilter {
    match value.map(str::trim).and_then(|v| v.parse::<u8>().ok()) {
        Some(1) => LevelFilter::Error,
        Some(2) => LevelFilter::Warn,
        Some(3) => LevelFilter::Info,
        Some(4) => LevelFilter::Debug,
        Some(5) => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Resolve the effective level: CLI flag first, then DEBUG_LEVEL.
pub fn resolve_level(cli_level: Option<LogLevel>) -> LevelFilter {
    match cli_level {
        Some(level) => level.into(),
        None => level_from_debug_level(std::env::var("DEBUG_LEVEL").ok().as_deref()),
    }
}

/// Install the log bridge. Call once, before anything logs.
pub fn init_log_bridge(cli_level: Option<LogLevel>, log_file: Option<&Path>) -> Result<()> {
    let level = resolve_level(cli_level);

    let sink: Box<dyn Write + Send> = match log_file {
        Some(path) => Box::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?,
        ),
        None => Box::new(std::io::stderr()),
    };

    let logger = LOGGER.get_or_init(|| LogBridge {
        level,
        sink: Mutex::new(sink),
    });
    log::set_logger(logger).map_err(|e| anyhow!("Log bridge already installed: {e}"))?;
    log::set_max_level(level);
    Ok(())
}
