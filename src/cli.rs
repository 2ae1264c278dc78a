//! Command-line interface for cascade.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// cascade - load global terminal settings and show what a terminal would receive
#[derive(Parser, Debug)]
#[command(name = "cascade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Globals JSON file to load
    #[arg(short, long, value_name = "PATH")]
    pub settings: PathBuf,

    /// Also print the terminal settings the globals project onto
    #[arg(long)]
    pub apply: bool,

    /// Built-in color scheme to apply to the terminal settings
    #[arg(long, value_name = "NAME", requires = "apply")]
    pub color_scheme: Option<String>,

    /// Log level (overrides the DEBUG_LEVEL environment variable)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Log verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
