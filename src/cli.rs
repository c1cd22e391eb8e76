//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug and wins over it.
//! - Flags override values loaded from the XML config.

use clap::{Parser, ValueHint};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::types::{Config, LogLevel};

/// Interactive file manager.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Create, read, copy, move, list and sort files from an interactive menu"
)]
pub struct Args {
    /// Directory used by the List and Sort operations (default: current directory).
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Directory used by List and Sort"
    )]
    pub work_dir: Option<PathBuf>,

    /// Chunk size in bytes used when copying.
    #[arg(long, value_name = "BYTES", help = "Copy chunk size in bytes")]
    pub buffer_size: Option<usize>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        value_name = "LEVEL",
        value_parser = LogLevel::from_str,
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Disable colored message prefixes.
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    /// Print where the config file is looked up, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a template config file at the config location, then exit.
    #[arg(long, help = "Write a template config file and exit")]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.work_dir {
            cfg.work_dir = dir.clone();
        }
        if let Some(size) = self.buffer_size {
            cfg.copy_buffer_size = size;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.no_color {
            cfg.color = false;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
