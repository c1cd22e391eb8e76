//! Core library for `file_manager`.
//!
//! Contains the filesystem operations behind each menu entry, the interactive
//! dispatcher that drives them, and the configuration/CLI plumbing used by the
//! binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod menu;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use config::{
    create_template_config, default_config_path, default_log_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor, Config, ConfigSource, LogLevel,
};
pub use errors::FileManagerError;
pub use fs_ops::{
    copy_file, create_file, delete_file, list_dir, move_file, read_file, rename_file,
    sort_by_size, CopyReport, FileRecord, MoveStrategy, SortOrder, GREETING,
};
pub use menu::{MenuChoice, Session, SessionEnd};
