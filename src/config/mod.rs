//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path, ConfigSource};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FILE_MANAGER_CONFIG";
/// Directory used by List and Sort when nothing else is configured.
pub const WORK_DIR_DEFAULT: &str = ".";
/// Copy chunk size when nothing else is configured.
pub const COPY_BUFFER_DEFAULT: usize = crate::fs_ops::DEFAULT_CHUNK_SIZE;
/// Upper bound accepted for the copy chunk size (64 MiB).
pub const MAX_COPY_BUFFER: usize = 64 * 1024 * 1024;
