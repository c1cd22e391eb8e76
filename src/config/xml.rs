//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - This module only reads/writes the config file; directory validation happens elsewhere.
//! - Unknown XML fields are an error so misconfigurations surface early.

use anyhow::{anyhow, bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::{CONFIG_ENV, COPY_BUFFER_DEFAULT, WORK_DIR_DEFAULT};
use crate::platform::write_config_secure_new_0600;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "work_dir")]
    work_dir: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "copy_buffer_size")]
    copy_buffer_size: Option<String>,
    #[serde(rename = "color")]
    color: Option<String>,
}

/// Where the effective config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No config file; built-in defaults.
    Defaults,
    /// Loaded from this file.
    File(PathBuf),
}

fn trimmed(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bool(field: &str, s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => bail!("invalid boolean for <{field}>: '{s}'"),
    }
}

// Map XmlConfig -> Config, starting from defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = trimmed(parsed.work_dir.as_deref()) {
        cfg.work_dir = PathBuf::from(s);
    }
    if let Some(s) = trimmed(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    cfg.log_file = trimmed(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(s) = trimmed(parsed.copy_buffer_size.as_deref()) {
        cfg.copy_buffer_size = s
            .parse::<usize>()
            .with_context(|| format!("invalid <copy_buffer_size>: '{s}'"))?;
    }
    if let Some(s) = trimmed(parsed.color.as_deref()) {
        cfg.color = parse_bool("color", s)?;
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Load the effective config file.
///
/// - `$FILE_MANAGER_CONFIG` set: that file must exist and parse.
/// - Otherwise the default location is used if a file exists there; a missing
///   file means built-in defaults.
pub fn load_config() -> Result<(Config, ConfigSource)> {
    let explicit = env::var_os(CONFIG_ENV).is_some();
    let path = default_config_path()?;

    if !path.exists() {
        if explicit {
            bail!(
                "{} points to '{}', which does not exist",
                CONFIG_ENV,
                path.display()
            );
        }
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok((Config::default(), ConfigSource::Defaults));
    }

    let cfg = load_config_from_xml_path(&path)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok((cfg, ConfigSource::File(path)))
}

/// Write a commented template config to `path`.
/// Refuses to overwrite an existing file or to write below a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    let content = format!(
        "<!--\n  file_manager configuration (XML)\n\n  Fields (all optional):\n    work_dir          -> directory used by List and Sort\n    log_level         -> quiet | normal | info | debug\n    log_file          -> path to a log file (empty = no file logging)\n    copy_buffer_size  -> chunk size in bytes for Copy/Move (1 .. 67108864)\n    color             -> true/false; colored prefixes on a terminal\n\n  Notes:\n    - CLI flags override XML values.\n    - Set FILE_MANAGER_CONFIG to use a different file.\n-->\n<config>\n  <work_dir>{}</work_dir>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n  <copy_buffer_size>{}</copy_buffer_size>\n  <color>true</color>\n</config>\n",
        WORK_DIR_DEFAULT, COPY_BUFFER_DEFAULT
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    info!("Created template config at {}", path.display());
    Ok(())
}
