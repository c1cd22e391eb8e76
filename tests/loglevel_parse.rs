//! Log level names are shared by the XML config and the `--log-level` flag.

use clap::Parser;
use std::fs;
use tempfile::tempdir;

use file_manager::cli::Args;
use file_manager::{load_config_from_xml_path, LogLevel};

const ALIASES: &[(&str, LogLevel)] = &[
    ("quiet", LogLevel::Quiet),
    ("error", LogLevel::Quiet),
    ("none", LogLevel::Quiet),
    ("normal", LogLevel::Normal),
    ("Warn", LogLevel::Normal),
    ("info", LogLevel::Info),
    ("VERBOSE", LogLevel::Info),
    ("detailed", LogLevel::Info),
    ("debug", LogLevel::Debug),
    ("TRACE", LogLevel::Debug),
];

#[test]
fn every_alias_maps_to_its_level() {
    for (name, want) in ALIASES {
        assert_eq!(LogLevel::parse(name).as_ref(), Some(want), "alias {name}");
        assert_eq!(name.parse::<LogLevel>().as_ref(), Ok(want), "alias {name}");
    }
    for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        assert_eq!(LogLevel::parse(&lvl.to_string()), Some(lvl));
    }
}

#[test]
fn flag_and_config_accept_and_reject_the_same_names() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");

    for (name, want) in ALIASES {
        let args = Args::try_parse_from(["file_manager", "--log-level", name]).unwrap();
        assert_eq!(args.log_level.as_ref(), Some(want), "flag {name}");

        fs::write(&cfg_path, format!("<config><log_level>{name}</log_level></config>")).unwrap();
        let cfg = load_config_from_xml_path(&cfg_path).unwrap();
        assert_eq!(&cfg.log_level, want, "config {name}");
    }

    for bad in ["loud", "warning!", "2"] {
        assert!(Args::try_parse_from(["file_manager", "--log-level", bad]).is_err(), "flag {bad}");
        fs::write(&cfg_path, format!("<config><log_level>{bad}</log_level></config>")).unwrap();
        assert!(load_config_from_xml_path(&cfg_path).is_err(), "config {bad}");
    }
}
