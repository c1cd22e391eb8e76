//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler,
//! validates the working directory and runs the interactive menu.

use anyhow::{Context, Result};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use file_manager::cli::Args;
use file_manager::output as out;
use file_manager::{
    create_template_config, default_config_path, load_config, shutdown, ConfigSource, Session,
    SessionEnd,
};

use crate::logging::init_tracing;

/// Exit status used when Ctrl-C ends the program.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config / --init-config before logging init
    if args.print_config {
        match default_config_path() {
            Ok(p) => {
                out::print_info(&format!("file_manager config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run with --init-config to create a template.");
                }
            }
            Err(e) => out::print_error(&format!("Could not determine a config path: {e}")),
        }
        return Ok(());
    }
    if args.init_config {
        let path = default_config_path()?;
        create_template_config(&path)?;
        out::print_success(&format!("A template config was written to: {}", path.display()));
        return Ok(());
    }

    // Defaults < XML < CLI flags
    let (mut cfg, source) = load_config().context("failed to load config")?;
    args.apply_overrides(&mut cfg);
    cfg.color = cfg.color && out::is_tty();

    // Initialize logging and capture the guard so we can drop it on signal
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            if shutdown::is_busy() {
                out::print_warn("Received interrupt; stopping the current operation...");
                return;
            }
            out::print_warn("Received interrupt; exiting.");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
            std::process::exit(INTERRUPTED_EXIT_CODE);
        })
        .context("failed to install signal handler")?;
    }

    match &source {
        ConfigSource::File(p) => debug!(config = %p.display(), "Using config file"),
        ConfigSource::Defaults => debug!("Using built-in defaults"),
    }
    debug!("Starting file_manager: {:?}", args);

    let result = (move || -> Result<SessionEnd> {
        cfg.validate()?;
        info!(work_dir = %cfg.work_dir.display(), "Starting interactive session");
        let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), cfg);
        let end = session.run().context("failed to write to standard output")?;
        debug!(?end, "Session finished");
        Ok(end)
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    match result? {
        SessionEnd::Interrupted => std::process::exit(INTERRUPTED_EXIT_CODE),
        SessionEnd::Exit | SessionEnd::EndOfInput => Ok(()),
    }
}
