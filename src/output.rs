use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
pub fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Message categories, each with its own prefix and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Info,
    Warn,
    Error,
    Success,
}

/// Render `msg` with the prefix for `kind`, colored when `color` is set.
pub fn styled(kind: Kind, msg: &str, color: bool) -> String {
    let prefix = match kind {
        Kind::Info => "info:",
        Kind::Warn => "warn:",
        Kind::Error => "error:",
        Kind::Success => "ok:",
    };
    if !color {
        return format!("{} {}", prefix, msg);
    }
    match kind {
        Kind::Info => format!("{} {}", prefix.cyan().bold(), msg),
        Kind::Warn => format!("{} {}", prefix.yellow().bold(), msg),
        Kind::Error => format!("{} {}", prefix.red().bold(), msg),
        Kind::Success => format!("{} {}", prefix.green().bold(), msg),
    }
}

/// Write one styled line to `w`.
pub fn write_line<W: Write + ?Sized>(w: &mut W, kind: Kind, msg: &str, color: bool) -> io::Result<()> {
    writeln!(w, "{}", styled(kind, msg, color))
}

pub fn print_info(msg: &str) {
    println!("{}", styled(Kind::Info, msg, is_tty()));
}

pub fn print_warn(msg: &str) {
    eprintln!("{}", styled(Kind::Warn, msg, is_tty()));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", styled(Kind::Error, msg, is_tty()));
}

pub fn print_success(msg: &str) {
    println!("{}", styled(Kind::Success, msg, is_tty()));
}
