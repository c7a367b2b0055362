use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

use crate::registry::Snapshot;

const STATUS_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Pending,
    Success,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

fn supports_color(stream: Stream) -> bool {
    let is_tty = match stream {
        Stream::Stdout => io::stdout().is_terminal(),
        Stream::Stderr => io::stderr().is_terminal(),
    };
    is_tty && std::env::var_os("NO_COLOR").is_none()
}

fn style_for(kind: StatusKind) -> Style {
    let style = Style::new().bold();
    match kind {
        StatusKind::Pending => style.fg_color(Some(AnsiColor::Cyan.into())),
        StatusKind::Success => style.fg_color(Some(AnsiColor::Green.into())),
        StatusKind::Info => style.fg_color(Some(AnsiColor::Blue.into())),
        StatusKind::Warn => style.fg_color(Some(AnsiColor::Yellow.into())),
        StatusKind::Error => style.fg_color(Some(AnsiColor::Red.into())),
    }
}

fn handle_for(stream: Stream) -> Box<dyn Write> {
    match stream {
        Stream::Stdout => Box::new(io::stdout().lock()),
        Stream::Stderr => Box::new(io::stderr().lock()),
    }
}

fn write_status(kind: StatusKind, label: &str, message: &str) {
    // stdout is reserved for output meant to be captured (listings, activation commands)
    let stream = match kind {
        StatusKind::Success => Stream::Stdout,
        _ => Stream::Stderr,
    };

    let use_color = supports_color(stream);
    let mut handle = handle_for(stream);

    let padded_label = if label.is_empty() {
        " ".repeat(STATUS_WIDTH)
    } else {
        format!("{:>width$}", label, width = STATUS_WIDTH)
    };

    let (prefix, suffix) = if use_color {
        let style = style_for(kind);
        (style.render().to_string(), style.render_reset().to_string())
    } else {
        (String::new(), String::new())
    };

    for (idx, line) in message.split('\n').enumerate() {
        if idx == 0 {
            let _ = writeln!(handle, "{prefix}{padded_label}{suffix} {line}");
        } else {
            let _ = writeln!(handle, "{:>width$} {line}", "", width = STATUS_WIDTH);
        }
    }
    let _ = handle.flush();
}

pub fn status(label: &str, message: impl Display) {
    write_status(StatusKind::Pending, label, &message.to_string());
}

pub fn info(message: impl Display) {
    write_status(StatusKind::Info, "Info", &message.to_string());
}

pub fn warn(message: impl Display) {
    write_status(StatusKind::Warn, "Warning", &message.to_string());
}

pub fn error(message: impl Display) {
    write_status(StatusKind::Error, "Error", &message.to_string());
}

/// Report an error with each cause on its own continuation line
pub fn error_chain(err: &anyhow::Error) {
    error(format_chain(err));
}

fn format_chain(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        message.push_str(&format!("\ncaused by: {cause}"));
    }
    message
}

pub fn success(label: &str, message: impl Display) {
    write_status(StatusKind::Success, label, &message.to_string());
}

/// Numbered listing, one `N. name` line per entry
pub fn format_entries(snapshot: &Snapshot) -> String {
    snapshot
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| format!("{}. {}\n", idx + 1, entry.display_name()))
        .collect()
}

/// Print the listing on stdout
pub fn listing(snapshot: &Snapshot) {
    let mut handle = io::stdout().lock();
    let _ = handle.write_all(format_entries(snapshot).as_bytes());
    let _ = handle.flush();
}

/// Print the listing as a selection menu on stderr
pub fn menu(snapshot: &Snapshot) {
    let mut handle = io::stderr().lock();
    let _ = writeln!(handle, "Available environments:");
    let _ = handle.write_all(format_entries(snapshot).as_bytes());
    let _ = handle.flush();
}

/// Write a prompt to stderr without a trailing newline
pub fn prompt(message: impl Display) {
    let mut handle = io::stderr().lock();
    let _ = write!(handle, "{message}");
    let _ = handle.flush();
}
