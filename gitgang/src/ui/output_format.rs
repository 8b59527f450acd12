// gitgang/src/ui/output_format.rs
//! Human-facing status lines on stderr.
//!
//! Colors are applied only when the target supports them; callers pass that
//! decision in so the functions stay testable against in-memory writers.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

/// Kinds of status line, each with its own prefix and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warn,
    Error,
}

impl MessageKind {
    pub fn prefix(self) -> &'static str {
        match self {
            MessageKind::Info => "",
            MessageKind::Success => "SUCCESS: ",
            MessageKind::Warn => "WARNING: ",
            MessageKind::Error => "ERROR: ",
        }
    }

    pub fn color(self) -> AnsiColors {
        match self {
            MessageKind::Info => AnsiColors::Cyan,
            MessageKind::Success => AnsiColors::Green,
            MessageKind::Warn => AnsiColors::Yellow,
            MessageKind::Error => AnsiColors::Red,
        }
    }
}

/// Writes one status line, colored when `enable_colors` is set.
pub fn print_message<W: Write>(
    writer: &mut W,
    kind: MessageKind,
    message: &str,
    enable_colors: bool,
) -> io::Result<()> {
    let line = format!("{}{}", kind.prefix(), message);
    if enable_colors {
        writeln!(writer, "{}", line.color(kind.color()))
    } else {
        writeln!(writer, "{}", line)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Info, message, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Success, message, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Warn, message, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Error, message, enable_colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_prefix_and_no_escapes() {
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ERROR: boom\n");
    }

    #[test]
    fn test_colored_output_wraps_line() {
        let mut buf = Vec::new();
        print_success_message(&mut buf, "done", true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("SUCCESS: done"));
    }

    #[test]
    fn test_info_has_no_prefix() {
        let mut buf = Vec::new();
        print_info_message(&mut buf, "Staging file reset to template", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Staging file reset to template\n");
    }
}
