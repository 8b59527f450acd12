// gitgang/src/ui/reporter.rs
//! Status line helpers bound to stderr.

use is_terminal::IsTerminal;
use std::io;

use crate::ui::output_format::{self, MessageKind};

/// Prints status lines to stderr. `quiet` silences everything but errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn emit(&self, kind: MessageKind, message: &str) {
        if self.quiet && kind != MessageKind::Error {
            return;
        }
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        let _ = output_format::print_message(&mut stderr.lock(), kind, message, supports_color);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(MessageKind::Info, message.as_ref());
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.emit(MessageKind::Success, message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(MessageKind::Warn, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(MessageKind::Error, message.as_ref());
    }
}
