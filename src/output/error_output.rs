//! Error and warning reporting on stderr.
//!
//! Format: `✖ ErrorType: message` followed by one `  × detail` line per
//! failed root.

use std::io::{IsTerminal, Write};

use crate::error::{DirsiftError, RootFailure};

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Auto-detects color support on stderr, honouring `NO_COLOR`.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Writes `err` with one detail line per failed root.
    pub fn write_error<W: Write>(&self, w: &mut W, err: &DirsiftError) {
        // Write failures on stderr are not recoverable here.
        let error_type = err.error_type();
        let (message, failures): (String, &[RootFailure]) = match err {
            DirsiftError::AllRootsFailed { failures } => {
                ("every supplied root failed".to_string(), failures.as_slice())
            }
            DirsiftError::PartialWorkerFailure { failures } => (
                format!("{} of the supplied roots failed", failures.len()),
                failures.as_slice(),
            ),
            _ => (err.to_string(), &[]),
        };

        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        for failure in failures {
            self.write_detail(w, &failure.to_string());
        }
    }

    /// Writes `⚠ Warning: message` followed by the detail lines.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, details: &[String]) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        for detail in details {
            self.write_detail(w, detail);
        }
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: &str) {
        if self.use_colors {
            let _ = writeln!(w, "  {}× {detail}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "  × {detail}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

pub fn print_error(err: &DirsiftError) {
    ErrorOutput::stderr().write_error(&mut std::io::stderr().lock(), err);
}

pub fn print_warning(message: &str, details: &[String]) {
    ErrorOutput::stderr().write_warning(&mut std::io::stderr().lock(), message, details);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
