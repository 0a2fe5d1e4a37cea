//! Print handler for configurable output.
//!
//! Scripts write to two streams: regular output (movement reports, `out*`,
//! `print`) and diagnostics (soft warnings, `tap` reports). The handler
//! decides where both go:
//! - Stdout: stdout and stderr (default)
//! - Buffer: two in-memory buffers, for tests and embedding
//! - Silent: discarded
//!
//! Enum dispatch keeps the per-line path free of vtable calls.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes output to stdout and diagnostics to stderr.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn diagnostic(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Captures output and diagnostics into separate buffers.
#[derive(Default)]
pub struct BufferPrintHandler {
    output: Mutex<String>,
    diagnostics: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn diagnostic(&self, msg: &str) {
        let mut buf = self.diagnostics.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    /// Every diagnostic line so far.
    pub fn get_diagnostics(&self) -> String {
        self.diagnostics.lock().clone()
    }

    pub fn clear(&self) {
        self.output.lock().clear();
        self.diagnostics.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line of regular output.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Print a line on the diagnostic stream.
    pub fn diagnostic(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.diagnostic(msg),
            Self::Buffer(h) => h.diagnostic(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured diagnostics; empty for handlers that do not capture.
    pub fn get_diagnostics(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_diagnostics(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn buffer_keeps_streams_apart() {
        let handler = buffer_handler();
        handler.println("Velocity: (0, 0)");
        handler.diagnostic("warning: unused");
        handler.println("X: 0");
        assert_eq!(handler.get_output(), "Velocity: (0, 0)\nX: 0\n");
        assert_eq!(handler.get_diagnostics(), "warning: unused\n");

        handler.clear();
        assert_eq!(handler.get_output(), "");
        assert_eq!(handler.get_diagnostics(), "");
    }

    #[test]
    fn silent_captures_nothing() {
        let handler = silent_handler();
        handler.println("hello");
        handler.diagnostic("hello");
        assert_eq!(handler.get_output(), "");
        assert_eq!(handler.get_diagnostics(), "");
    }
}
