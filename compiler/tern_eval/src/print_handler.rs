//! Output destination for `print`.
//!
//! Programs run by the CLI write to stdout; embedders and tests capture
//! output in a buffer instead. Dispatch is a plain enum match.

use parking_lot::Mutex;
use std::io::Write;

/// Captures printed lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` and a newline.
    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Where `print` sends its text.
pub enum PrintHandlerImpl {
    /// Writes to the process stdout (default).
    Stdout,
    /// Captures into a buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Emit one line.
    ///
    /// Stdout write failures (e.g. a closed pipe) are ignored; `print` has no
    /// way to report them to the program.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{line}");
            }
            Self::Buffer(h) => h.println(line),
        }
    }

    /// Captured output; empty for stdout.
    pub fn output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(h) => h.output(),
        }
    }

    /// Discard captured output; no-op for stdout.
    pub fn clear(&self) {
        match self {
            Self::Stdout => {}
            Self::Buffer(h) => h.clear(),
        }
    }
}

/// Shared print handler, cloned into every interpreter that prints.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Handler writing to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout)
}

/// Handler capturing output for later inspection with [`PrintHandlerImpl::output`].
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
