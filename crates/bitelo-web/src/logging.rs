//! Browser console output for `tracing` events.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install a `tracing` subscriber that writes to the browser console.
///
/// Safe to call more than once; only the first call installs.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::DEBUG)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Console subscriber installed");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Collects one formatted event and sends it to the console method matching
/// its level when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// Take the buffered line without its trailing newline, if any was written.
    pub fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        Some(line)
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.take_line() else {
            return;
        };
        let message = JsValue::from_str(&line);

        if self.level == Level::ERROR {
            web_sys::console::error_1(&message);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&message);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&message);
        } else {
            web_sys::console::debug_1(&message);
        }
    }
}
