use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Routes `tracing` output to the browser console.
///
/// Each event is buffered by its writer and emitted as one console call on
/// drop, using the console method that matches the event level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let line = String::from_utf8_lossy(&self.buffer);
        let value = JsValue::from_str(line.trim_end());

        if self.level == Level::ERROR {
            web_sys::console::error_1(&value);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&value);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&value);
        } else {
            web_sys::console::debug_1(&value);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Installs the global subscriber. Timestamps are left out because the
/// browser console already records them.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::INFO)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        web_sys::console::warn_1(&format!("Failed to install logger: {e}").into());
    }
}
