//! `tracing` output for the browser console.
//!
//! The fmt layer formats each event into a [`ConsoleWriter`], which hands the
//! finished line to the console method matching the event level when it is
//! dropped. Timestamps are off: `SystemTime` is unavailable on
//! `wasm32-unknown-unknown`.

use std::io::{self, Write};

use tracing::{info, warn, Level, Metadata};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    prelude::*,
    reload, EnvFilter, Registry,
};
use wasm_bindgen::JsValue;

const DEFAULT_FILTER: &str = "info";

pub type ReloadHandle = reload::Handle<EnvFilter, Registry>;

pub fn init() -> ReloadHandle {
    console_error_panic_hook::set_once();

    let (filter_layer, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_target(true)
                .with_writer(ConsoleMakeWriter)
                .with_filter(filter_layer),
        )
        .try_init();

    if installed.is_err() {
        warn!("a global tracing subscriber was already installed");
    }
    handle
}

pub fn set_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "failed to update log level: {err}");
    } else {
        info!(%level, "applied log level from site content");
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
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
        let line = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}
