//! `tracing` output routed to the browser console.
//!
//! wasm32 has no stderr, so formatted events are buffered per event and
//! handed to `console.{error,warn,info,debug}` according to their level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber.
///
/// An unparsable directive falls back to `info` with a console warning.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        console::warn_1(&JsValue::from_str(&format!(
            "invalid log filter {directive:?} ({err}), using {FALLBACK_FILTER:?}"
        )));
        EnvFilter::new(FALLBACK_FILTER)
    });

    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();

    if let Err(err) = installed {
        console::warn_1(&JsValue::from_str(&format!(
            "tracing subscriber already set: {err}"
        )));
    }
}

#[derive(Clone, Copy, Debug, Default)]
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

/// Buffers one formatted event and flushes it to the console on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
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
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let line = JsValue::from_str(line);
        if self.level == Level::ERROR {
            console::error_1(&line);
        } else if self.level == Level::WARN {
            console::warn_1(&line);
        } else if self.level == Level::INFO {
            console::info_1(&line);
        } else {
            console::debug_1(&line);
        }
    }
}
