//! Tracing setup for the browser. Events are formatted by `tracing-subscriber`
//! without timestamps or ANSI colors and written to the developer console, one
//! console call per event. Callers must not record passwords, tokens or email
//! addresses as fields.

use tracing_subscriber::EnvFilter;

use super::config::{AppConfig, DEFAULT_LOG_LEVEL};

/// Builds the filter from the configured level, falling back to the default
/// when the directive does not parse.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level.trim()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(config: &AppConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(console::ConsoleWriter::default);

    let _ = subscriber.try_init();
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};

    /// Buffers one formatted event and forwards it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use std::io::{self, Write};

    /// Native builds (tests, tooling) write to stderr.
    #[derive(Default)]
    pub struct ConsoleWriter;

    impl Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            io::stderr().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            io::stderr().flush()
        }
    }
}
