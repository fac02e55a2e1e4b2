//! Logging setup for the CLI.
//!
//! Log lines go to stderr right away. A second, plain-text copy goes to
//! `log.txt` inside the application data directory; since that directory is
//! only known after resolution, lines are buffered in memory until
//! [`StartupLog::attach`] is called.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Name of the log file inside the application data directory.
pub const LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug)]
enum Sink {
    Buffering(Vec<u8>),
    File(File),
    Disabled,
}

/// Log destination that buffers until its file is known.
///
/// Cheap to clone; all clones share the same sink.
#[derive(Debug, Clone)]
pub struct StartupLog {
    sink: Arc<Mutex<Sink>>,
}

impl Default for StartupLog {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupLog {
    pub fn new() -> Self {
        Self {
            sink: Arc::new(Mutex::new(Sink::Buffering(Vec::new()))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open (truncating) `path`, flush the buffered lines into it, and write
    /// through from now on.
    ///
    /// On failure the buffer is dropped and file logging stays off.
    pub fn attach(&self, path: &Path) -> io::Result<()> {
        let mut sink = self.lock();
        let opened = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .and_then(|mut file| {
                if let Sink::Buffering(buffer) = &*sink {
                    file.write_all(buffer)?;
                    file.flush()?;
                }
                Ok(file)
            });

        match opened {
            Ok(file) => {
                *sink = Sink::File(file);
                Ok(())
            }
            Err(e) => {
                *sink = Sink::Disabled;
                Err(e)
            }
        }
    }

    /// Stop file logging and drop anything buffered.
    pub fn disable(&self) {
        *self.lock() = Sink::Disabled;
    }

    /// Bytes waiting for the log file.
    #[cfg(test)]
    fn buffered_len(&self) -> usize {
        match &*self.lock() {
            Sink::Buffering(buffer) => buffer.len(),
            Sink::File(_) | Sink::Disabled => 0,
        }
    }
}

/// Writer handed to the tracing layer for each event.
#[derive(Debug)]
pub struct StartupLogWriter {
    log: StartupLog,
}

impl Write for StartupLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut *self.log.lock() {
            Sink::Buffering(buffer) => buffer.extend_from_slice(buf),
            Sink::File(file) => {
                file.write_all(buf)?;
                // Keep the file complete for anyone tailing it.
                file.flush()?;
            }
            Sink::Disabled => {}
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.log.lock() {
            Sink::File(file) => file.flush(),
            Sink::Buffering(_) | Sink::Disabled => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for StartupLog {
    type Writer = StartupLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        StartupLogWriter { log: self.clone() }
    }
}

/// Install the global subscriber and return the startup log handle.
///
/// Log level comes from `RUST_LOG`; otherwise `info`, or `debug` when
/// `verbose` is set.
pub fn init_tracing(verbose: bool) -> StartupLog {
    let startup_log = StartupLog::new();
    let default_level = if verbose { "debug" } else { "info" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(startup_log.clone())
                .with_ansi(false) // No ANSI colors in files
                .compact(),
        )
        .try_init()
        .ok(); // Ignore error if already initialized

    startup_log
}
