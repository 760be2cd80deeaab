//! Adapter for any `io::Write`: files, sockets, pipes.

use super::Sink;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Serializes writes through a mutex so `&self` logging works with `&mut` writers.
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Gives the writer back, e.g. to inspect a `Vec<u8>` after logging.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        // A panic in another writer must not silence this logger.
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()?;
        Ok(())
    }
}
