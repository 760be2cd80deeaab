//! Where formatted lines go. Stdout is the default; the `Sink` trait lets callers
//! point a logger at stderr, any `io::Write`, or an in-memory buffer.

mod memory;
mod terminal;
mod writer;

pub use memory::MemorySink;
pub use terminal::{StderrSink, StdoutSink, Stream};
pub use writer::WriterSink;

/// `Send + Sync` so a logger can be shared across threads; ordering between
/// threads is only as strong as the implementation's own locking.
///
/// The logger only ever writes to a sink. It never reads from it or closes it.
pub trait Sink: Send + Sync {
    /// Writes one complete line. `line` already ends with `\n`.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn write_line(&self, line: &str) -> Result<(), crate::Error>;

    /// Pushes buffered bytes to the destination.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        (**self).write_line(line)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
