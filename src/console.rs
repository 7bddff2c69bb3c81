// Shared console output.
//
// Every demo writes through a `Console`. All clones share one sink behind a
// single mutex, so a `block` is never interleaved with another writer.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Sink = Box<dyn Write + Send>;

#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<Sink>>,
    color: bool,
}

impl Console {
    pub fn new(sink: impl Write + Send + 'static, color: bool) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
            color,
        }
    }

    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }

    /// Console writing into memory. Color is off so captured text is plain.
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::default();
        (Self::new(buffer.clone(), false), buffer)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn line(&self, text: impl Display) -> io::Result<()> {
        let mut sink = self.lock();
        writeln!(sink, "{text}")?;
        sink.flush()
    }

    pub fn blank(&self) -> io::Result<()> {
        self.line("")
    }

    /// Runs `f` with the lock held for its whole duration.
    pub fn block<F>(&self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut sink = self.lock();
        f(&mut **sink)?;
        sink.flush()
    }

    pub fn heading(&self, title: &str) -> io::Result<()> {
        let text = format!("=== {title} ===");
        if self.color {
            self.line(text.bold().cyan())
        } else {
            self.line(text)
        }
    }

    pub fn success(&self, text: impl Display) -> io::Result<()> {
        if self.color {
            self.line(text.to_string().green())
        } else {
            self.line(text)
        }
    }

    pub fn failure(&self, text: impl Display) -> io::Result<()> {
        if self.color {
            self.line(text.to_string().red())
        } else {
            self.line(text)
        }
    }

    // A writer that panicked mid-line still leaves a usable sink.
    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
