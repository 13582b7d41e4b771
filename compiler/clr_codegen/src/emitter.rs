//! Output sinks for the renderer.

use std::io::{self, Write};

/// Receives rendered text.
pub trait Emitter {
    fn emit(&mut self, text: &str);

    /// Emit a Unix newline.
    fn emit_newline(&mut self);

    /// Emit indentation, 4 spaces per level.
    fn emit_indent(&mut self, level: usize);
}

/// In-memory output.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.buffer.push_str("    ");
        }
    }
}

/// Streams output into any `io::Write`.
///
/// The first write error is kept and reported by `finish`; later writes are
/// skipped.
pub struct WriteEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteEmitter<W> {
    pub fn new(writer: W) -> Self {
        WriteEmitter {
            writer,
            error: None,
        }
    }

    /// Flush and hand back the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.write_all(bytes) {
            self.error = Some(error);
        }
    }
}

impl<W: Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn emit_newline(&mut self) {
        self.write(b"\n");
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.write(b"    ");
        }
    }
}
