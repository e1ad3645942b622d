//! Incremental line reconstruction.
//!
//! [`LineSplitter`] turns an arbitrarily chunked byte stream into discrete
//! [`Line`] records. Chunk boundaries carry no meaning: feeding the same
//! bytes one at a time, two at a time, or all at once yields the same
//! sequence of lines with the same numbering. This is what lets the reader
//! hand over whatever the I/O layer produced without any re-framing.
//!
//! Carriage return and line feed are each a terminator in their own right,
//! so a `\r\n` pair ends a line and then advances the counter once more for
//! the empty "line" between them. Input is treated as opaque bytes while
//! buffering; a line's bytes are decoded (lossily) only when it is emitted,
//! so a chunk boundary in the middle of a multi-byte character is harmless.

use std::sync::Arc;

use crate::results::Line;

/// State machine that accumulates bytes into logical lines for one file.
///
/// Each file gets its own splitter so buffering and line numbering can
/// never leak across files.
#[derive(Debug)]
pub struct LineSplitter {
    source_file: Arc<str>,
    buffer: Vec<u8>,
    line_count: u64,
}

fn is_terminator(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

impl LineSplitter {
    pub fn new(source_file: impl Into<Arc<str>>) -> Self {
        LineSplitter {
            source_file: source_file.into(),
            buffer: Vec::new(),
            line_count: 0,
        }
    }

    /// Consumes one chunk, appending any completed lines to `out`.
    ///
    /// A terminator always advances the line counter; a `Line` is emitted
    /// only when the buffer holds content, so runs of terminators skip
    /// numbers rather than producing empty lines.
    pub fn feed(&mut self, chunk: &[u8], out: &mut Vec<Line>) {
        for &byte in chunk {
            if is_terminator(byte) {
                self.line_count += 1;
                if let Some(line) = self.take_line() {
                    out.push(line);
                }
            } else {
                self.buffer.push(byte);
            }
        }
    }

    /// Signals end-of-stream, appending the final unterminated line to
    /// `out` if there is one.
    ///
    /// The counter advances exactly once here, mirroring the terminator
    /// transition, so a trailing fragment gets the number it would have
    /// had with a terminator and a file ending on a terminator emits
    /// nothing extra.
    pub fn finish(&mut self, out: &mut Vec<Line>) {
        self.line_count += 1;
        if let Some(line) = self.take_line() {
            out.push(line);
        }
    }

    fn take_line(&mut self) -> Option<Line> {
        if self.buffer.is_empty() {
            return None;
        }
        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();
        Some(Line::new(
            text,
            self.line_count,
            Arc::clone(&self.source_file),
        ))
    }
}
