//! File streaming: one file's bytes to lines, and the multi-file merge.

use std::collections::VecDeque;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

use crate::errors::{SiftError, SiftResult};
use crate::results::Line;
use crate::splitter::LineSplitter;

const CHUNK_CAPACITY: usize = 8192;

/// Pull-based stream of [`Line`]s from one reader.
///
/// Bytes are read in chunks and pushed through a [`LineSplitter`]; lines
/// are handed out one at a time, so the next chunk is only read when the
/// consumer has drained the previous one. That pull discipline is the
/// backpressure for the whole pipeline.
#[derive(Debug)]
pub struct LineStream<R> {
    reader: R,
    splitter: LineSplitter,
    pending: VecDeque<Line>,
    scratch: Vec<Line>,
    chunk: Vec<u8>,
    done: bool,
}

impl LineStream<File> {
    /// Opens `file_name` for streaming. Open failures are fatal for the
    /// whole run and reported with the offending path.
    pub fn open(file_name: &str) -> SiftResult<Self> {
        let file =
            File::open(file_name).map_err(|e| SiftError::from_io(Path::new(file_name), e))?;
        Ok(Self::new(file, file_name))
    }
}

impl<R: Read> LineStream<R> {
    pub fn new(reader: R, file_name: impl Into<std::sync::Arc<str>>) -> Self {
        LineStream {
            reader,
            splitter: LineSplitter::new(file_name),
            pending: VecDeque::new(),
            scratch: Vec::new(),
            chunk: vec![0; CHUNK_CAPACITY],
            done: false,
        }
    }

    fn refill(&mut self) -> SiftResult<()> {
        match self.reader.read(&mut self.chunk) {
            Ok(0) => {
                self.done = true;
                self.splitter.finish(&mut self.scratch);
            }
            Ok(n) => {
                trace!("read {} bytes", n);
                self.splitter.feed(&self.chunk[..n], &mut self.scratch);
            }
            Err(e) => {
                self.done = true;
                return Err(e.into());
            }
        }
        self.pending.extend(self.scratch.drain(..));
        Ok(())
    }
}

impl<R: Read> Iterator for LineStream<R> {
    type Item = SiftResult<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.refill() {
                return Some(Err(e));
            }
        }
    }
}

/// Sequences the configured files into one ordered stream of lines.
///
/// Files are processed strictly one at a time: the next file is not opened
/// until the current one has fully drained, and each file gets a fresh
/// [`LineSplitter`] so numbering restarts at 1. The first failure ends the
/// stream; no later file is ever started.
pub struct FileMerger {
    file_names: std::vec::IntoIter<String>,
    current: Option<LineStream<File>>,
    failed: bool,
}

impl FileMerger {
    pub fn new(file_names: Vec<String>) -> Self {
        FileMerger {
            file_names: file_names.into_iter(),
            current: None,
            failed: false,
        }
    }
}

impl Iterator for FileMerger {
    type Item = SiftResult<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(stream) = self.current.as_mut() {
                match stream.next() {
                    Some(Ok(line)) => return Some(Ok(line)),
                    Some(Err(e)) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                    None => self.current = None,
                }
            }
            let name = self.file_names.next()?;
            debug!("streaming file: {}", name);
            match LineStream::open(&name) {
                Ok(stream) => self.current = Some(stream),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
