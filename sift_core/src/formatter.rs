//! Format stage: renders matches to the output sink.
//!
//! The second closed strategy pair, selected by `print_file_names`. Both
//! variants write as matches arrive; only the filenames-only variant keeps
//! any state, and that is bounded by the number of input files, never by
//! line count.

use std::io::{self, Write};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::SiftResult;
use crate::results::Match;

/// Output renderer selected by the `print_file_names` flag
#[derive(Debug)]
pub enum FormatStage {
    Lines(LineFormatter),
    FileNames(FileNameOnlyFormatter),
}

/// Writes one output line per match: `[file:][number:]text`
#[derive(Debug)]
pub struct LineFormatter {
    /// The file-name prefix appears only when more than one file was given
    show_file_name: bool,
    add_line_number: bool,
}

/// Collects distinct matching file names and writes them at end-of-stream,
/// one per line, in first-appearance order
#[derive(Debug, Default)]
pub struct FileNameOnlyFormatter {
    seen: Vec<Arc<str>>,
}

impl FormatStage {
    /// Resolves the variant for `config`. Same selection contract as the
    /// match stage: the variants partition the configuration space, and
    /// [`crate::errors::SiftError::Dispatch`] is reserved for a
    /// configuration no variant claims.
    pub fn for_config(config: &Config) -> SiftResult<Self> {
        if config.print_file_names {
            Ok(FormatStage::FileNames(FileNameOnlyFormatter::default()))
        } else {
            Ok(FormatStage::Lines(LineFormatter {
                show_file_name: config.file_names.len() > 1,
                add_line_number: config.add_line_number,
            }))
        }
    }

    /// Consumes one match. The line variant writes immediately; the
    /// filenames-only variant just records the source file.
    pub fn write_match<W: Write>(&mut self, m: &Match, out: &mut W) -> io::Result<()> {
        match self {
            FormatStage::Lines(formatter) => formatter.write_line(m, out),
            FormatStage::FileNames(formatter) => {
                formatter.record(&m.line.source_file);
                Ok(())
            }
        }
    }

    /// Signals end-of-stream; flushes anything the variant held back.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self {
            FormatStage::Lines(_) => Ok(()),
            FormatStage::FileNames(formatter) => formatter.write_names(out),
        }
    }
}

impl LineFormatter {
    fn write_line<W: Write>(&self, m: &Match, out: &mut W) -> io::Result<()> {
        if self.show_file_name {
            write!(out, "{}:", m.line.source_file)?;
        }
        if self.add_line_number {
            write!(out, "{}:", m.line.line_number)?;
        }
        writeln!(out, "{}", m.line.text)
    }
}

impl FileNameOnlyFormatter {
    fn record(&mut self, source_file: &Arc<str>) {
        if !self.seen.iter().any(|name| name == source_file) {
            self.seen.push(Arc::clone(source_file));
        }
    }

    fn write_names<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for name in &self.seen {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }
}
