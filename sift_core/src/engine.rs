//! Composition root: wires files -> lines -> matches -> formatted output.

use std::io::Write;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::SiftResult;
use crate::formatter::FormatStage;
use crate::matcher::MatchStage;
use crate::reader::FileMerger;

/// Runs one search over the configured files, writing results to `out`.
///
/// Validation and pattern compilation happen before any file is opened.
/// The pipeline is pull-driven and single-pass: each line is read, tested,
/// and rendered before the next one is pulled, so memory stays constant
/// regardless of file size. The first I/O failure aborts the run; output
/// already written for earlier files stands.
pub fn run<W: Write>(config: &Config, out: &mut W) -> SiftResult<()> {
    config.validate()?;

    let matcher = MatchStage::for_config(config)?;
    let mut formatter = FormatStage::for_config(config)?;

    info!(
        "searching {} file(s) for pattern: {}",
        config.file_names.len(),
        config.pattern
    );

    let mut matched = 0u64;
    for line in FileMerger::new(config.file_names.clone()) {
        if let Some(m) = matcher.apply(line?) {
            matched += 1;
            formatter.write_match(&m, out)?;
        }
    }
    formatter.finish(out)?;
    out.flush()?;

    debug!("search complete, {} line(s) selected", matched);
    Ok(())
}
