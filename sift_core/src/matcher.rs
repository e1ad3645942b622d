//! Match stage: selects lines for output.
//!
//! A closed two-variant strategy, resolved once when the pipeline is
//! built. The variant set is fixed and the predicates over the
//! configuration are complementary, so selection cannot actually fail;
//! the dispatch error stays as the contract for the impossible case.

use regex::{Regex, RegexBuilder};

use crate::config::Config;
use crate::errors::{SiftError, SiftResult};
use crate::results::{Line, Match};

/// Line filter selected by the `invert_match` flag
#[derive(Debug)]
pub enum MatchStage {
    /// Emits lines the pattern matches, with the match's start offset
    Forward(Regex),
    /// Emits lines the pattern does not match, at offset 0
    Inverted(Regex),
}

impl MatchStage {
    /// Resolves the variant for `config`, compiling the pattern once.
    ///
    /// Compilation happens here, before any file is opened, so an invalid
    /// pattern never costs any I/O. The two variants partition the
    /// configuration space, so selection itself cannot fail;
    /// [`SiftError::Dispatch`] is the contract for a configuration no
    /// variant claims.
    pub fn for_config(config: &Config) -> SiftResult<Self> {
        let regex = compile_pattern(config)?;
        if config.invert_match {
            Ok(MatchStage::Inverted(regex))
        } else {
            Ok(MatchStage::Forward(regex))
        }
    }

    /// Applies the stage to one line, producing at most one [`Match`].
    pub fn apply(&self, line: Line) -> Option<Match> {
        match self {
            MatchStage::Forward(regex) => {
                let start = regex.find(&line.text).map(|m| m.start())?;
                // Offsets are character indices, not byte indices
                let match_offset = line.text[..start].chars().count();
                Some(Match { line, match_offset })
            }
            MatchStage::Inverted(regex) => {
                if regex.is_match(&line.text) {
                    None
                } else {
                    Some(Match {
                        line,
                        match_offset: 0,
                    })
                }
            }
        }
    }
}

fn compile_pattern(config: &Config) -> SiftResult<Regex> {
    let pattern = if config.match_entire_line {
        format!("^{}$", config.pattern)
    } else {
        config.pattern.clone()
    };
    RegexBuilder::new(&pattern)
        .case_insensitive(config.ignore_case)
        .build()
        .map_err(|e| SiftError::invalid_pattern(&config.pattern, e))
}
