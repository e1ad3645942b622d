use clap::Parser;
use sift_core::{engine, Config, SiftError};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Searches files for lines matching a pattern
#[derive(Parser, Debug)]
#[command(name = "sift", version, about, long_about = None)]
struct Cli {
    /// Prefix each output line with its 1-based line number
    #[arg(short = 'n')]
    line_number: bool,

    /// Print only the names of files containing matches
    #[arg(short = 'l')]
    files_with_matches: bool,

    /// Match case-insensitively
    #[arg(short = 'i')]
    ignore_case: bool,

    /// Invert matching: print lines that do not match
    #[arg(short = 'v')]
    invert_match: bool,

    /// Match only when the pattern matches the entire line
    #[arg(short = 'x')]
    line_regexp: bool,

    /// Pattern to search for
    pattern: Option<String>,

    /// Files to search, in order
    files: Vec<String>,
}

impl Cli {
    /// Missing positionals pass through as empty so the validator can
    /// report everything wrong at once instead of stopping at the first
    /// problem.
    fn into_config(self) -> Config {
        Config::new(self.pattern.unwrap_or_default(), self.files)
            .with_line_numbers(self.line_number)
            .with_file_names_only(self.files_with_matches)
            .with_ignore_case(self.ignore_case)
            .with_invert_match(self.invert_match)
            .with_match_entire_line(self.line_regexp)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().into_config();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match engine::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Push out whatever was rendered before the failure
            let _ = out.flush();
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &SiftError) {
    error!("run failed: {}", err);
    match err {
        SiftError::InvalidConfig(errors) => {
            eprintln!("sift: one or more errors have occurred:");
            for message in errors {
                eprintln!("  {message}");
            }
        }
        other => eprintln!("sift: {other}"),
    }
}
