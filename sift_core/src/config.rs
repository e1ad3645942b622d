use crate::errors::{SiftError, SiftResult};

/// Configuration for one search run, resolved once and immutable thereafter
#[derive(Debug, Clone)]
pub struct Config {
    /// The pattern to search for (regex)
    pub pattern: String,

    /// Files to search, in command-line order
    pub file_names: Vec<String>,

    /// Prefix each output line with its 1-based line number
    pub add_line_number: bool,

    /// Print only the distinct names of files containing matches
    pub print_file_names: bool,

    /// Case-insensitive matching
    pub ignore_case: bool,

    /// Print lines that do not match instead of lines that do
    pub invert_match: bool,

    /// Anchor the pattern so it must match the entire line
    pub match_entire_line: bool,
}

impl Config {
    /// Creates a new configuration with the given pattern and input files;
    /// all behavior flags default to off
    pub fn new(pattern: impl Into<String>, file_names: Vec<String>) -> Self {
        Config {
            pattern: pattern.into(),
            file_names,
            add_line_number: false,
            print_file_names: false,
            ignore_case: false,
            invert_match: false,
            match_entire_line: false,
        }
    }

    /// Builder method to prefix output lines with line numbers
    pub fn with_line_numbers(mut self, add_line_number: bool) -> Self {
        self.add_line_number = add_line_number;
        self
    }

    /// Builder method to print distinct matching file names only
    pub fn with_file_names_only(mut self, print_file_names: bool) -> Self {
        self.print_file_names = print_file_names;
        self
    }

    /// Builder method to set case-insensitive matching
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Builder method to select non-matching lines
    pub fn with_invert_match(mut self, invert_match: bool) -> Self {
        self.invert_match = invert_match;
        self
    }

    /// Builder method to anchor the pattern to the whole line
    pub fn with_match_entire_line(mut self, match_entire_line: bool) -> Self {
        self.match_entire_line = match_entire_line;
        self
    }

    /// Checks the configuration and reports every problem found, not just
    /// the first. Runs before any file is opened.
    pub fn validate(&self) -> SiftResult<()> {
        let mut errors = Vec::new();

        if self.pattern.is_empty() {
            errors.push("no pattern supplied".to_string());
        }

        if self.file_names.is_empty() {
            errors.push("no file names supplied".to_string());
        }

        for (index, name) in self.file_names.iter().enumerate() {
            if name.is_empty() {
                errors.push(format!("file name {} is empty", index + 1));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SiftError::invalid_config(errors))
        }
    }
}
