use std::sync::Arc;

/// A logical line reconstructed from a file's byte stream.
///
/// The text carries no terminator. Line numbers are 1-based and count
/// terminators observed in the source file, so a blank line advances the
/// number of the next emitted line without producing a `Line` of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The content of the line, without its terminator
    pub text: String,
    /// The 1-based line number within the source file
    pub line_number: u64,
    /// The file this line was read from
    pub source_file: Arc<str>,
}

impl Line {
    pub fn new(text: impl Into<String>, line_number: u64, source_file: Arc<str>) -> Self {
        Line {
            text: text.into(),
            line_number,
            source_file,
        }
    }
}

/// A line selected by the match stage, plus where the match starts.
///
/// `match_offset` is a character index into `text`, not a byte index;
/// inverted matches carry offset 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub line: Line,
    pub match_offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let file: Arc<str> = Arc::from("notes.txt");
        let line = Line::new("hello", 3, Arc::clone(&file));
        assert_eq!(line.text, "hello");
        assert_eq!(line.line_number, 3);
        assert_eq!(&*line.source_file, "notes.txt");
    }

    #[test]
    fn test_lines_share_source_file() {
        let file: Arc<str> = Arc::from("notes.txt");
        let a = Line::new("a", 1, Arc::clone(&file));
        let b = Line::new("b", 2, Arc::clone(&file));
        assert!(Arc::ptr_eq(&a.source_file, &b.source_file));
    }
}
