//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}

/// Byte offset of a 1-based line and column, clamped to the content length
pub fn line_col_to_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}

/// Single-character span at a 1-based line and column
pub fn span_at(content: &str, line: usize, column: usize) -> SourceSpan {
    let offset = line_col_to_offset(content, line, column);
    let len = usize::from(offset < content.len());
    SourceSpan::from((offset, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let content = "{\n  \"name\": 1,\n}\n";
        assert_eq!(line_col_to_offset(content, 1, 1), 0);
        assert_eq!(line_col_to_offset(content, 2, 3), 4);
        assert_eq!(line_col_to_offset(content, 3, 1), 15);
        assert_eq!(line_col_to_offset(content, 99, 1), content.len());
    }

    #[test]
    fn test_span_at_end_of_input_is_empty() {
        let content = "{";
        let span = span_at(content, 1, 2);
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 0);
    }
}
