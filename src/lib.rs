#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod postfix;

extern crate regex;

/// Returns the text of the 1-based `line` in `source`, without its
/// terminating newline, or `None` when the source has fewer lines.
pub fn line_text(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.lines().nth(line as usize - 1)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_line_text() {
        let source = "primeira linha\nsegunda linha\nterceira";

        assert_eq!(super::line_text(source, 1), Some("primeira linha"));
        assert_eq!(super::line_text(source, 2), Some("segunda linha"));
        assert_eq!(super::line_text(source, 3), Some("terceira"));
        assert_eq!(super::line_text(source, 4), None);
        assert_eq!(super::line_text(source, 0), None);
    }
}
