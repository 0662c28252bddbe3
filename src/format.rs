//! Plain-text message formatting.
//!
//! Assistant replies arrive as plain text with `\n` line breaks and
//! lightweight `* ` / `- ` bullet markers. This module turns such text into
//! a segment list the renderer can paint directly: plain lines stay lines,
//! and maximal consecutive runs of bullet lines are grouped into a single
//! list segment. Rendering segments through egui labels means the content is
//! never interpreted as markup, so untrusted text cannot inject anything.

/// One formatted piece of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A plain line of text (may be empty, which renders as a blank line).
    Line(String),
    /// A run of consecutive bullet items, grouped into one list.
    List(Vec<String>),
}

/// Returns the bullet content if the line is a bullet line.
///
/// A bullet line starts with `* ` or `- ` and has at least one character
/// after the marker. Whitespace-only content still counts as an item; a bare
/// marker (`"* "` with nothing after it) does not.
fn bullet_content(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))?;
    if rest.is_empty() {
        return None;
    }
    Some(rest)
}

/// Format a plain-text message into renderable segments.
///
/// Splits on `\n` and scans the lines in order, tracking whether the scanner
/// is inside a bullet run. A run opens on the first bullet line after a
/// non-bullet line and closes on the next non-bullet line or at end of
/// input, so a message that ends mid-list still produces a closed list.
pub fn format_message(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current_list: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if let Some(item) = bullet_content(line) {
            current_list.push(item.to_string());
        } else {
            if !current_list.is_empty() {
                segments.push(Segment::List(std::mem::take(&mut current_list)));
            }
            segments.push(Segment::Line(line.to_string()));
        }
    }

    // Input ended while still inside a list run.
    if !current_list.is_empty() {
        segments.push(Segment::List(current_list));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_produces_no_segments() {
        assert!(format_message("").is_empty());
    }

    #[test]
    fn test_no_bullets_only_line_segments() {
        let segments = format_message("hello\nworld\n\nbye");
        assert_eq!(
            segments,
            vec![
                Segment::Line("hello".into()),
                Segment::Line("world".into()),
                Segment::Line("".into()),
                Segment::Line("bye".into()),
            ]
        );
    }

    #[test]
    fn test_all_bullets_single_list() {
        let segments = format_message("* one\n* two\n- three");
        assert_eq!(
            segments,
            vec![Segment::List(vec![
                "one".into(),
                "two".into(),
                "three".into()
            ])]
        );
    }

    #[test]
    fn test_mixed_lines_and_list_run() {
        let segments = format_message("A\n* B\n* C\nD");
        assert_eq!(
            segments,
            vec![
                Segment::Line("A".into()),
                Segment::List(vec!["B".into(), "C".into()]),
                Segment::Line("D".into()),
            ]
        );
    }

    #[test]
    fn test_trailing_list_run_is_closed() {
        let segments = format_message("Precautions:\n- rest\n- hydrate");
        assert_eq!(
            segments.last(),
            Some(&Segment::List(vec!["rest".into(), "hydrate".into()]))
        );
    }

    #[test]
    fn test_two_separate_list_runs() {
        let segments = format_message("* a\nmid\n* b");
        assert_eq!(
            segments,
            vec![
                Segment::List(vec!["a".into()]),
                Segment::Line("mid".into()),
                Segment::List(vec!["b".into()]),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_bullet_content_is_an_item() {
        // Matches the backend's formatting convention: "*  " has one space
        // of content after the marker and is still a list item.
        let segments = format_message("*  \n* real");
        assert_eq!(
            segments,
            vec![Segment::List(vec![" ".into(), "real".into()])]
        );
    }

    #[test]
    fn test_bare_marker_is_plain_text() {
        let segments = format_message("* ");
        assert_eq!(segments, vec![Segment::Line("* ".into())]);
    }

    #[test]
    fn test_dash_without_space_is_plain_text() {
        let segments = format_message("-not a bullet");
        assert_eq!(segments, vec![Segment::Line("-not a bullet".into())]);
    }
}
