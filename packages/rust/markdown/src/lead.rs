//! Lead-paragraph extraction.

use crate::headers::header_level;

/// A line must be longer than this (in characters) to count as prose.
const MIN_LINE_CHARS: usize = 20;
/// The accumulated description stays strictly under this many characters.
const MAX_DESCRIPTION_CHARS: usize = 300;

/// First prose paragraph of the document, or `None` when there is none.
///
/// Blank and header lines are skipped until the paragraph starts and end it
/// afterwards. Image and badge lines are ignored everywhere. Lines of 20
/// characters or fewer never contribute. The line that starts the paragraph
/// is taken whole whatever its length; the character limit only gates the
/// lines appended after it.
pub(crate) fn lead_paragraph(doc: &str) -> Option<String> {
    let mut description = String::new();
    let mut description_chars = 0;

    for line in doc.lines() {
        let line = line.trim();

        if line.starts_with("![") || line.starts_with("[![") {
            continue;
        }

        if line.is_empty() || header_level(line).is_some() {
            if description.is_empty() {
                continue;
            }
            break;
        }

        let line_chars = line.chars().count();
        if line_chars <= MIN_LINE_CHARS {
            continue;
        }

        if description.is_empty() {
            description.push_str(line);
            description_chars = line_chars;
            continue;
        }

        let next_chars = description_chars + 1 + line_chars;
        if next_chars >= MAX_DESCRIPTION_CHARS {
            break;
        }
        description.push(' ');
        description.push_str(line);
        description_chars = next_chars;
    }

    (!description.is_empty()).then_some(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_title_and_badges() {
        let doc = "# my_gem\n\n[![Gem Version](https://b.svg)](https://rubygems.org)\n![logo](l.png)\n\nA tiny library for parsing things quickly.\n";
        assert_eq!(
            lead_paragraph(doc).as_deref(),
            Some("A tiny library for parsing things quickly.")
        );
    }

    #[test]
    fn joins_paragraph_lines_with_spaces() {
        let doc = "Parses configuration files from disk\nand validates them against a schema.\n\nSecond paragraph is ignored entirely.";
        assert_eq!(
            lead_paragraph(doc).as_deref(),
            Some("Parses configuration files from disk and validates them against a schema.")
        );
    }

    #[test]
    fn first_line_is_never_truncated() {
        let line = "word ".repeat(100);
        let doc = format!("# Title\n\n{}\nand a second line that would overflow.", line.trim_end());
        let lead = lead_paragraph(&doc).expect("lead paragraph");
        assert_eq!(lead.chars().count(), 499);
        assert_eq!(lead, line.trim_end());
    }

    #[test]
    fn header_ends_paragraph() {
        let doc = "The first paragraph is long enough.\n## Usage\nThis line must not be included.";
        assert_eq!(
            lead_paragraph(doc).as_deref(),
            Some("The first paragraph is long enough.")
        );
    }

    #[test]
    fn short_lines_never_start_or_join() {
        let doc = "Short intro\nThis line is definitely long enough.\nok\nAnother sufficiently long line here.";
        assert_eq!(
            lead_paragraph(doc).as_deref(),
            Some("This line is definitely long enough. Another sufficiently long line here.")
        );
    }

    #[test]
    fn stops_before_reaching_limit() {
        let line = "x".repeat(100);
        let doc = format!("{line}\n{line}\n{line}\n{line}");
        let result = lead_paragraph(&doc).expect("description");
        // 100 + 1 + 100 = 201; one more line would make 302
        assert_eq!(result.len(), 201);
    }

    #[test]
    fn accepts_up_to_just_under_limit() {
        let a = "a".repeat(149);
        let b = "b".repeat(149);
        let c = "c".repeat(25);
        let doc = format!("{a}\n{b}\n{c}");
        // 149 + 1 + 149 = 299 < 300; adding c would overflow
        assert_eq!(lead_paragraph(&doc).map(|d| d.len()), Some(299));
    }

    #[test]
    fn headers_and_images_only() {
        assert_eq!(lead_paragraph("# Title\n\n![Screenshot](s.png)\n## Usage\n"), None);
        assert_eq!(lead_paragraph(""), None);
    }
}
