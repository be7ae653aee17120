//! Single-pass segmentation of a document into usage sections.
//!
//! The walk carries an explicit [`ScanState`]: outside any usage section, or
//! inside one opened at a given header level. A usage section runs until the
//! next non-usage header at the same or a shallower level; deeper headers are
//! kept as nested subsections. A new usage header always starts a fresh
//! section, so "Installation" and "Usage" come out as separate entries.
//! Only `#` header lines move the state; everything else, bare `Usage:`
//! labels included, is kept inside a section and dropped outside one.

use tracing::trace;

use crate::headers::{header_level, is_usage_header};

/// A contiguous slice of the document judged usage-relevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    /// Level (1-6) of the header that opened the section.
    pub header_level: u8,
    /// Lines of the section, opening header included.
    pub lines: Vec<&'a str>,
}

impl Section<'_> {
    /// The section's lines joined back into one text buffer.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside { level: u8 },
}

/// Split the document into usage sections, in document order.
pub(crate) fn segment(doc: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut state = ScanState::Outside;
    let mut buffer: Vec<&str> = Vec::new();

    for line in doc.lines() {
        let Some(level) = header_level(line) else {
            if let ScanState::Inside { .. } = state {
                buffer.push(line);
            }
            continue;
        };

        if is_usage_header(line) {
            if let ScanState::Inside { level: open } = state {
                flush(&mut sections, open, &mut buffer);
            }
            trace!(level, header = line, "usage section opened");
            buffer.push(line);
            state = ScanState::Inside { level };
            continue;
        }

        match state {
            ScanState::Inside { level: open } if level <= open => {
                flush(&mut sections, open, &mut buffer);
                state = ScanState::Outside;
            }
            ScanState::Inside { .. } => buffer.push(line),
            ScanState::Outside => {}
        }
    }

    if let ScanState::Inside { level } = state {
        flush(&mut sections, level, &mut buffer);
    }

    sections
}

fn flush<'a>(sections: &mut Vec<Section<'a>>, header_level: u8, buffer: &mut Vec<&'a str>) {
    sections.push(Section {
        header_level,
        lines: std::mem::take(buffer),
    });
}
