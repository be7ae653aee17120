//! Line-level header recognition.
//!
//! A header is a line opening with 1-6 `#` characters followed by whitespace.
//! A usage header is a header (or a bare label line) whose text names one of
//! the install/usage topics READMEs conventionally put code under. Section
//! segmentation only asks about lines that are already headers, so a bare
//! label never opens a section on its own.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `#`-style headers and captures the hash run.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s").expect("header regex")
});

/// Matches a header whose entire text is a usage/installation topic.
static USAGE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^#{1,6}\s+(?:usage|use|using|how to use|getting started|quick start|examples?|basic usage|installation)\s*$",
    )
    .expect("usage header regex")
});

/// Matches bare `Usage:` / `Examples` / `Installation:` label lines.
static USAGE_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:usage|examples|installation):?\s*$").expect("usage label regex")
});

/// Nesting level of a header line, or `None` when the line is not a header.
pub(crate) fn header_level(line: &str) -> Option<u8> {
    HEADER_RE
        .captures(line)
        .map(|caps| caps[1].len() as u8)
}

/// Whether the line opens a usage section.
pub(crate) fn is_usage_header(line: &str) -> bool {
    let line = line.trim_end();
    USAGE_HEADER_RE.is_match(line) || USAGE_LABEL_RE.is_match(line)
}
