//! Display cleanup for raw README markdown.
//!
//! Each cleanup pass is a function `&str -> String` applied in sequence.
//! Order matters: images go first so the link pass never sees `![..](..)`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Image alt text this short (in characters) or shorter is dropped with the image.
const MIN_ALT_CHARS: usize = 3;

/// Run the full cleanup pipeline on raw Markdown text.
pub(crate) fn run_pipeline(md: &str) -> String {
    let mut result = strip_images(md);

    result = flatten_relative_links(&result);
    result = collapse_blank_lines(&result);

    result.trim().to_string()
}

// ---------------------------------------------------------------------------
// Pass 1: Images and badges
// ---------------------------------------------------------------------------

/// Replace `![alt](url)` with its alt text, or remove it when the alt is too short.
fn strip_images(md: &str) -> String {
    static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("valid regex")
    });

    IMAGE_RE
        .replace_all(md, |caps: &Captures| {
            let alt = &caps[1];
            if alt.chars().count() > MIN_ALT_CHARS {
                alt.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Pass 2: Relative links
// ---------------------------------------------------------------------------

/// Flatten links whose target is not an absolute http(s) URL to their label.
///
/// Relative links point into the source repository and are dead once the
/// README is rendered anywhere else.
fn flatten_relative_links(md: &str) -> String {
    static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("valid regex")
    });

    LINK_RE
        .replace_all(md, |caps: &Captures| {
            let href = &caps[2];
            if href.starts_with("http://") || href.starts_with("https://") {
                caps[0].to_string()
            } else {
                caps[1].to_string()
            }
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Pass 3: Blank lines
// ---------------------------------------------------------------------------

/// Collapse runs of 3+ newlines into exactly 2.
fn collapse_blank_lines(md: &str) -> String {
    static MULTI_BLANK_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?:\r?\n){3,}").expect("valid regex")
    });

    MULTI_BLANK_RE.replace_all(md, "\n\n").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_images_keeps_descriptive_alt() {
        let input = "Look: ![Architecture diagram](docs/arch.png) above";
        assert_eq!(strip_images(input), "Look: Architecture diagram above");
    }

    #[test]
    fn strip_images_drops_short_alt() {
        assert_eq!(strip_images("a![CI](ci.svg)b"), "ab");
        assert_eq!(strip_images("a![](x.png)b"), "ab");
        assert_eq!(strip_images("a![Gem](x.png)b"), "ab");
        assert_eq!(strip_images("a![Gems](x.png)b"), "aGemsb");
    }

    #[test]
    fn badge_link_collapses_to_plain_link() {
        let input = "[![Build Status](https://ci.example.com/badge.svg)](https://ci.example.com)";
        let result = strip_images(input);
        assert_eq!(result, "[Build Status](https://ci.example.com)");
        assert_eq!(flatten_relative_links(&result), result);
    }

    #[test]
    fn relative_links_flattened() {
        assert_eq!(
            flatten_relative_links("See [the guide](docs/GUIDE.md) and [top](#top)."),
            "See the guide and top."
        );
    }

    #[test]
    fn absolute_links_untouched() {
        let input = "[Home](https://example.com) or [old](http://example.org/x)";
        assert_eq!(flatten_relative_links(input), input);
    }

    #[test]
    fn collapse_blank_lines_reduces_to_one_blank() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn collapse_blank_lines_handles_crlf() {
        assert_eq!(collapse_blank_lines("a\r\n\r\n\r\n\r\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\r\n\n\r\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\r\n\r\nb"), "a\r\n\r\nb");
    }

    #[test]
    fn full_pipeline_cleans_readme() {
        let input = "\n\n# Gem\n\n![CI](x.svg)\n\n\n\nUse [docs](./doc) or [site](https://gem.dev).\n\n";
        let result = run_pipeline(input);
        assert_eq!(result, "# Gem\n\nUse docs or [site](https://gem.dev).");
    }

    #[test]
    fn pipeline_is_idempotent() {
        let input = "# T\n\n[![Coverage](https://c/b.svg)](https://c)\n\n\n[a](b)\n![Logo image](l.png)\n";
        let once = run_pipeline(input);
        assert_eq!(run_pipeline(&once), once);
    }
}
