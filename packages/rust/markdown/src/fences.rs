//! Fenced code block extraction from section text.

use std::sync::LazyLock;

use regex::Regex;

/// A line-initial ```` ``` ```` fence with an optional alphanumeric tag, up to the
/// first following ```` ``` ````. Lazy body: the first closing fence wins.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```([A-Za-z0-9]*)\n(.*?)```").expect("fence regex")
});

/// One fenced block found in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CodeBlock<'a> {
    /// Tag exactly as written after the opening fence; may be empty.
    pub language_tag: &'a str,
    /// Fence interior, untrimmed.
    pub body: &'a str,
    /// Byte offset of the opening fence within the section text.
    pub offset: usize,
}

/// Scan section text for fenced blocks, left to right, skipping blank ones.
pub(crate) fn extract_blocks(text: &str) -> Vec<CodeBlock<'_>> {
    FENCE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let language_tag = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            if body.trim().is_empty() {
                return None;
            }
            Some(CodeBlock {
                language_tag,
                body,
                offset: whole.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_tagged_block() {
        let text = "## Usage\n```ruby\nputs 1\n```";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language_tag, "ruby");
        assert_eq!(blocks[0].body, "puts 1\n");
        assert_eq!(blocks[0].offset, "## Usage\n".len());
    }

    #[test]
    fn untagged_block_has_empty_tag() {
        let blocks = extract_blocks("```\nplain\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language_tag, "");
        assert_eq!(blocks[0].offset, 0);
    }

    #[test]
    fn blocks_emitted_in_order_without_overlap() {
        let text = "intro\n```sh\nfirst\n```\nmiddle\n```rb\nsecond\n```\n";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body.trim(), "first");
        assert_eq!(blocks[1].body.trim(), "second");
        assert_eq!(blocks[1].language_tag, "rb");
        assert!(blocks[0].offset < blocks[1].offset);
        assert_eq!(&text[blocks[1].offset..blocks[1].offset + 5], "```rb");
    }

    #[test]
    fn blank_blocks_are_dropped() {
        let blocks = extract_blocks("```ruby\n   \n\n```\n```ruby\nx\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "x\n");
    }

    #[test]
    fn first_closing_fence_terminates_block() {
        let text = "```md\nouter\n```ruby\ninner\n```\n```";
        let blocks = extract_blocks(text);
        assert_eq!(blocks[0].body, "outer\n");
    }

    #[test]
    fn fence_must_start_a_line() {
        assert!(extract_blocks("text ```ruby\nx\n```").is_empty());
    }

    #[test]
    fn unterminated_fence_yields_nothing() {
        assert!(extract_blocks("```ruby\nputs 1\n").is_empty());
    }
}
