//! Title, description, and language heuristics for extracted code blocks.
//!
//! Titles dispatch on the raw fence tag (grouped into a [`LanguageFamily`]),
//! while the stored language is the normalized tag. The two can disagree:
//! a `rakefile` fence is stored as `ruby` but titled `Code Example`.

use std::sync::LazyLock;

use regex::Regex;

use docsnip_shared::UsageExample;

use crate::fences::CodeBlock;

/// Exclusive bounds on description length, in characters.
const MIN_DESCRIPTION_CHARS: usize = 10;
const MAX_DESCRIPTION_CHARS: usize = 200;

/// Turn a code block into a titled example.
///
/// `preceding` is the section text up to the block's opening fence.
pub(crate) fn classify(block: &CodeBlock<'_>, preceding: &str) -> UsageExample {
    let code = block.body.trim();
    let family = LanguageFamily::from_raw_tag(block.language_tag);

    UsageExample {
        title: title_for(family, code).to_string(),
        description: description_before(preceding),
        code: code.to_string(),
        language: normalize_language(block.language_tag),
    }
}

// ---------------------------------------------------------------------------
// Titles
// ---------------------------------------------------------------------------

/// Language groups that get dedicated title heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LanguageFamily {
    Shell,
    Ruby,
    Gemfile,
    Yaml,
    Json,
    Template,
    Other,
}

impl LanguageFamily {
    /// Classify a raw fence tag. Aliases are matched here, not normalized.
    pub fn from_raw_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "bash" | "shell" | "sh" => Self::Shell,
            "ruby" | "rb" => Self::Ruby,
            "gemfile" => Self::Gemfile,
            "yaml" | "yml" => Self::Yaml,
            "json" => Self::Json,
            "erb" | "html" => Self::Template,
            _ => Self::Other,
        }
    }
}

/// Pick a human-readable title for a trimmed code body.
pub(crate) fn title_for(family: LanguageFamily, code: &str) -> &'static str {
    let first_line = code.lines().next().unwrap_or("");

    match family {
        LanguageFamily::Shell => {
            if first_line.contains("gem install") || first_line.contains("bundle add") {
                "Installation"
            } else if first_line.contains("bundle install") || first_line.contains("bundle exec")
            {
                "Bundle Usage"
            } else {
                "Command Line Usage"
            }
        }
        LanguageFamily::Ruby => {
            if first_line.starts_with("require ") || first_line.starts_with("require_relative") {
                "Basic Usage"
            } else if code.contains("class ") || code.contains("module ") {
                "Class/Module Definition"
            } else if code.contains("def ") {
                "Method Example"
            } else {
                "Ruby Example"
            }
        }
        LanguageFamily::Gemfile => "Gemfile Configuration",
        LanguageFamily::Yaml => {
            if code.contains("gem:") || code.contains("rails:") {
                "Configuration"
            } else {
                "YAML Configuration"
            }
        }
        LanguageFamily::Json => "JSON Configuration",
        LanguageFamily::Template => "Template Example",
        LanguageFamily::Other => "Code Example",
    }
}

// ---------------------------------------------------------------------------
// Language normalization
// ---------------------------------------------------------------------------

/// Canonical language identifier for the stored `language` field.
pub(crate) fn normalize_language(tag: &str) -> String {
    if tag.is_empty() {
        return "text".to_string();
    }

    let lower = tag.to_ascii_lowercase();
    let canonical = match lower.as_str() {
        "rb" | "gemfile" | "rakefile" => "ruby",
        "sh" | "shell" => "bash",
        "yml" => "yaml",
        "md" => "markdown",
        _ => return lower,
    };
    canonical.to_string()
}

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

/// Lines that open or close with punctuation typical of code.
const CODE_EDGE_CHARS: &[char] = &['{', '}', '[', ']', '(', ')', ';', ','];

static CODE_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:class|def|module|require|include|extend|if|unless|case|when)\s")
        .expect("code keyword regex")
});

static GEM_DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^gem\s+(?:'[^']*'|"[^"]*")"#).expect("gem declaration regex")
});

/// Find a prose line describing a code block, given the section text before it.
///
/// Walks backwards from the fence, skipping blank lines and `#` lines. Only
/// the first other line is considered; if it does not qualify, there is no
/// description.
pub(crate) fn description_before(preceding: &str) -> Option<String> {
    let candidate = preceding
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))?;

    let chars = candidate.chars().count();
    if chars <= MIN_DESCRIPTION_CHARS || chars >= MAX_DESCRIPTION_CHARS {
        return None;
    }
    if looks_like_code(candidate) {
        return None;
    }

    let text = candidate
        .strip_prefix("* ")
        .or_else(|| candidate.strip_prefix("- "))
        .unwrap_or(candidate);
    Some(text.to_string())
}

/// Textual smell test for lines that are code rather than prose.
pub(crate) fn looks_like_code(line: &str) -> bool {
    line.starts_with(CODE_EDGE_CHARS)
        || line.ends_with(CODE_EDGE_CHARS)
        || CODE_KEYWORD_RE.is_match(line)
        || line.starts_with('$')
        || line.starts_with('#')
        || line.starts_with("//")
        || GEM_DECLARATION_RE.is_match(line)
}
