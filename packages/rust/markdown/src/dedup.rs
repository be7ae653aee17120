//! Whitespace-insensitive deduplication and capping of examples.

use std::collections::HashSet;

use docsnip_shared::{MAX_EXAMPLES, UsageExample};

/// Keep the first example per whitespace-normalized code body, then cap.
pub(crate) fn dedup_examples(examples: Vec<UsageExample>) -> Vec<UsageExample> {
    let mut seen: HashSet<String> = HashSet::new();

    examples
        .into_iter()
        .filter(|example| seen.insert(dedup_key(&example.code)))
        .take(MAX_EXAMPLES)
        .collect()
}

/// Collapse every whitespace run to a single space and trim.
fn dedup_key(code: &str) -> String {
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(code: &str) -> UsageExample {
        UsageExample {
            title: "Code Example".into(),
            description: None,
            code: code.into(),
            language: "text".into(),
        }
    }

    #[test]
    fn dedup_key_collapses_whitespace() {
        assert_eq!(dedup_key("  puts  \"hello\"\n\n\tworld "), "puts \"hello\" world");
    }

    #[test]
    fn first_occurrence_wins() {
        let mut first = example("puts \"hello\"");
        first.title = "Basic Usage".into();
        let examples = vec![first, example("other"), example("puts   \"hello\"")];

        let result = dedup_examples(examples);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Basic Usage");
        assert_eq!(result[1].code, "other");
    }

    #[test]
    fn caps_at_max_examples() {
        let examples: Vec<_> = (0..15).map(|i| example(&format!("run {i}"))).collect();
        let result = dedup_examples(examples);
        assert_eq!(result.len(), MAX_EXAMPLES);
        assert_eq!(result[0].code, "run 0");
        assert_eq!(result[9].code, "run 9");
    }

    #[test]
    fn cap_applies_after_dedup() {
        let mut examples = vec![example("same"); 5];
        examples.extend((0..10).map(|i| example(&format!("unique {i}"))));
        let result = dedup_examples(examples);
        assert_eq!(result.len(), 10);
        assert_eq!(result[0].code, "same");
        assert_eq!(result[9].code, "unique 8");
    }
}
