//! Core domain types shared between the extraction engine and its callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Upper bound on the number of usage examples returned for one document.
pub const MAX_EXAMPLES: usize = 10;

/// Lead description returned when a document has no usable paragraph.
pub const FALLBACK_DESCRIPTION: &str = "No description available";

// ---------------------------------------------------------------------------
// UsageExample
// ---------------------------------------------------------------------------

/// A titled code snippet pulled from a usage section of a README.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageExample {
    /// Heuristic title, e.g. `Installation` or `Basic Usage`.
    pub title: String,
    /// Prose line found just above the code fence, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fence body with surrounding whitespace trimmed. Never empty.
    pub code: String,
    /// Normalized language identifier (`ruby`, `bash`, `yaml`, `text`, ...).
    pub language: String,
}

// ---------------------------------------------------------------------------
// ReadmeReport
// ---------------------------------------------------------------------------

/// Everything docsnip knows about one markdown document, ready to serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeReport {
    /// Lead paragraph, or [`FALLBACK_DESCRIPTION`].
    pub description: String,
    /// Extracted usage examples, at most [`MAX_EXAMPLES`].
    pub examples: Vec<UsageExample>,
    /// Display-ready markdown, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    /// Hex SHA-256 of the raw input; callers may key caches on it.
    pub content_hash: String,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
}

impl ReadmeReport {
    /// Assemble a report for `source`, stamping its hash and the current time.
    pub fn new(
        source: &str,
        description: String,
        examples: Vec<UsageExample>,
        readme: Option<String>,
    ) -> Self {
        Self {
            description,
            examples,
            readme,
            content_hash: content_hash(source),
            generated_at: Utc::now(),
        }
    }
}

/// SHA-256 of a document, hex encoded.
pub fn content_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
