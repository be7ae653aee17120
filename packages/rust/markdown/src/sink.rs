//! Where extraction failures are reported.
//!
//! The public operations never return errors. When a stage fails they fall
//! back to a safe value and hand the error to a [`DiagnosticSink`].

use tracing::warn;

use docsnip_shared::DocsnipError;

/// Public operation that hit a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ParseExamples,
    Sanitize,
    ExtractDescription,
}

impl Operation {
    /// Stable name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParseExamples => "parse_examples",
            Self::Sanitize => "sanitize",
            Self::ExtractDescription => "extract_description",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives failures that were swallowed by a fail-open operation.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per failed operation, after the fallback value is chosen.
    fn parse_failure(&self, operation: Operation, error: &DocsnipError);
}

/// Default sink: emits a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn parse_failure(&self, operation: Operation, error: &DocsnipError) {
        warn!(operation = %operation, error = %error, "markdown extraction failed, using fallback");
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn parse_failure(&self, _operation: Operation, _error: &DocsnipError) {}
}
