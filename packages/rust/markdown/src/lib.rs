//! Usage-example extraction and display cleanup for README-style markdown.
//!
//! Three independent operations run over a raw markdown string:
//! - [`parse_examples`] finds usage/installation sections, pulls their code
//!   fences, titles and describes each one, deduplicates and caps the list
//! - [`sanitize`] strips badges, flattens relative links and normalizes
//!   blank lines for display
//! - [`extract_lead_description`] returns the document's first prose paragraph
//!
//! None of them fail. Internal errors are reported to a [`DiagnosticSink`]
//! and replaced by a safe default.

mod classify;
mod cleanup;
mod dedup;
mod fences;
mod headers;
mod lead;
mod sections;
mod sink;

use std::sync::Arc;

use tracing::{debug, instrument};

use docsnip_shared::{
    DocsnipError, ExtractionConfig, FALLBACK_DESCRIPTION, Result, UsageExample,
};

pub use sink::{DiagnosticSink, Operation, SilentSink, TracingSink};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Limits applied before any parsing happens.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Documents larger than this many bytes are rejected.
    pub max_document_bytes: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from(&ExtractionConfig::default())
    }
}

impl From<&ExtractionConfig> for ExtractOptions {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            max_document_bytes: config.max_document_bytes,
        }
    }
}

/// Extraction entry point with a configurable failure sink.
#[derive(Clone)]
pub struct Extractor {
    options: ExtractOptions,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Extractor {
    /// Extractor reporting failures through [`TracingSink`].
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Extract up to ten titled usage examples.
    ///
    /// Returns an empty list without scanning when `include_examples` is false.
    #[instrument(skip_all, fields(len = text.len(), include_examples = include_examples))]
    pub fn parse_examples(&self, text: &str, include_examples: bool) -> Vec<UsageExample> {
        if !include_examples || text.is_empty() {
            return Vec::new();
        }
        self.fail_open(Operation::ParseExamples, try_parse_examples(text, &self.options), Vec::new)
    }

    /// Clean the document for display; returns the input unchanged on failure.
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn sanitize(&self, text: &str) -> String {
        self.fail_open(Operation::Sanitize, try_sanitize(text, &self.options), || {
            text.to_string()
        })
    }

    /// First prose paragraph, or `"No description available"`.
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn extract_lead_description(&self, text: &str) -> String {
        self.fail_open(
            Operation::ExtractDescription,
            try_lead_description(text, &self.options),
            || FALLBACK_DESCRIPTION.to_string(),
        )
    }

    fn fail_open<T>(
        &self,
        operation: Operation,
        result: Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.sink.parse_failure(operation, &e);
                fallback()
            }
        }
    }
}

/// [`Extractor::parse_examples`] with default options and tracing diagnostics.
pub fn parse_examples(text: &str, include_examples: bool) -> Vec<UsageExample> {
    Extractor::default().parse_examples(text, include_examples)
}

/// [`Extractor::sanitize`] with default options and tracing diagnostics.
pub fn sanitize(text: &str) -> String {
    Extractor::default().sanitize(text)
}

/// [`Extractor::extract_lead_description`] with default options and tracing diagnostics.
pub fn extract_lead_description(text: &str) -> String {
    Extractor::default().extract_lead_description(text)
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

/// Segment → extract fences → classify → dedup.
fn try_parse_examples(text: &str, opts: &ExtractOptions) -> Result<Vec<UsageExample>> {
    check_size(text, opts)?;

    let sections = sections::segment(text);
    let mut examples = Vec::new();

    for section in &sections {
        let body = section.text();
        let blocks = fences::extract_blocks(&body);
        debug!(
            header_level = section.header_level,
            lines = section.lines.len(),
            blocks = blocks.len(),
            "usage section scanned"
        );

        for block in &blocks {
            let preceding = body.get(..block.offset).ok_or_else(|| {
                DocsnipError::parse(
                    "classify",
                    format!("fence offset {} is not a char boundary", block.offset),
                )
            })?;
            examples.push(classify::classify(block, preceding));
        }
    }

    let found = examples.len();
    let examples = dedup::dedup_examples(examples);
    debug!(
        sections = sections.len(),
        found,
        kept = examples.len(),
        "usage examples extracted"
    );

    Ok(examples)
}

fn try_sanitize(text: &str, opts: &ExtractOptions) -> Result<String> {
    check_size(text, opts)?;
    Ok(cleanup::run_pipeline(text))
}

fn try_lead_description(text: &str, opts: &ExtractOptions) -> Result<String> {
    check_size(text, opts)?;
    Ok(lead::lead_paragraph(text).unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()))
}

fn check_size(text: &str, opts: &ExtractOptions) -> Result<()> {
    if text.len() > opts.max_document_bytes {
        return Err(DocsnipError::validation(format!(
            "document is {} bytes, limit is {}",
            text.len(),
            opts.max_document_bytes
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
