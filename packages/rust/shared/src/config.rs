//! Application configuration for docsnip.
//!
//! User config lives at `~/.docsnip/docsnip.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocsnipError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docsnip.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docsnip";

// ---------------------------------------------------------------------------
// Config structs (matching docsnip.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Extraction behaviour.
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[extraction]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Run the usage-example pipeline at all.
    #[serde(default = "default_true")]
    pub include_examples: bool,

    /// Documents larger than this are not parsed.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            include_examples: true,
            max_document_bytes: default_max_document_bytes(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_max_document_bytes() -> usize {
    1024 * 1024
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docsnip/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocsnipError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docsnip/docsnip.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocsnipError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        DocsnipError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    validate_config(&config)?;

    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocsnipError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocsnipError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocsnipError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Reject values that would make every document fail to parse.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.extraction.max_document_bytes == 0 {
        return Err(DocsnipError::config(
            "extraction.max_document_bytes must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("include_examples"));
        assert!(toml_str.contains("max_document_bytes"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert!(parsed.extraction.include_examples);
        assert_eq!(parsed.extraction.max_document_bytes, 1024 * 1024);
        assert!(parsed.output.pretty);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[extraction]
include_examples = false
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert!(!config.extraction.include_examples);
        assert_eq!(config.extraction.max_document_bytes, 1024 * 1024);
        assert!(config.output.pretty);
    }

    #[test]
    fn zero_document_limit_rejected() {
        let mut config = AppConfig::default();
        config.extraction.max_document_bytes = 0;
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_document_bytes"));
    }

    #[test]
    fn load_config_from_file() {
        let dir = std::env::temp_dir().join(format!("docsnip-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[output]\npretty = false\n").expect("write config");

        let config = load_config_from(&path).expect("load");
        assert!(!config.output.pretty);
        assert!(config.extraction.include_examples);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/docsnip/docsnip.toml"))
            .expect_err("missing file");
        assert!(matches!(err, DocsnipError::Io { .. }));
    }
}
