//! CLI command definitions, routing, and tracing setup.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use docsnip_markdown::{ExtractOptions, Extractor};
use docsnip_shared::{AppConfig, ReadmeReport, init_config, load_config, load_config_from};
use serde::Serialize;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docsnip: extract usage examples from README markdown.
#[derive(Parser)]
#[command(
    name = "docsnip",
    version,
    about = "Extract usage examples, a lead description and display-ready markdown from READMEs.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.docsnip/docsnip.toml.
    #[arg(long = "config", global = true, env = "DOCSNIP_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the usage examples found in a README as JSON.
    Examples {
        /// Markdown file to read; `-` or omitted reads stdin.
        path: Option<PathBuf>,

        /// Skip example extraction entirely.
        #[arg(long)]
        no_examples: bool,
    },

    /// Print the README cleaned up for display.
    Sanitize {
        /// Markdown file to read; `-` or omitted reads stdin.
        path: Option<PathBuf>,
    },

    /// Print the README's lead description.
    Describe {
        /// Markdown file to read; `-` or omitted reads stdin.
        path: Option<PathBuf>,
    },

    /// Print a full report: description, examples, and sanitized markdown.
    Analyze {
        /// Markdown file to read; `-` or omitted reads stdin.
        path: Option<PathBuf>,

        /// Skip example extraction entirely.
        #[arg(long)]
        no_examples: bool,

        /// Leave the sanitized markdown out of the report.
        #[arg(long)]
        no_readme: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docsnip=info",
        1 => "docsnip=debug",
        _ => "docsnip=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_file.as_deref();
    let runtime = || Runtime::load(config_path, cli.compact);

    match cli.command {
        Command::Examples { path, no_examples } => {
            cmd_examples(&runtime()?, path.as_deref(), no_examples)
        }
        Command::Sanitize { path } => cmd_sanitize(&runtime()?, path.as_deref()),
        Command::Describe { path } => cmd_describe(&runtime()?, path.as_deref()),
        Command::Analyze {
            path,
            no_examples,
            no_readme,
        } => cmd_analyze(&runtime()?, path.as_deref(), no_examples, no_readme),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(config_path),
        },
    }
}

/// Resolved settings shared by the extraction commands.
struct Runtime {
    extractor: Extractor,
    include_examples: bool,
    pretty: bool,
}

impl Runtime {
    fn load(config_path: Option<&Path>, compact: bool) -> Result<Self> {
        let config = resolve_config(config_path)?;
        Ok(Self {
            extractor: Extractor::new(ExtractOptions::from(&config.extraction)),
            include_examples: config.extraction.include_examples,
            pretty: config.output.pretty && !compact,
        })
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_examples(rt: &Runtime, path: Option<&Path>, no_examples: bool) -> Result<()> {
    let text = read_input(path)?;
    let examples = rt
        .extractor
        .parse_examples(&text, rt.include_examples && !no_examples);
    info!(count = examples.len(), "usage examples extracted");
    print_json(&examples, rt.pretty)
}

fn cmd_sanitize(rt: &Runtime, path: Option<&Path>) -> Result<()> {
    let text = read_input(path)?;
    println!("{}", rt.extractor.sanitize(&text));
    Ok(())
}

fn cmd_describe(rt: &Runtime, path: Option<&Path>) -> Result<()> {
    let text = read_input(path)?;
    println!("{}", rt.extractor.extract_lead_description(&text));
    Ok(())
}

fn cmd_analyze(rt: &Runtime, path: Option<&Path>, no_examples: bool, no_readme: bool) -> Result<()> {
    let text = read_input(path)?;
    let extractor = &rt.extractor;

    let report = ReadmeReport::new(
        &text,
        extractor.extract_lead_description(&text),
        extractor.parse_examples(&text, rt.include_examples && !no_examples),
        (!no_readme).then(|| extractor.sanitize(&text)),
    );
    info!(
        examples = report.examples.len(),
        content_hash = %report.content_hash,
        "report assembled"
    );

    print_json(&report, rt.pretty)
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(path: Option<&Path>) -> Result<()> {
    let config = resolve_config(path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

/// Read markdown from a file, or from stdin when the path is absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading markdown file");
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))
        }
        _ => {
            debug!("reading markdown from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
