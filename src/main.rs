//! `legendary` command-line entry point.
//!
//! Sanitizes filenames and capitalizes text from arguments or stdin, using
//! settings from `legendary.toml` when present.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;

use legendary::capitalizer::{Capitalizer, Delimiter, Locale};
use legendary::commands::{self, collect_inputs};
use legendary::config::Config;
use legendary::sanitizer::Mode;

#[derive(Parser)]
#[command(author, version, about = "Safe filenames and properly capitalized titles.")]
struct Cli {
    /// Configuration file (defaults to ./legendary.toml when it exists).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log output format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a filename safe for every common file system, one per input.
    Sanitize(SanitizeArgs),
    /// Capitalize words, one line per input.
    Capitalize(CapitalizeArgs),
}

#[derive(Args)]
struct SanitizeArgs {
    /// How much repair is allowed (overrides the configuration).
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    /// Also sanitize an absent name, before the others.
    #[arg(long)]
    null: bool,
    /// Names to sanitize; read from stdin when omitted.
    names: Vec<String>,
}

#[derive(Args)]
struct CapitalizeArgs {
    /// BCP-47 locale for case mapping, e.g. `tr` (overrides the configuration).
    #[arg(long, value_name = "TAG")]
    locale: Option<Locale>,
    /// Delimiter rule `after:C`, `before:C` or `both:C`; repeat for more.
    #[arg(long = "delimiter", value_name = "RULE")]
    delimiters: Vec<Delimiter>,
    /// Text to capitalize; read from stdin when omitted.
    texts: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Sanitize(args) => {
            let mode = args.mode.unwrap_or(config.sanitizer.mode);
            let names = if args.null && args.names.is_empty() {
                args.names
            } else {
                collect_inputs(args.names, io::stdin().lock())?
            };
            commands::sanitize::execute(&names, mode, args.null, &mut io::stdout().lock())
        },
        Commands::Capitalize(args) => {
            let mut capitalizer = config
                .capitalizer
                .build()
                .context("Invalid [capitalizer] configuration")?;
            if !args.delimiters.is_empty() {
                capitalizer = capitalizer.with_delimiters(args.delimiters);
            }
            if let Some(locale) = args.locale {
                capitalizer = capitalizer.with_locale(locale);
            }
            let texts = collect_inputs(args.texts, io::stdin().lock())?;
            commands::capitalize::execute(&texts, &capitalizer, &mut io::stdout().lock())
        },
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::load()
            .context("Failed to load legendary.toml")?
            .unwrap_or_default(),
    };

    let validation = config.validate().context("Invalid configuration")?;
    for warning in &validation.warnings {
        warn!(warning = %warning, "Configuration warning");
    }

    Ok(config)
}

/// Initialize stderr logging, filtered by `RUST_LOG` (default `warn`).
fn init_logging(format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(fmt::layer().with_writer(io::stderr)).init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}
