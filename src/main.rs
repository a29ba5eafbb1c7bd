//! Entry point for the **i3cmds** binary.
//!
//! Queries i3 once for workspaces and outputs, then writes the command
//! catalog to stdout (or `--output`).  Logs go to stderr via `env_logger`,
//! so the catalog can be piped straight into a launcher:
//!
//! ```text
//! i3cmds | dmenu | xargs -r i3-msg
//! ```

use clap::Parser;
use i3cmds::catalog::{Catalog, CatalogError};
use i3cmds::command::Section;
use i3cmds::config::{self, Config, ConfigError};
use i3cmds::i3::wm::I3Wm;
use i3cmds::sanitize::QuoteStyle;
use i3cmds::traits::WriterSink;
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "i3cmds")]
#[command(about = "Print i3/sway commands for the current workspaces and outputs")]
#[command(version)]
struct Cli {
    /// IPC socket (defaults to $I3SOCK, then $SWAYSOCK)
    #[arg(short, long)]
    socket: Option<PathBuf>,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/i3cmds/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the catalog to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only emit these sections (workspace, layout, split, move, focus)
    #[arg(long, value_delimiter = ',')]
    only: Option<Vec<Section>>,

    /// Escape double quotes inside quoted names
    #[arg(long)]
    escape_quotes: bool,

    /// Leave out outputs that are not active
    #[arg(long)]
    skip_inactive_outputs: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("cannot write catalog: {0}")]
    Output(#[from] std::io::Error),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli)?;

    let wm = match &cli.socket {
        Some(path) => I3Wm::with_socket(path),
        None => I3Wm::new(),
    };

    // Both queries finish before the output is opened.
    let catalog = Catalog::from_window_manager(&wm, &config)?;

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut sink = WriterSink::new(BufWriter::new(writer));
    catalog.write_to(&mut sink)?;
    sink.flush()?;

    info!("wrote {} command(s)", catalog.len());
    Ok(())
}

/// Load the config file and apply command-line overrides.
///
/// An explicit `--config` must load; the default location may be absent.
fn resolve_config(cli: &Cli) -> Result<Config, AppError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => load_default_config(),
    };

    if let Some(sections) = &cli.only {
        config.sections = sections.clone();
    }
    if cli.escape_quotes {
        config.quote_style = QuoteStyle::Escaped;
    }
    if cli.skip_inactive_outputs {
        config.skip_inactive_outputs = true;
    }
    Ok(config)
}

/// Try `$XDG_CONFIG_HOME/i3cmds/config.json`, falling back to compiled-in
/// defaults.
fn load_default_config() -> Config {
    let path = config::default_path();
    if !path.exists() {
        info!("no config file at {}, using defaults", path.display());
        return Config::default();
    }
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Config::default()
        }
    }
}
