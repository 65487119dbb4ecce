//! ContainerSort configuration tool: entry point.
//!
//! Runs the same [`ConfigurationService`] the plugin uses at start-up against
//! a data directory on disk.  Server operators use it to create a fresh
//! `config.json`, to see what a plugin update will do to their file, or to
//! print the defaults of a given version.
//!
//! # Usage
//!
//! ```text
//! containersort-config [OPTIONS] [COMMAND]
//!
//! Commands:
//!   show      Load (creating or migrating if needed) and print the config [default]
//!   reload    Load, reload once more, and print the result
//!   defaults  Print the defaults for --plugin-version without touching disk
//!   path      Print the resolved config.json path
//!
//! Options:
//!   --data-dir       <PATH>     Plugin data directory [default: .]
//!   --plugin-version <VERSION>  Host-reported plugin version, e.g. 2.3.1-SNAPSHOT
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                 | Description               |
//! |--------------------------|---------------------------|
//! | `CONTAINERSORT_DATA_DIR` | Plugin data directory     |
//! | `CONTAINERSORT_VERSION`  | Host-reported version     |
//!
//! Log output goes to stderr so the printed JSON can be piped.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use containersort_core::Configuration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use containersort_config::{ConfigurationService, JsonFileStore, StaticHost};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// ContainerSort configuration tool.
#[derive(Debug, Parser)]
#[command(
    name = "containersort-config",
    about = "Create, migrate, and inspect the ContainerSort config.json",
    version
)]
struct Cli {
    /// Plugin data directory containing `config.json`.
    ///
    /// Created if it does not exist yet.
    #[arg(long, default_value = ".", env = "CONTAINERSORT_DATA_DIR")]
    data_dir: PathBuf,

    /// Version reported by the host for the plugin.
    ///
    /// Anything after the first `-` is ignored.  When omitted the version is
    /// treated as empty, like a host without plugin metadata.
    #[arg(long, env = "CONTAINERSORT_VERSION")]
    plugin_version: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Load (creating or migrating if needed) and print the active config.
    Show,
    /// Load, then reload once more and print the result.
    Reload,
    /// Print the defaults for the given version without touching disk.
    Defaults,
    /// Print the resolved config.json path.
    Path,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Show);

    match command {
        Command::Defaults => {
            let defaults = Configuration::for_host_version(cli.plugin_version.as_deref());
            print_json(&defaults)
        }
        Command::Path => {
            let store = JsonFileStore::new(&cli.data_dir);
            println!("{}", store.config_file().display());
            Ok(())
        }
        Command::Show | Command::Reload => {
            std::fs::create_dir_all(&cli.data_dir).with_context(|| {
                format!("could not create data directory {}", cli.data_dir.display())
            })?;

            let host = StaticHost::new(&cli.data_dir, cli.plugin_version.clone());
            let mut service = ConfigurationService::new(&host).with_context(|| {
                format!("could not load config from {}", cli.data_dir.display())
            })?;

            if command == Command::Reload {
                service
                    .reload_config()
                    .context("could not reload config")?;
            }

            info!(path = %service.config_path().display(), "configuration ready");
            print_json(&service.configuration())
        }
    }
}

fn print_json(config: &Configuration) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config).context("could not serialize config")?;
    println!("{json}");
    Ok(())
}
