//! # Storefront Runtime
//!
//! Entry point for the `storefront` CLI.
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments
//! 2. Load configuration (defaults, then env, then flags)
//! 3. Initialize logging
//! 4. Build the container (hydrates cart and admin session)
//! 5. Run one command, or the interactive shell

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use storefront_runtime::cli::{self, Cli, Command};
use storefront_runtime::container::StorageBackend;
use storefront_runtime::{load_config, StorefrontContainer};

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = load_config();
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = dir;
    }
    if args.memory {
        config.storage.backend = StorageBackend::Memory;
    }

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!(
        data_dir = %config.storage.data_dir.display(),
        backend = ?config.storage.backend,
        "Loaded configuration"
    );

    let mut container = StorefrontContainer::new(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Shell => {
            let stdin = io::stdin();
            cli::run_shell(&mut container, &mut stdin.lock(), &mut out)
        }
        command => cli::execute(&mut container, command, &mut out),
    }
}
