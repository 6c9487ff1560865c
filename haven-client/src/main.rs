//! Haven command-line client

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use haven_client::HavenApp;
use haven_client::args::Args;
use haven_client::cli;
use haven_client::config::Config;
use haven_client::session::Session;
use haven_client::storage::FileStorage;
use haven_client::store::Store;
use haven_client::sync::LocalBus;

fn main() -> ExitCode {
    let args = Args::parse();
    let mut config = Config::load();

    // RUST_LOG wins, then --debug, then the configured level
    let level = if args.debug {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.save_config
        && let Some(dir) = &args.storage_dir
        && config.remember_storage_dir(dir)
    {
        if let Err(e) = config.save() {
            eprintln!("Could not save config: {}", e);
            return ExitCode::FAILURE;
        }
        tracing::info!(dir = %dir.display(), "saved storage directory to config");
    }

    let Some(storage_dir) = args
        .storage_dir
        .clone()
        .or_else(|| config.storage_dir.clone())
        .or_else(FileStorage::default_dir)
    else {
        eprintln!("Could not determine a storage directory; pass --storage-dir");
        return ExitCode::FAILURE;
    };
    tracing::debug!(dir = %storage_dir.display(), "using storage directory");

    let store = Store::new(
        Arc::new(FileStorage::new(storage_dir)),
        Arc::new(LocalBus::new()),
    );
    let mut app = HavenApp::new(Session::open(store));

    let outcome = cli::run(&mut app, args.command);
    if let Some(notice) = &outcome.notice {
        if notice.is_error() {
            eprintln!("{}", notice.text());
        } else {
            println!("{}\n", notice.text());
        }
    }
    print!("{}", outcome.output);

    if outcome.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
