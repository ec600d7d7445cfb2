use std::path::PathBuf;

use arbitron::app::App;
use arbitron::config::Config;
use clap::Parser;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

/// Simulated cross-chain arbitrage feed.
#[derive(Parser, Debug)]
#[command(name = "arbitron", version, about)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when it is missing.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for a reproducible run; overrides `[updates].seed`.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final store snapshot as JSON to this path on shutdown.
    #[arg(long)]
    dump: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let loaded = if cli.config.exists() {
        Config::load(&cli.config)
    } else {
        Config::parse("")
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    if let Some(seed) = cli.seed {
        config.updates.seed = Some(seed);
    }

    config.init_logging();
    info!(config = %cli.config.display(), "arbitron starting");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut app = tokio::spawn(App::new(config).run(shutdown_rx));

    let result = tokio::select! {
        result = &mut app => result,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
            app.await
        }
    };

    let snapshot = match result {
        Ok(Ok(snapshot)) => snapshot,
        Ok(Err(e)) => {
            error!(error = %e, "Fatal error");
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "App task failed");
            std::process::exit(1);
        }
    };

    if let Some(path) = cli.dump {
        if let Err(e) = snapshot.write_json(&path) {
            error!(error = %e, path = %path.display(), "Failed to write snapshot");
            std::process::exit(1);
        }
        info!(path = %path.display(), "Snapshot written");
    }

    info!("arbitron stopped");
}
