//! flatctl - Main entry point

use std::sync::Arc;

use clap::Parser;
use log::{debug, info};

use flatctl::{run_get_command, ApiEnv, Cli, Credentials, FlatfileClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting flatctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: host={}, batch={}", cli.host, cli.batch);

    let credentials = Credentials::from_env();
    let client = FlatfileClient::new(cli.host.clone());
    let env = ApiEnv::new(Arc::new(client));

    if let Err(err) = run_get_command(&env, &credentials, &cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    info!("Completed successfully");
}
