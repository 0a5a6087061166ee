use std::sync::Arc;

use clap::Parser;

use playlistmover::{
    config::{self, Config},
    error, info, server,
    types::AppState,
    utils,
};

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Address to bind the HTTP server to (overrides SERVER_ADDRESS)
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let state = Arc::new(AppState {
        config,
        state_nonce: utils::generate_state_nonce(),
    });

    let addr = cli.address.unwrap_or_else(config::server_addr);
    info!("Listening on {}", addr);
    server::start_api_server(&addr, state).await;
}
