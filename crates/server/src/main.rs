use anyhow::Context;
use clap::Parser;
use readproxy_core::Reader;
use readproxy_server::{AppState, Args, logging, serve, shutdown_signal};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_format)?;

    let reader = Reader::new(args.fetch_config(), args.extract_config()).context("Failed to build HTTP client")?;
    let addr = args.listen_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server is listening on {}", listener.local_addr()?);

    serve(listener, AppState::new(reader), shutdown_signal()).await
}
