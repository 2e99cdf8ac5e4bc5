use anyhow::{Context, Result};
use axum::Server;
use sentry::{
    integrations::{anyhow::capture_anyhow, tracing as sentry_tracing},
    ClientOptions, IntoDsn,
};
use std::sync::Arc;
use structopt::StructOpt;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::broadcast,
    task,
};
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use args::Args;

mod args;
mod bridge;
mod config;
mod github;
mod http;

use bridge::Bridge;
use config::{Config, SharedConfig};
use github::GitHub;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the cli and environment
    let configuration: SharedConfig = Arc::new(Config::from(Args::from_args()));

    // Setup logging
    init_tracing(&configuration.server.log);

    // Initialize sentry
    let _guard = sentry::init(sentry_config(&configuration.server.sentry)?);

    match run_server(configuration).await {
        Ok(()) => Ok(()),
        Err(e) => {
            capture_anyhow(&e);
            Err(e)
        }
    }
}

/// Connect to the upstream and start the server
async fn run_server(configuration: SharedConfig) -> Result<()> {
    let (stop_tx, mut stop_rx) = broadcast::channel(1);
    let address = configuration.server.address;

    if configuration.bridge.token.is_none() {
        warn!("BRIDGE_TOKEN is not set, all bridge requests will be rejected");
    }

    // Setup the GitHub client
    let github = GitHub::new(
        configuration.upstream.api.clone(),
        configuration.upstream.timeout,
    )
    .context("failed to setup the github client")?;
    let bridge = Arc::new(Bridge::new(
        configuration.bridge.clone(),
        Arc::new(github),
    ));

    // Bind the server
    let server = Server::try_bind(&address)
        .with_context(|| format!("failed to bind to {}", address))?
        .serve(http::routes(configuration.clone(), bridge).into_make_service())
        .with_graceful_shutdown(async move {
            stop_rx.recv().await.ok();
        });

    // Start the server
    let handle = task::spawn(server);
    info!("listening on {}", address);

    // Wait for shutdown
    wait_for_exit()
        .await
        .context("failed to listen for event")?;
    info!("signal received, shutting down...");

    // Drain in-flight requests
    stop_tx.send(()).ok();
    handle
        .await
        .context("server task panicked")?
        .context("server encountered an error")?;

    info!("successfully shutdown, good bye!");
    Ok(())
}

/// Wait for a SIGINT or SIGTERM and then exit
async fn wait_for_exit() -> Result<()> {
    let mut int = signal(SignalKind::interrupt())?;
    let mut term = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = int.recv() => Ok(()),
        _ = term.recv() => Ok(()),
    }
}

/// Generate a registry for tracing
fn init_tracing(raw_filter: &str) {
    let filter = EnvFilter::builder().parse_lossy(raw_filter);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(filter),
        )
        .with(sentry_tracing::layer())
        .init();
}

/// Generate configuration for Sentry
fn sentry_config(url: &Option<String>) -> Result<ClientOptions> {
    let dsn = url
        .as_deref()
        .map(IntoDsn::into_dsn)
        .transpose()
        .context("failed to parse Sentry DSN")?
        .flatten();

    let options = ClientOptions {
        dsn,
        release: sentry::release_name!(),
        attach_stacktrace: true,
        ..Default::default()
    };

    Ok(options)
}
