//! Reminisce CLI and HTTP server entry point.
//!
//! Binary name: `reminisce`
//!
//! Parses CLI arguments, loads configuration, wires the upstream clients,
//! then dispatches to a CLI command or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing::instrument::WithSubscriber;

use reminisce_infra::config::{load_service_config, resolve_config_path};
use reminisce_observe::tracing_setup::{bootstrap_dispatch, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or services
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "reminisce", &mut std::io::stdout());
        return Ok(());
    }

    let filter = cli.log_filter();
    let config_path = resolve_config_path(cli.config.as_deref());
    let config = load_service_config(&config_path)
        .with_subscriber(bootstrap_dispatch(filter))
        .await;

    init_tracing(&config.logging, filter)?;
    tracing::debug!(path = %config_path.display(), "Configuration loaded");

    let result = run(cli, config).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli, config: reminisce_types::config::ServiceConfig) -> anyhow::Result<()> {
    let state = AppState::init(&config)?;

    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Reminisce listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, "HTTP server started");

            let router = http::router::build_router(state);
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("HTTP server stopped");
        }

        Commands::Store { text, metadata } => {
            cli::memory::store_memory(&state, &text, metadata.as_deref(), cli.json).await?;
        }

        Commands::Recall { query } => {
            cli::memory::recall_memory(&state, &query, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
