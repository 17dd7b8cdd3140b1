//! Bundleboard CLI and REST API entry point.
//!
//! Binary name: `bboard`
//!
//! Parses CLI arguments, wires the service to the JSON file store, then
//! dispatches to a command handler or starts the REST API server.

mod http;
mod state;

use clap::{Parser, Subcommand};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use bundleboard_infra::config::load_server_config;
use bundleboard_infra::storage::{data_file_path, resolve_data_dir};
use state::AppState;

#[derive(Parser)]
#[command(name = "bboard", version, about = "Bundle scoring report API")]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Interface to bind (overrides config.toml)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate the bundles data file and report its contents
    Check,

    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,bundleboard=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bboard", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    let config = load_server_config(&data_dir).await;
    let data_file = config
        .data_file
        .clone()
        .unwrap_or_else(|| data_file_path(&data_dir));

    let state = AppState::init(data_file).await?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(
                addr = %addr,
                data_file = %state.data_file.display(),
                "bundle api listening"
            );

            println!(
                "  {} Bundleboard API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {} Data file: {}",
                console::style("•").dim(),
                console::style(state.data_file.display()).dim()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Check => {
            let bundles = state.bundle_service.list_bundles().await?;
            let recipe_count: usize = bundles.iter().map(|b| b.recipes.len()).sum();
            let prompt_count: usize = bundles
                .iter()
                .flat_map(|b| &b.recipes)
                .map(|r| r.prompts.len())
                .sum();

            if cli.json {
                let report = serde_json::json!({
                    "data_file": state.data_file,
                    "bundles": bundles.len(),
                    "recipes": recipe_count,
                    "prompts": prompt_count,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!();
                println!(
                    "  {} {} parses cleanly",
                    console::style("✓").green(),
                    console::style(state.data_file.display()).cyan()
                );
                println!(
                    "  {} bundles, {} recipes, {} prompts",
                    bundles.len(),
                    recipe_count,
                    prompt_count
                );
                println!();
            }
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
