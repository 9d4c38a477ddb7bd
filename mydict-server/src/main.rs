//! mydict - personal dictionary web service
//!
//! Registers terms (word, reading, description, image URL) in a SQLite store
//! and lists them grouped or sorted by Japanese reading.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mydict_common::config::{database_path, resolve_root_folder, TomlConfig, ROOT_FOLDER_ENV};
use mydict_common::db;
use mydict_server::{build_router, AppState};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_STATIC_DIR: &str = "static";

/// Command-line arguments for mydict
#[derive(Parser, Debug)]
#[command(name = "mydict")]
#[command(about = "Personal dictionary web service")]
#[command(version)]
struct Args {
    /// Folder holding mydict.db (falls back to MYDICT_ROOT_FOLDER, config file, OS default)
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "MYDICT_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long, env = "MYDICT_BIND")]
    bind: Option<String>,

    /// Directory served under /static
    #[arg(long, env = "MYDICT_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Keep terms in memory only; nothing is written to disk
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mydict_server=info,mydict_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Log build identification before touching the database
    info!(
        "Starting MyDictionary (mydict) v{} [{}] built {} ({}), {} store",
        env!("CARGO_PKG_VERSION"),
        env!("MYDICT_GIT_DESCRIBE"),
        env!("MYDICT_BUILD_TIMESTAMP"),
        env!("MYDICT_BUILD_PROFILE"),
        if args.in_memory { "in-memory" } else { "SQLite file" }
    );

    let toml_config = TomlConfig::load_or_default();

    let pool = if args.in_memory {
        db::init_memory_database()
            .await
            .context("Failed to initialize in-memory database")?
    } else {
        let root_folder =
            resolve_root_folder(args.root_folder.as_deref(), ROOT_FOLDER_ENV, &toml_config);
        let db_path = database_path(&root_folder);
        info!("Database path: {}", db_path.display());

        db::init_database(&db_path)
            .await
            .with_context(|| format!("Failed to open database {}", db_path.display()))?
    };

    let term_count = db::count_terms(&pool).await?;
    info!("✓ Term store ready ({} terms)", term_count);

    let static_dir = args
        .static_dir
        .or(toml_config.static_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
    info!("Static files: {}", static_dir.display());

    let state = AppState::new(pool.clone(), static_dir);
    let app = build_router(state);

    let port = args.port.or(toml_config.port).unwrap_or(DEFAULT_PORT);
    let bind = args
        .bind
        .or(toml_config.bind)
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    let ip: IpAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", bind))?;
    let addr = SocketAddr::new(ip, port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("mydict listening on http://{}", addr);
    info!("Term list: http://{}/web", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
///
/// A signal that cannot be installed is logged and never fires, so the server
/// keeps running on the remaining one.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, closing term store"),
            Err(e) => {
                warn!("Ctrl+C handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, closing term store");
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
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
}
