// crates/server/src/main.rs
//! Cruxlog server binary.
//!
//! Opens (or creates) the SQLite database, then serves the REST API on
//! localhost. All configuration comes from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cruxlog_db::Database;
use cruxlog_server::create_app;

/// Default port for the server.
const DEFAULT_PORT: u16 = 47420;

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("CRUXLOG_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get an explicit database path from the environment, if set.
fn get_db_path() -> Option<PathBuf> {
    std::env::var("CRUXLOG_DB").ok().map(PathBuf::from)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    eprintln!("\n\u{1f9d7} cruxlog v{}\n", env!("CARGO_PKG_VERSION"));

    let db = match get_db_path() {
        Some(path) => Database::new(&path).await?,
        None => Database::open_default().await?,
    };
    eprintln!("  \u{2713} Database: {}", db.db_path().display());

    let app = create_app(db);

    let port = get_port();
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("  \u{2192} http://localhost:{}\n", port);

    axum::serve(listener, app).await?;

    Ok(())
}
