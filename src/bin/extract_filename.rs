//! Filename lookup server
//!
//! Resolves Google Drive file ids to display names for the editor's bulk
//! link paste. Reads `GOOGLE_DRIVE_API_KEY` and `PORT` (default 3001).

use anyhow::Result;
use lw_embed::lookup::google::GoogleDriveClient;
use lw_embed::lookup::server::{router, AppState, EXTRACT_FILENAME_PATH};
use lw_embed::lookup::LookupConfig;
use std::net::SocketAddr;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lw_embed=info".parse()?)
                .add_directive("extract_filename=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = LookupConfig::from_env();
    if config.api_key.is_none() {
        warn!("GOOGLE_DRIVE_API_KEY is not set; lookups will fail until it is");
    }

    let app = router(AppState {
        config,
        drive: GoogleDriveClient::new(),
    });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Serving {} on http://{}", EXTRACT_FILENAME_PATH, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
