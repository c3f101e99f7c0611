//! fc-ui - FontCanvas user-facing HTTP module

use anyhow::Result;
use clap::Parser;
use tracing::info;

use fc_common::config::{prepare_root_folder, resolve_root_folder};
use fc_ui::services::pairing::PairingClient;
use fc_ui::{build_router, AppState};

/// FontCanvas discovery and preview service
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Root folder holding the database (overrides FC_ROOT and config file)
    #[arg(long)]
    root_folder: Option<String>,

    /// Port to listen on
    #[arg(long, default_value_t = 5730)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting FontCanvas UI (fc-ui) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "FC_ROOT");
    let db_path = prepare_root_folder(&root_folder)?;
    info!("Database path: {}", db_path.display());

    let pool = fc_common::db::init_database(&db_path).await?;

    let state = AppState::new(pool, PairingClient::from_env());
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
