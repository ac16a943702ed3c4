//! crmgrid web server
//!
//! Binds the HTTP surface and wires configuration into the shared state.

use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crmgrid_core::{CrmClient, PropertyResolver};
use crmgrid_web::{app, AppState};

/// crmgrid - browser front-end for CRM custom object records
#[derive(Parser, Debug)]
#[command(name = "crmgrid-web")]
#[command(about = "List and create CRM custom object records from the browser")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "CRMGRID_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "CRMGRID_PORT", default_value = "3000")]
    port: u16,

    /// Bearer access token for the CRM API
    #[arg(long, env = "CRMGRID_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Custom object type identifier
    #[arg(long, env = "CRMGRID_OBJECT_TYPE", default_value = "2-192837072")]
    object_type: String,

    /// Comma-separated property override list; empty means auto-resolve
    /// from the object-type schema
    #[arg(long, env = "CRMGRID_PROPERTIES", default_value = "")]
    properties: String,

    /// CRM API base URL
    #[arg(long, env = "CRMGRID_BASE_URL", default_value = "https://api.hubapi.com")]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads the environment
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = match args.access_token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => Some(CrmClient::new(&args.base_url, token)?),
        None => {
            warn!("CRMGRID_ACCESS_TOKEN is not set; CRM routes will return a configuration error");
            None
        }
    };

    let resolver = PropertyResolver::from_spec(&args.properties);
    let state = Arc::new(AppState::new(client, resolver, args.object_type.clone()));

    let router = app(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting crmgrid web server");
    info!("Listening on http://{}", addr);
    info!("Object type: {}", args.object_type);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
