use anyhow::Result;
use axum::Router;
use catalog::DataSource;
use clap::Parser;
use server::{build_app, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Movies JSON file (defaults to the bundled catalog)
    #[arg(long)]
    movies: Option<PathBuf>,
    /// Reviews JSON file (defaults to the bundled reviews)
    #[arg(long)]
    reviews: Option<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let state = AppState::load(&DataSource::from_option(args.movies), &DataSource::from_option(args.reviews));
    let app: Router = build_app(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
