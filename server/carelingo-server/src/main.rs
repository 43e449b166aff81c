use std::{env, net::SocketAddr};

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use carelingo_server::{create_app, CareLingoServer};

/// CareLingo Engine HTTP Server
#[derive(Parser, Debug)]
#[command(name = "carelingo-server")]
#[command(about = "Healthcare translation and transcription HTTP API server")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(args.verbose);

    info!("🏥 Starting CareLingo Engine HTTP Server");
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION"));
    info!("🌐 Bind address: {}:{}", args.host, args.port);

    let server = CareLingoServer::from_env();
    info!(
        providers = ?server.translator.provider_ids(),
        transcription_configured = server.transcriber.is_configured(),
        "Translation chain assembled"
    );

    let app = create_app(server);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!("🚀 CareLingo server running on http://{addr}");
    info!("📋 Health check available at: http://{addr}/health");
    info!("📖 API docs available at: http://{addr}/docs");

    axum::serve(listener, app).await.context("HTTP server error")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // Check if we're in development or production
    let is_development =
        env::var("CARELINGO_ENV").unwrap_or_else(|_| "development".to_string()) == "development";

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "carelingo_server={},tower_http=info,hyper=info,reqwest=info",
            level
        )
        .into()
    });

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .init();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}
