mod proxy;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

use proxy::{proxy_router, ProxyState};

#[derive(Parser)]
#[command(name = "kodigo-proxy")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value = "4535", env = "KODIGO_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0", env = "KODIGO_BIND")]
    bind: String,

    /// Catalog origin that `/api/itunes/*` is rewritten to.
    #[arg(long, default_value = proxy::DEFAULT_UPSTREAM, env = "KODIGO_UPSTREAM")]
    upstream: String,

    /// Seconds to wait on the catalog before answering 502.
    #[arg(long, default_value = "15", env = "KODIGO_UPSTREAM_TIMEOUT_SECS")]
    upstream_timeout_secs: u64,

    /// Path to the built kodigo-web dist directory.
    #[arg(long, env = "KODIGO_WEB_DIR")]
    web_dir: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.upstream_timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            error!("failed to build upstream client: {e}");
            std::process::exit(1);
        });

    let state = Arc::new(ProxyState::new(client, &args.upstream));
    info!("forwarding /api/itunes/* to {}", state.upstream);

    let router = proxy_router(state);

    let app = if let Some(ref web_dir) = args.web_dir {
        info!("serving web UI from {}", web_dir.display());
        let spa_fallback =
            ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router.fallback_service(spa_fallback)
    } else {
        router
    };

    let addr = format!("{}:{}", args.bind, args.port);

    info!("binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("kodigo-proxy listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
