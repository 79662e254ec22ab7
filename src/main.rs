//! Simscan HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use simscan::config::Config;
use simscan::embedding::{EmbedderConfig, SentenceEmbedder};
use simscan::engine::SimilarityEngine;
use simscan::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
███████╗██╗███╗   ███╗███████╗ ██████╗ █████╗ ███╗   ██╗
██╔════╝██║████╗ ████║██╔════╝██╔════╝██╔══██╗████╗  ██║
███████╗██║██╔████╔██║███████╗██║     ███████║██╔██╗ ██║
╚════██║██║██║╚██╔╝██║╚════██║██║     ██╔══██║██║╚██╗██║
███████║██║██║ ╚═╝ ██║███████║╚██████╗██║  ██║██║ ╚████║
╚══════╝╚═╝╚═╝     ╚═╝╚══════╝ ╚═════╝╚═╝  ╚═╝╚═╝  ╚═══╝

        SEGMENT. SCORE. FLAG.
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Simscan starting"
    );

    let embedder_config = if let Some(dir) = &config.model_dir {
        EmbedderConfig::new(dir.clone())
    } else {
        tracing::warn!("No SIMSCAN_MODEL_DIR configured, running embedder in stub mode");
        EmbedderConfig::stub()
    };
    let embedder = SentenceEmbedder::load(embedder_config)?;
    let embedder_stub = embedder.is_stub();

    let engine = Arc::new(SimilarityEngine::new(Arc::new(embedder)));
    let state = HandlerState::new(engine, embedder_stub);

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Simscan shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("SIMSCAN_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
