//! Veracity HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use veracity::config::Config;
use veracity::fetcher::HttpPageFetcher;
use veracity::gateway::{HandlerState, create_router_with_state};
use veracity::history::VerificationLog;
use veracity::reliability::FileTrustRegistry;
use veracity::repository::InMemoryArticleRepository;
use veracity::verify::VerificationService;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
██╗   ██╗███████╗██████╗  █████╗  ██████╗██╗████████╗██╗   ██╗
██║   ██║██╔════╝██╔══██╗██╔══██╗██╔════╝██║╚══██╔══╝╚██╗ ██╔╝
██║   ██║█████╗  ██████╔╝███████║██║     ██║   ██║    ╚████╔╝
╚██╗ ██╔╝██╔══╝  ██╔══██╗██╔══██║██║     ██║   ██║     ╚██╔╝
 ╚████╔╝ ███████╗██║  ██║██║  ██║╚██████╗██║   ██║      ██║
  ╚═══╝  ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝╚═╝   ╚═╝      ╚═╝

        VERIFY. SCORE. REPORT.
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
        "Veracity starting"
    );

    let registry = match &config.registry_path {
        Some(path) => {
            let registry = FileTrustRegistry::from_file(path)?;
            tracing::info!(path = %path.display(), sources = registry.len(), "trust registry loaded");
            Arc::new(registry)
        }
        None => {
            tracing::warn!("No VERACITY_REGISTRY_PATH configured, all sources score neutral");
            Arc::new(FileTrustRegistry::empty())
        }
    };

    let repository = match &config.articles_path {
        Some(path) => Arc::new(InMemoryArticleRepository::from_seed_file(path)?),
        None => {
            tracing::info!("No VERACITY_ARTICLES_PATH configured, starting with an empty corpus");
            Arc::new(InMemoryArticleRepository::new())
        }
    };

    let fetcher = Arc::new(HttpPageFetcher::new(
        Duration::from_secs(config.fetch_timeout_secs),
        config.page_cache_capacity,
    )?);

    let service = Arc::new(VerificationService::new(
        Arc::clone(&repository),
        fetcher,
        Arc::clone(&registry),
    ));
    let history = Arc::new(VerificationLog::new(config.history_capacity));

    let state = HandlerState::new(service, repository, registry, history);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Veracity shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("VERACITY_PORT")
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
