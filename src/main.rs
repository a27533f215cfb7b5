use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use wedding_ease::application::services::{ChatService, ResponseSimulator};
use wedding_ease::infrastructure::observability::{TracingConfig, init_tracing};
use wedding_ease::infrastructure::persistence::InMemorySessionRepository;
use wedding_ease::infrastructure::random::ThreadRngSource;
use wedding_ease::infrastructure::time::TokioDelay;
use wedding_ease::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, environment) = Settings::from_env().context("Failed to load settings")?;

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        level: settings.logging.level.clone(),
        json_format: settings.logging.json,
    });

    let window = settings.simulator.delay_window();
    tracing::info!(
        min_delay_ms = window.min_ms,
        max_delay_ms = window.max_ms,
        "Response simulator configured"
    );

    let simulator = Arc::new(ResponseSimulator::new(
        Arc::new(ThreadRngSource),
        Arc::new(TokioDelay),
        window,
    ));

    let chat_service = Arc::new(ChatService::new(
        Arc::new(InMemorySessionRepository::new()),
        simulator,
        settings.session.policy(),
    ));

    let router = create_router(AppState::new(chat_service));

    let ip = settings
        .server
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("Invalid server host: {}", settings.server.host))?;
    let addr = SocketAddr::new(ip, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
