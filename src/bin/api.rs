use financial_insight_orchestrator::{
    api::start_server,
    config::BackendRegistry,
    models::BackendKind,
    orchestrator::InsightOrchestrator,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let api_port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("API_PORT"))
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    info!("Financial Insight Orchestrator - API Server");
    info!("Port: {}", api_port);

    let registry = BackendRegistry::from_env();
    for kind in BackendKind::ALL {
        info!(
            backend = %kind,
            configured = registry.is_configured(kind),
            "Backend status"
        );
    }

    let orchestrator = Arc::new(InsightOrchestrator::new(registry));

    info!("Orchestrator initialized, starting API server");

    start_server(orchestrator, api_port).await?;

    Ok(())
}
