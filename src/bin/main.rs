use financial_insight_orchestrator::{
    config::BackendRegistry, health, orchestrator::InsightOrchestrator,
};
use std::collections::HashMap;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    info!("Financial Insight Orchestrator starting");

    let registry = BackendRegistry::from_env();
    let orchestrator = InsightOrchestrator::new(registry);

    // One short conversation
    let first = orchestrator
        .chat("Can you review my spending?", None)
        .await;
    println!("\n=== CHAT ===");
    println!("{}", first.text);

    let second = orchestrator
        .chat("How much should I be saving?", Some(first.context))
        .await;
    println!("\n{}", second.text);

    // Document analysis
    let statement = "Monthly income $5,000. Rent $1,500, groceries $600. \
                     Savings grew by $1,000 and spending stayed under budget.";
    let analysis = orchestrator.analyze_document(statement).await;

    println!("\n=== DOCUMENT ANALYSIS ===");
    for insight in &analysis.insights {
        println!("{}\n", insight);
    }
    println!("Summary: {}", analysis.summary);

    // Health score
    let mut expenses = HashMap::new();
    expenses.insert("Housing".to_string(), 1500.0);
    expenses.insert("Food".to_string(), 600.0);
    let score = health::score(5000.0, &expenses, 1000.0);

    println!("\n=== FINANCIAL HEALTH ===");
    println!("Score: {:.1}/100", score);

    Ok(())
}
