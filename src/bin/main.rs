use finley::{
    advisor::GenerativeAdvisor, console::TerminalConsole, gemini::GeminiClient,
    orchestrator::Orchestrator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("finley=warn")),
        )
        .init();

    info!("Finley advisory orchestrator starting");

    let advisor = GenerativeAdvisor::new(Box::new(GeminiClient::new()));
    let mut orchestrator = Orchestrator::new(TerminalConsole::new(), advisor);

    match orchestrator.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Advisory session failed: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}
