//! SmartStudy server binary
//!
//! Run with: cargo run -p smartstudy --bin smartstudy-server [config.toml]

use smartstudy::{config::AppConfig, server::StudyServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartstudy=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                    SmartStudy Backend                     ║
║      Summaries, Quizzes, Flashcards and Study Chat        ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration: SMARTSTUDY_CONFIG, then first argument, then defaults
    let config_path = std::env::var("SMARTSTUDY_CONFIG")
        .ok()
        .or_else(|| std::env::args().nth(1));
    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::from_file(&path)?
        }
        None => AppConfig::default(),
    };
    config.apply_env()?;
    config.validate()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM backend: {:?}", config.llm.backend);
    tracing::info!("  - LLM endpoint: {}", config.llm.resolved_base_url());
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Max upload size: {} bytes", config.server.max_upload_size);
    tracing::info!("  - Upload dir: {}", config.extraction.upload_dir.display());

    // Create server and check the model endpoint
    let server = StudyServer::new(config)?;

    tracing::info!("Checking model API...");
    match server.state().llm_provider().health_check().await {
        Ok(true) => tracing::info!("Model API is reachable"),
        Ok(false) => tracing::warn!("Model API answered but reported a problem"),
        Err(e) => tracing::warn!("Model API not available: {}", e),
    }

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload-file      - Extract text from PDF/DOCX");
    println!("  POST /generate-summary - Summarize text");
    println!("  POST /generate-quiz    - Multiple-choice quiz");
    println!("  POST /flashcards       - Flashcards from text or file");
    println!("  POST /chat             - Tutoring chat");
    println!("  POST /generate-hint    - Hint for a quiz question");
    println!("  POST /explain-answer   - Explain a quiz answer");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
